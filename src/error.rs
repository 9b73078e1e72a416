use std::path::PathBuf;
use thiserror::Error;

/// Failures loading or saving a roster. Speaking itself never fails.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Failed to read roster file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse roster: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize roster: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unknown species: '{0}' (expected animal, dog or cat)")]
    UnknownSpecies(String),
}

impl RosterError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
