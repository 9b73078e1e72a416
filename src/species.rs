use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RosterError;
use crate::speaker::{Animal, Cat, Dog, Speaker};

/// Tag naming one of the speaking variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Animal,
    Dog,
    Cat,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Animal, Species::Dog, Species::Cat];

    pub fn name(self) -> &'static str {
        match self {
            Species::Animal => "animal",
            Species::Dog => "dog",
            Species::Cat => "cat",
        }
    }

    /// Allocates the variant this tag names, handing ownership to the caller.
    pub fn build(self) -> Box<dyn Speaker> {
        match self {
            Species::Animal => Box::new(Animal),
            Species::Dog => Box::new(Dog),
            Species::Cat => Box::new(Cat),
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Species {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Species::ALL
            .into_iter()
            .find(|species| species.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RosterError::UnknownSpecies(s.to_string()))
    }
}
