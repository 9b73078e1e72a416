//! # Speaking Animals
//!
//! Dynamic dispatch and exclusive ownership in one small crate:
//!
//! - [`Speaker`] is the shared capability; [`Animal`], [`Dog`] and [`Cat`]
//!   each supply their own line.
//! - [`Kennel`] owns a sequence of `Box<dyn Speaker>` and releases them all
//!   when it goes out of scope.
//! - [`Roster`] describes which species a kennel is built from and can be
//!   loaded from TOML.
//!
//! Run with: `cargo run --bin speaking-animals`

pub mod error;
pub mod kennel;
pub mod logging;
pub mod roster;
pub mod speaker;
pub mod species;

pub use error::RosterError;
pub use kennel::Kennel;
pub use roster::Roster;
pub use speaker::{Animal, Cat, Dog, Speaker};
pub use species::Species;

/// Builds the kennel described by `roster` and has every animal speak.
pub fn run(roster: &Roster) {
    let kennel = Kennel::from_roster(roster);
    kennel.speak_all();
}
