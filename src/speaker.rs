//! The `Speaker` capability and its three variants.
//!
//! Every variant is a unit struct: there is no state to mutate, so speaking
//! the same value twice always prints the same line.

/// Anything that can introduce itself on standard output.
pub trait Speaker {
    /// The fixed text this variant identifies itself with.
    fn message(&self) -> &'static str;

    /// Prints [`Speaker::message`] followed by a newline.
    fn speak(&self) {
        println!("{}", self.message());
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Animal;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dog;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cat;

impl Speaker for Animal {
    fn message(&self) -> &'static str {
        "Animal speaking"
    }
}

impl Speaker for Dog {
    fn message(&self) -> &'static str {
        "Dog speaking"
    }
}

impl Speaker for Cat {
    // lowercase is the expected output
    fn message(&self) -> &'static str {
        "cat speaking"
    }
}
