use std::fmt;

use crate::roster::Roster;
use crate::speaker::Speaker;

/// Ordered container that exclusively owns its speakers.
///
/// Each slot holds a `Box<dyn Speaker>` moved in on [`Kennel::append`]; the
/// kennel never hands out ownership again, only borrows. Dropping the kennel
/// drops every speaker exactly once.
#[derive(Default)]
pub struct Kennel {
    animals: Vec<Box<dyn Speaker>>,
}

impl Kennel {
    pub fn new() -> Self {
        Self {
            animals: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            animals: Vec::with_capacity(capacity),
        }
    }

    /// Builds one speaker per roster entry, in roster order.
    pub fn from_roster(roster: &Roster) -> Self {
        roster.animals.iter().map(|species| species.build()).collect()
    }

    pub fn append(&mut self, animal: Box<dyn Speaker>) {
        tracing::debug!(speaker = animal.message(), slot = self.animals.len(), "appended");
        self.animals.push(animal);
    }

    pub fn adopt<S: Speaker + 'static>(&mut self, animal: S) {
        self.append(Box::new(animal));
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Speaker> + '_ {
        self.animals.iter().map(|animal| animal.as_ref())
    }

    /// Visits every speaker in insertion order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&dyn Speaker),
    {
        for animal in &self.animals {
            f(animal.as_ref());
        }
    }

    pub fn speak_all(&self) {
        tracing::debug!(count = self.len(), "kennel speaking");
        self.for_each(|animal| animal.speak());
    }

    /// The lines [`Kennel::speak_all`] prints, without printing them.
    pub fn transcript(&self) -> Vec<&'static str> {
        self.iter().map(|animal| animal.message()).collect()
    }
}

impl FromIterator<Box<dyn Speaker>> for Kennel {
    fn from_iter<I: IntoIterator<Item = Box<dyn Speaker>>>(iter: I) -> Self {
        let mut kennel = Kennel::new();
        kennel.extend(iter);
        kennel
    }
}

impl Extend<Box<dyn Speaker>> for Kennel {
    fn extend<I: IntoIterator<Item = Box<dyn Speaker>>>(&mut self, iter: I) {
        for animal in iter {
            self.append(animal);
        }
    }
}

impl fmt::Debug for Kennel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.transcript()).finish()
    }
}

impl Drop for Kennel {
    fn drop(&mut self) {
        tracing::debug!(count = self.animals.len(), "releasing kennel");
    }
}
