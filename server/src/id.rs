// id.rs
use std::sync::atomic::{AtomicI64, Ordering};

use rand::Rng;

use crate::news::NewsId;

/// Source of identifiers for newly created news items.
///
/// Implementations are not required to be collision free; the store keeps
/// whichever record was inserted last under a given id.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> NewsId;
}

/// Non-negative 63-bit random ids drawn from the thread-local, OS-seeded RNG.
#[derive(Debug, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&self) -> NewsId {
        rand::thread_rng().gen_range(0..=NewsId::MAX)
    }
}

/// Monotonic ids starting at 1.
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicI64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: NewsId) -> Self {
        Self {
            next: AtomicI64::new(first),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> NewsId {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    Random,
    Sequential,
}

impl IdStrategy {
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Random => Box::new(RandomIds),
            IdStrategy::Sequential => Box::new(SequentialIds::new()),
        }
    }
}
