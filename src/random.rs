//! Source of randomness for picking a question.

use rand::Rng;

/// Picks a uniformly distributed index.
///
/// Injected into the server so tests can make "random" questions
/// deterministic.
pub trait IndexPicker: Send + Sync {
    /// Return an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&self, len: usize) -> usize;
}

/// Picker backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngPicker;

impl IndexPicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}
