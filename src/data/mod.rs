//! Question suite storage.

mod loader;

pub use loader::{LoadError, SUITE_EXTENSION, SuiteStore};
