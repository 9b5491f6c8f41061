//! State and territory information: lookup by full or partial name.
//!
//! The record list is loaded once through a [`StateInfoSource`] and searched
//! in memory.

pub mod directory;
pub mod error;
pub mod source;

pub use directory::{StateDirectory, StateInfo};
pub use error::StateSearchError;
pub use source::{InMemoryStateSource, JsonFileStateSource, StateInfoSource};
