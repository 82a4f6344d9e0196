//! Host environment implementations.
//!
//! [`memory`] is a self-contained element tree used by the CLI and the tests.

pub mod memory;
pub mod selector;

pub use memory::{Element, SelectOption};
pub use selector::Selector;
