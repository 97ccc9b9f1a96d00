//! Helper Utilities
//!
//! Common utilities used across the application.

mod fs;

pub use fs::*;
