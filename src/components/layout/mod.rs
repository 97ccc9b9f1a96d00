//! Layout Components
//!
//! Structural pieces of the application shell.

pub mod header;
