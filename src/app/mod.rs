//! Application Shell
//!
//! App bootstrap, global entity handles, and the root workspace view.

pub mod application;
pub mod entities;
pub mod workspace;
