//! State - GPUI Entity State Modules
//!
//! Application state lives in small GPUI entities, split by update
//! frequency to avoid unnecessary re-renders. The route itself lives in
//! [`crate::router::RouterState`].

pub mod prefs;
