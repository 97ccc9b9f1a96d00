//! Primitive Components
//!
//! Small reusable building blocks styled for the site theme.

pub mod button;
