//! UI Components
//!
//! Reusable components, split into primitives, layout pieces, and the
//! two featured widgets: the counter demo and the locale switcher.

pub mod counter;
pub mod layout;
pub mod locale_switcher;
pub mod primitives;
