//! Colors - Site Theme Colors

use gpui::{rgb, Rgba};

/// Site color palette - All colors are accessed via associated functions
pub struct SiteColors;

impl SiteColors {
    // Chrome
    /// Header background - Slate
    pub fn header_bg() -> Rgba { rgb(0x1f2937) }
    /// Header text
    pub fn text_header() -> Rgba { rgb(0xffffff) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Demo card background
    pub fn card_bg() -> Rgba { rgb(0xf3f4f6) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }

    // Button colors
    /// Primary button background
    pub fn button_primary_bg() -> Rgba { rgb(0x3b82f6) }
    /// Primary button text
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    /// Neutral button background
    pub fn button_neutral_bg() -> Rgba { rgb(0xe5e7eb) }
    /// Neutral button hover background
    pub fn button_neutral_hover() -> Rgba { rgb(0xd1d5db) }
    /// Ghost button text
    pub fn button_ghost_text() -> Rgba { rgb(0x6b7280) }
}
