//! Counter Component
//!
//! The click-counter demo widget embedded in the widgets docs page. The
//! count is owned exclusively by the view instance and discarded with
//! it; nothing outside the component can observe it.

use gpui::{div, prelude::*, px, ClickEvent, Context, IntoElement, ParentElement, Render, Styled, Window};

use crate::components::primitives::button::Button;
use crate::theme::colors::SiteColors;

/// The counter's local state: one non-negative integer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterState {
    count: u64,
}

impl CounterState {
    /// New counter, starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// The current count
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Register a click
    pub fn click(&mut self) {
        self.count += 1;
    }

    /// The text displayed under the button
    pub fn label(&self) -> String {
        format!("You clicked {} times", self.count)
    }
}

/// Counter demo widget
pub struct Counter {
    state: CounterState,
}

impl Counter {
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self {
            state: CounterState::new(),
        }
    }
}

impl Render for Counter {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_2()
            .bg(SiteColors::card_bg())
            .p_4()
            .rounded_md()
            .child(Button::primary("counter-button", "Click me!").on_click(cx.listener(
                |this, _event: &ClickEvent, _window, cx| {
                    this.state.click();
                    cx.notify();
                },
            )))
            .child(
                div()
                    .text_size(px(14.0))
                    .text_color(SiteColors::text_primary())
                    .child(self.state.label()),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_count_is_zero() {
        let state = CounterState::new();
        assert_eq!(state.count(), 0);
        assert_eq!(state.label(), "You clicked 0 times");
    }

    #[test]
    fn test_single_click() {
        let mut state = CounterState::new();
        state.click();
        assert_eq!(state.label(), "You clicked 1 times");
    }

    #[test]
    fn test_count_matches_click_sequence() {
        let mut state = CounterState::new();
        for _ in 0..42 {
            state.click();
        }
        assert_eq!(state.count(), 42);
        assert_eq!(state.label(), "You clicked 42 times");
    }
}
