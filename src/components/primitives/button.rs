//! Button Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::SiteColors;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button (blue)
    #[default]
    Primary,
    /// Neutral button (gray)
    Neutral,
    /// Ghost button (transparent)
    Ghost,
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the click handler
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a primary button
    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    /// Create a neutral button
    pub fn neutral(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Neutral)
    }

    /// Create a ghost button
    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, text_color, hover_bg) = match self.variant {
            ButtonVariant::Primary => (
                SiteColors::button_primary_bg(),
                SiteColors::button_primary_text(),
                gpui::rgba(0x2563ebff),
            ),
            ButtonVariant::Neutral => (
                SiteColors::button_neutral_bg(),
                SiteColors::text_primary(),
                SiteColors::button_neutral_hover(),
            ),
            ButtonVariant::Ghost => (
                gpui::rgba(0x00000000),
                SiteColors::button_ghost_text(),
                gpui::rgba(0xf3f4f6ff),
            ),
        };

        let mut element = div()
            .id(self.id)
            .px(px(16.0))
            .py(px(8.0))
            .bg(bg_color)
            .text_color(text_color)
            .text_size(px(14.0))
            .rounded_md()
            .cursor_pointer()
            .hover(move |s| s.bg(hover_bg))
            .child(self.label);

        if let Some(handler) = self.on_click {
            element = element.on_click(handler);
        }

        element
    }
}
