//! Header Component
//!
//! The site header with logo, title, docs navigation, and the locale
//! switcher.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Window,
};

use crate::app::entities::AppEntities;
use crate::components::locale_switcher::LocaleSwitcher;
use crate::i18n::t;
use crate::pages::DocsPage;
use crate::theme::colors::SiteColors;

/// Header component
pub struct Header {
    entities: AppEntities,
    switcher: Entity<LocaleSwitcher>,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let switcher = cx.new(|cx| {
            LocaleSwitcher::new(entities.router.clone(), entities.prefs.clone(), cx)
        });

        // Re-render nav labels and highlight on navigation
        cx.observe(&entities.router, |_this, _, cx| cx.notify())
            .detach();

        Self { entities, switcher }
    }

    fn render_nav_link(&self, page: DocsPage, cx: &Context<Self>) -> impl IntoElement {
        let router = self.entities.router.read(cx);
        let locale = router.current_locale();
        let active = DocsPage::resolve(router.doc_segments()) == Some(page);

        let entities = self.entities.clone();

        div()
            .id(page.nav_id())
            .px_3()
            .py_1()
            .rounded_md()
            .text_color(SiteColors::text_header())
            .text_size(px(13.0))
            .cursor_pointer()
            .when(active, |s| s.bg(gpui::rgba(0xffffff22)))
            .hover(|s| s.bg(gpui::rgba(0xffffff44)))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.router.update(cx, |router, cx| {
                    let route = page.route(router.current_locale());
                    router.navigate(route);
                    cx.notify();
                });
            })
            .child(t(locale, page.nav_key()))
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.router.read(cx).current_locale();
        let title = t(locale, "app-title");

        div()
            .h(px(48.0))
            .w_full()
            .bg(SiteColors::header_bg())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            // Left side: Logo and title
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    // Logo placeholder
                    .child(
                        div()
                            .size(px(32.0))
                            .rounded_md()
                            .bg(gpui::rgba(0xffffffcc))
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(SiteColors::header_bg())
                            .font_weight(gpui::FontWeight::BOLD)
                            .child("D"),
                    )
                    .child(
                        div()
                            .text_color(SiteColors::text_header())
                            .text_size(px(18.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child(title),
                    ),
            )
            // Right side: navigation and locale switcher
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_1()
                            .children(
                                DocsPage::all()
                                    .iter()
                                    .map(|page| self.render_nav_link(*page, cx)),
                            ),
                    )
                    .child(self.switcher.clone()),
            )
    }
}
