//! Workspace - Main Shell
//!
//! The workspace is the root view: the header plus the docs page
//! selected by the current route. It observes the router and re-renders
//! on every navigation.

use gpui::{
    div, prelude::*, px, Context, Entity, IntoElement, ParentElement, Render, SharedString,
    Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::counter::Counter;
use crate::components::layout::header::Header;
use crate::i18n::t;
use crate::pages::DocsPage;
use crate::theme::colors::SiteColors;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    // Created lazily the first time the widgets page renders; kept so the
    // demo count survives re-renders while the page stays mounted.
    counter: Option<Entity<Counter>>,
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));

        cx.observe(&entities.router, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            header,
            counter: None,
        }
    }

    fn render_article(
        &self,
        title: SharedString,
        body: impl IntoElement,
    ) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_4()
            .p_8()
            .max_w(px(720.0))
            .child(
                div()
                    .text_size(px(24.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(SiteColors::text_primary())
                    .child(title),
            )
            .child(body)
    }

    fn render_page(&mut self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let (locale, page, path) = {
            let router = self.entities.router.read(cx);
            (
                router.current_locale(),
                DocsPage::resolve(router.doc_segments()),
                router.path().to_string(),
            )
        };

        match page {
            Some(page @ (DocsPage::Home | DocsPage::Intro)) => self
                .render_article(
                    t(locale, page.title_key()),
                    div()
                        .text_size(px(14.0))
                        .text_color(SiteColors::text_secondary())
                        .child(t(locale, page.body_key())),
                )
                .into_any_element(),
            Some(page @ DocsPage::Widgets) => {
                if self.counter.is_none() {
                    self.counter = Some(cx.new(Counter::new));
                }
                let counter = self.counter.clone();
                self.render_article(
                    t(locale, page.title_key()),
                    div()
                        .flex()
                        .flex_col()
                        .gap_4()
                        .child(
                            div()
                                .text_size(px(14.0))
                                .text_color(SiteColors::text_secondary())
                                .child(t(locale, page.body_key())),
                        )
                        .children(counter),
                )
                .into_any_element()
            }
            None => self
                .render_article(
                    t(locale, "notfound-title"),
                    div()
                        .text_size(px(14.0))
                        .text_color(SiteColors::text_muted())
                        .child(path),
                )
                .into_any_element(),
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let content = self.render_page(cx);

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(SiteColors::background())
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .bg(SiteColors::content_bg())
                    .child(content),
            )
    }
}
