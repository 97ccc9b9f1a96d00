//! LocaleSwitcher Component
//!
//! The header control that toggles the site language. It reads the
//! current locale and path from the injected router, rewrites the
//! locale segment, and issues a fire-and-forget navigation request.
//! The button is labeled with the locale it will switch TO.

use gpui::{prelude::*, Context, Entity, IntoElement, Render, Window};

use crate::components::primitives::button::Button;
use crate::router::{target_locale, RouterState};
use crate::state::prefs::{save_prefs_in_background, Prefs};

/// Locale switcher button
pub struct LocaleSwitcher {
    router: Entity<RouterState>,
    prefs: Entity<Prefs>,
}

impl LocaleSwitcher {
    /// Create a switcher over the injected router and preferences
    pub fn new(router: Entity<RouterState>, prefs: Entity<Prefs>, cx: &mut Context<Self>) -> Self {
        // Re-render whenever navigation changes the current locale
        cx.observe(&router, |_this, _, cx| cx.notify()).detach();

        Self { router, prefs }
    }
}

impl Render for LocaleSwitcher {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let router = self.router.read(cx);
        let target = target_locale(router.current_locale(), router.locales());
        let next_path = router.path().with_locale(router.locales(), target);

        let router = self.router.clone();
        let prefs = self.prefs.clone();

        Button::neutral("locale-switcher", target.display_label()).on_click(
            move |_event, _window, cx| {
                router.update(cx, |router, cx| {
                    router.navigate(next_path.clone());
                    cx.notify();
                });

                // Remember the choice across sessions
                let snapshot = prefs.update(cx, |prefs, cx| {
                    prefs.set_locale(target);
                    cx.notify();
                    prefs.clone()
                });
                save_prefs_in_background(cx, snapshot);
            },
        )
    }
}
