//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use tracing::error;

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::i18n::t;

actions!(docsite, [Quit]);

/// Run the Docsite GUI application
pub fn run_app() {
    Application::new().run(|cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            // If no windows remain, quit the application
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Initialize global entities
        let entities = AppEntities::init(cx);
        cx.set_global(entities.clone());

        let locale = entities.router.read(cx).current_locale();
        let title = t(locale, "app-title");

        // Create main window
        let bounds = Bounds::centered(None, gpui::size(px(1100.0), px(720.0)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(title),
                appears_transparent: false,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        if let Err(e) = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), cx))
        }) {
            error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
