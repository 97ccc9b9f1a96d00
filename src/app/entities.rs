//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access. Views
//! receive this bundle explicitly instead of reaching into ambient
//! state, which keeps the routing logic testable on its own.

use gpui::{App, AppContext, Entity, Global};
use tracing::warn;

use crate::i18n::Locale;
use crate::router::{RoutePath, RouterState};
use crate::state::prefs::{detect_system_locale, Prefs};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// In-app router: configured locales and current path
    pub router: Entity<RouterState>,
    /// Persisted user preferences
    pub prefs: Entity<Prefs>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities.
    ///
    /// The initial route is the home page of the preferred locale:
    /// stored preference first, then system locale, then English.
    pub fn init(cx: &mut App) -> Self {
        let prefs = Prefs::try_load().unwrap_or_else(|e| {
            warn!(error = %e, "Falling back to default preferences");
            Prefs::default()
        });

        let locale = prefs
            .locale()
            .or_else(detect_system_locale)
            .unwrap_or_default();
        let initial_path = RoutePath::from_segments([locale.as_str()]);

        Self {
            router: cx.new(|_| RouterState::new(Locale::all().to_vec(), initial_path)),
            prefs: cx.new(|_| prefs),
        }
    }
}
