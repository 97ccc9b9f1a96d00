//! Prefs - Persisted User Preferences
//!
//! The only cross-session state: the preferred site locale, stored as
//! TOML in the platform config directory. Loading falls back to the
//! system locale; saving is best-effort with logged errors.

use std::path::PathBuf;

use gpui::App;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::i18n::Locale;

fn get_prefs_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    Ok(config_dir.join("docsite-gui.toml"))
}

/// Persisted preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Prefs {
    locale: Option<String>,
}

impl Prefs {
    /// Load preferences from the config file
    pub fn try_load() -> Result<Self> {
        let path = get_prefs_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        info!(path = ?path, "Loading preferences");
        let value = std::fs::read_to_string(&path)?;
        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let prefs: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse preferences file");
            e
        })?;
        Ok(prefs)
    }

    /// The preferred locale, if one is stored and recognized
    pub fn locale(&self) -> Option<Locale> {
        self.locale.as_deref().and_then(Locale::from_tag)
    }

    /// Set the preferred locale
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = Some(locale.as_str().to_string());
    }

    /// Save preferences to disk
    pub fn save(&self) -> Result<()> {
        let path = get_prefs_path()?;
        let value = toml::to_string(self)?;
        std::fs::write(path, value)?;
        Ok(())
    }
}

/// Detect the system locale, if it maps to a configured one
pub fn detect_system_locale() -> Option<Locale> {
    Locale::from_tag(&locale_config::Locale::current().to_string())
}

/// Persist preferences on the background executor; failures are logged
/// and otherwise ignored.
pub fn save_prefs_in_background(cx: &App, prefs: Prefs) {
    cx.background_executor()
        .spawn(async move {
            if let Err(e) = prefs.save() {
                error!(error = %e, "Failed to save preferences");
            } else {
                info!("Preferences saved");
            }
        })
        .detach();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_locale() {
        assert_eq!(Prefs::default().locale(), None);
    }

    #[test]
    fn test_set_and_read_locale() {
        let mut prefs = Prefs::default();
        prefs.set_locale(Locale::Zh);
        assert_eq!(prefs.locale(), Some(Locale::Zh));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut prefs = Prefs::default();
        prefs.set_locale(Locale::En);

        let value = toml::to_string(&prefs).expect("serialize");
        let parsed: Prefs = toml::from_str(&value).expect("deserialize");
        assert_eq!(parsed.locale(), Some(Locale::En));
    }

    #[test]
    fn test_unrecognized_stored_tag_is_ignored() {
        let parsed: Prefs = toml::from_str(r#"locale = "fr""#).expect("deserialize");
        assert_eq!(parsed.locale(), None);
    }
}
