//! i18n - Internationalization Module
//!
//! The locale registry plus simple translation functions using
//! HashMap-based lookups for the app chrome (titles, navigation).
//!
//! The site ships exactly two locales. Adding a third is a code change
//! here: extend [`Locale`], its label mappings, and the translation
//! table together.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    En,
    /// Chinese (Simplified)
    Zh,
}

impl Locale {
    /// All configured locales, in registry order
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Zh]
    }

    /// The locale's path segment / language tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// Human-readable label shown on the locale switcher
    pub fn display_label(&self) -> &'static str {
        match self {
            Locale::En => "🇺🇸 English",
            Locale::Zh => "🇨🇳 中文",
        }
    }

    /// Parse a language tag such as `en`, `en-US`, `zh` or `zh-CN`.
    ///
    /// Region subtags are ignored; unrecognized languages map to `None`.
    pub fn from_tag(tag: &str) -> Option<Locale> {
        let lang = tag.split(['-', '_']).next().unwrap_or(tag);
        match lang.to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "zh" => Some(Locale::Zh),
            _ => None,
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("Docs Viewer", "文档查看器"));

    // Navigation
    map.insert("nav-home", ("Home", "首页"));
    map.insert("nav-intro", ("Introduction", "介绍"));
    map.insert("nav-widgets", ("Widgets", "组件"));

    // Home page
    map.insert("home-title", ("Welcome", "欢迎"));
    map.insert(
        "home-body",
        (
            "A small bilingual documentation site, rendered natively.",
            "一个小型双语文档站点，原生渲染。",
        ),
    );

    // Intro page
    map.insert("intro-title", ("Introduction", "介绍"));
    map.insert(
        "intro-body",
        (
            "Use the navigation above to browse the docs. The button in the \
             top-right corner switches the site language.",
            "使用上方导航浏览文档。右上角的按钮可切换站点语言。",
        ),
    );

    // Widgets page
    map.insert("widgets-title", ("Interactive Widgets", "交互组件"));
    map.insert(
        "widgets-body",
        (
            "Docs pages can embed live widgets. Try the counter below.",
            "文档页面可以嵌入交互组件。试试下面的计数器。",
        ),
    );

    // Not found
    map.insert("notfound-title", ("Page not found", "页面未找到"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::En => SharedString::from(en),
            Locale::Zh => SharedString::from(zh),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_plain() {
        assert_eq!(Locale::from_tag("en"), Some(Locale::En));
        assert_eq!(Locale::from_tag("zh"), Some(Locale::Zh));
    }

    #[test]
    fn test_from_tag_with_region() {
        assert_eq!(Locale::from_tag("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_tag("zh-CN"), Some(Locale::Zh));
        assert_eq!(Locale::from_tag("zh_Hans_CN"), Some(Locale::Zh));
    }

    #[test]
    fn test_from_tag_unknown() {
        assert_eq!(Locale::from_tag("fr"), None);
        assert_eq!(Locale::from_tag(""), None);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Locale::En.display_label(), "🇺🇸 English");
        assert_eq!(Locale::Zh.display_label(), "🇨🇳 中文");
    }

    #[test]
    fn test_translate_known_key() {
        assert_eq!(t(Locale::En, "nav-home").as_ref(), "Home");
        assert_eq!(t(Locale::Zh, "nav-home").as_ref(), "首页");
    }

    #[test]
    fn test_translate_missing_key_falls_back_to_key() {
        assert_eq!(t(Locale::En, "no-such-key").as_ref(), "no-such-key");
    }
}
