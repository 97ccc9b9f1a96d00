//! Router - Route Model and Locale-Aware Path Rewriting
//!
//! The site addresses every page with a URL-style path whose leading
//! segment may carry a locale code (`/zh/docs/intro`). This module owns
//! the path model, the locale rewrite rules, and the in-app router
//! entity that views observe for navigation.

use std::fmt;

use tracing::info;

use crate::i18n::Locale;

/// A URL-style path, stored as its non-empty slash-delimited segments.
///
/// `/zh/docs/intro` is `["zh", "docs", "intro"]`; the site root `/` is
/// the empty segment list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutePath {
    segments: Vec<String>,
}

impl RoutePath {
    /// The site root, `/`
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a slash-delimited path string, dropping empty segments
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Build a path from segments
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// The path's segments, in order
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The leading segment, if any
    pub fn leading(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    /// Rewrite this path so its locale segment is `target`.
    ///
    /// If the leading segment is a member of the configured locale set it
    /// is replaced; otherwise `target` is inserted as a new leading
    /// segment. Applying the rewrite twice with the same target yields
    /// the same path as applying it once.
    pub fn with_locale(&self, locales: &[Locale], target: Locale) -> RoutePath {
        let mut segments = self.segments.clone();
        match segments.first() {
            Some(first) if locales.iter().any(|l| l.as_str() == first) => {
                segments[0] = target.as_str().to_string();
            }
            _ => segments.insert(0, target.as_str().to_string()),
        }
        RoutePath { segments }
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.segments.join("/"))
    }
}

/// Select the locale the switcher navigates to: the first configured
/// locale that differs from `current`, or `current` itself when the set
/// has no other member (a no-op switch).
pub fn target_locale(current: Locale, locales: &[Locale]) -> Locale {
    locales
        .iter()
        .copied()
        .find(|locale| *locale != current)
        .unwrap_or(current)
}

/// In-app router: the configured locale set and the current path.
///
/// Views hold this as a GPUI entity and observe it; mutations go through
/// `Entity::update` with an explicit `cx.notify()`, so the struct itself
/// stays free of UI context and fully unit-testable.
#[derive(Debug)]
pub struct RouterState {
    /// Configured locales, in registry order (never empty)
    locales: Vec<Locale>,
    /// Current path
    path: RoutePath,
}

impl RouterState {
    /// Create a router over the given locale set, starting at `path`
    pub fn new(locales: Vec<Locale>, path: RoutePath) -> Self {
        debug_assert!(!locales.is_empty(), "locale set must not be empty");
        Self { locales, path }
    }

    /// The configured locale set
    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    /// The current path
    pub fn path(&self) -> &RoutePath {
        &self.path
    }

    /// The active locale, derived from the leading path segment.
    ///
    /// A path without a locale prefix belongs to the first configured
    /// locale.
    pub fn current_locale(&self) -> Locale {
        self.path
            .leading()
            .and_then(|first| {
                self.locales
                    .iter()
                    .copied()
                    .find(|l| l.as_str() == first)
            })
            .unwrap_or(self.locales[0])
    }

    /// Route segments with any locale prefix removed
    pub fn doc_segments(&self) -> &[String] {
        match self.path.leading() {
            Some(first) if self.locales.iter().any(|l| l.as_str() == first) => {
                &self.path.segments()[1..]
            }
            _ => self.path.segments(),
        }
    }

    /// Navigate to `path`. Fire-and-forget: the path is replaced as-is,
    /// with no validation or history.
    pub fn navigate(&mut self, path: RoutePath) {
        info!(path = %path, "navigate");
        self.path = path;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let path = RoutePath::parse("/zh/docs/intro");
        assert_eq!(path.segments(), ["zh", "docs", "intro"]);
        assert_eq!(path.to_string(), "/zh/docs/intro");
    }

    #[test]
    fn test_parse_drops_empty_segments() {
        let path = RoutePath::parse("//docs//intro/");
        assert_eq!(path.segments(), ["docs", "intro"]);
    }

    #[test]
    fn test_root_path() {
        assert_eq!(RoutePath::root().to_string(), "/");
        assert_eq!(RoutePath::parse("/"), RoutePath::root());
    }

    #[test]
    fn test_target_locale_two_locales() {
        let locales = Locale::all();
        assert_eq!(target_locale(Locale::En, locales), Locale::Zh);
        assert_eq!(target_locale(Locale::Zh, locales), Locale::En);
    }

    #[test]
    fn test_target_locale_single_locale_is_noop() {
        assert_eq!(target_locale(Locale::En, &[Locale::En]), Locale::En);
    }

    #[test]
    fn test_with_locale_replaces_existing_prefix() {
        let path = RoutePath::parse("/zh/docs/intro");
        let rewritten = path.with_locale(Locale::all(), Locale::En);
        assert_eq!(rewritten.segments(), ["en", "docs", "intro"]);
    }

    #[test]
    fn test_with_locale_inserts_missing_prefix() {
        let path = RoutePath::parse("/docs/intro");
        let rewritten = path.with_locale(Locale::all(), Locale::En);
        assert_eq!(rewritten.segments(), ["en", "docs", "intro"]);
    }

    #[test]
    fn test_with_locale_on_root() {
        let rewritten = RoutePath::root().with_locale(Locale::all(), Locale::En);
        assert_eq!(rewritten.to_string(), "/en");
    }

    #[test]
    fn test_with_locale_is_idempotent() {
        let path = RoutePath::parse("/docs/intro");
        let once = path.with_locale(Locale::all(), Locale::Zh);
        let twice = once.with_locale(Locale::all(), Locale::Zh);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_current_locale_from_prefix() {
        let router = RouterState::new(Locale::all().to_vec(), RoutePath::parse("/zh/docs/intro"));
        assert_eq!(router.current_locale(), Locale::Zh);
    }

    #[test]
    fn test_current_locale_falls_back_to_first_configured() {
        let router = RouterState::new(Locale::all().to_vec(), RoutePath::parse("/docs/intro"));
        assert_eq!(router.current_locale(), Locale::En);

        let router = RouterState::new(Locale::all().to_vec(), RoutePath::root());
        assert_eq!(router.current_locale(), Locale::En);
    }

    #[test]
    fn test_doc_segments_strip_locale_prefix() {
        let router = RouterState::new(Locale::all().to_vec(), RoutePath::parse("/zh/docs/intro"));
        assert_eq!(router.doc_segments(), ["docs", "intro"]);

        let router = RouterState::new(Locale::all().to_vec(), RoutePath::parse("/docs/intro"));
        assert_eq!(router.doc_segments(), ["docs", "intro"]);

        let router = RouterState::new(Locale::all().to_vec(), RoutePath::parse("/en"));
        assert!(router.doc_segments().is_empty());
    }

    #[test]
    fn test_navigate_replaces_path() {
        let mut router = RouterState::new(Locale::all().to_vec(), RoutePath::root());
        router.navigate(RoutePath::parse("/en/docs/widgets"));
        assert_eq!(router.path().to_string(), "/en/docs/widgets");
        assert_eq!(router.current_locale(), Locale::En);
    }

    #[test]
    fn test_switch_round_trip() {
        // en -> zh -> en restores the original path
        let locales = Locale::all();
        let path = RoutePath::parse("/en/docs/intro");
        let zh = path.with_locale(locales, target_locale(Locale::En, locales));
        assert_eq!(zh.segments(), ["zh", "docs", "intro"]);
        let en = zh.with_locale(locales, target_locale(Locale::Zh, locales));
        assert_eq!(en, path);
    }
}
