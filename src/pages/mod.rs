//! Pages - Docs Page Registry and Route Resolution
//!
//! Maps locale-stripped route segments to the pages the site can render.

use crate::i18n::Locale;
use crate::router::RoutePath;

/// Pages of the documentation site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DocsPage {
    /// Landing page ("/{locale}")
    #[default]
    Home,
    /// Introduction chapter
    Intro,
    /// Interactive widgets chapter (embeds the counter demo)
    Widgets,
}

impl DocsPage {
    /// All pages, in navigation order
    pub fn all() -> &'static [DocsPage] {
        &[DocsPage::Home, DocsPage::Intro, DocsPage::Widgets]
    }

    /// Resolve a page from route segments with the locale prefix removed
    pub fn resolve(segments: &[String]) -> Option<DocsPage> {
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
        match segments.as_slice() {
            [] => Some(DocsPage::Home),
            ["docs", "intro"] => Some(DocsPage::Intro),
            ["docs", "widgets"] => Some(DocsPage::Widgets),
            _ => None,
        }
    }

    /// The page's route segments, without a locale prefix
    pub fn doc_segments(&self) -> &'static [&'static str] {
        match self {
            DocsPage::Home => &[],
            DocsPage::Intro => &["docs", "intro"],
            DocsPage::Widgets => &["docs", "widgets"],
        }
    }

    /// Build the locale-prefixed route for this page
    pub fn route(&self, locale: Locale) -> RoutePath {
        RoutePath::from_segments(
            std::iter::once(locale.as_str()).chain(self.doc_segments().iter().copied()),
        )
    }

    /// Element id for the nav link
    pub fn nav_id(&self) -> &'static str {
        match self {
            DocsPage::Home => "nav-home",
            DocsPage::Intro => "nav-intro",
            DocsPage::Widgets => "nav-widgets",
        }
    }

    /// Translation key for the nav label
    pub fn nav_key(&self) -> &'static str {
        match self {
            DocsPage::Home => "nav-home",
            DocsPage::Intro => "nav-intro",
            DocsPage::Widgets => "nav-widgets",
        }
    }

    /// Translation key for the page title
    pub fn title_key(&self) -> &'static str {
        match self {
            DocsPage::Home => "home-title",
            DocsPage::Intro => "intro-title",
            DocsPage::Widgets => "widgets-title",
        }
    }

    /// Translation key for the page body
    pub fn body_key(&self) -> &'static str {
        match self {
            DocsPage::Home => "home-body",
            DocsPage::Intro => "intro-body",
            DocsPage::Widgets => "widgets-body",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_known_pages() {
        assert_eq!(DocsPage::resolve(&segments(&[])), Some(DocsPage::Home));
        assert_eq!(
            DocsPage::resolve(&segments(&["docs", "intro"])),
            Some(DocsPage::Intro)
        );
        assert_eq!(
            DocsPage::resolve(&segments(&["docs", "widgets"])),
            Some(DocsPage::Widgets)
        );
    }

    #[test]
    fn test_resolve_unknown_path() {
        assert_eq!(DocsPage::resolve(&segments(&["docs", "missing"])), None);
        assert_eq!(DocsPage::resolve(&segments(&["blog"])), None);
    }

    #[test]
    fn test_route_is_locale_prefixed() {
        assert_eq!(
            DocsPage::Intro.route(Locale::Zh).to_string(),
            "/zh/docs/intro"
        );
        assert_eq!(DocsPage::Home.route(Locale::En).to_string(), "/en");
    }
}
