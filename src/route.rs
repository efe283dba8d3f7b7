//! Pages
//!
//! Paths served by the router in `app.rs`: `/keep`, `/give`, `/donated`,
//! `/calculator`, with everything else landing on the home page.

use crate::models::CheckupType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Keep,
    Give,
    Donated,
    Calculator,
}

impl Page {
    /// Tabs shown in the navigation bar, with their icons
    pub const TABS: [(Page, &'static str); 3] = [
        (Page::Keep, "↓"),
        (Page::Give, "↑"),
        (Page::Donated, "🎁"),
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Keep => "/keep",
            Page::Give => "/give",
            Page::Donated => "/donated",
            Page::Calculator => "/calculator",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Keep => "Keep",
            Page::Give => "Give",
            Page::Donated => "Donated",
            Page::Calculator => "Calculator",
        }
    }

    /// Checkup category reviewed from this page, if any
    pub fn checkup_type(&self) -> Option<CheckupType> {
        match self {
            Page::Keep => Some(CheckupType::Keep),
            Page::Give => Some(CheckupType::Give),
            Page::Home | Page::Donated | Page::Calculator => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_distinct() {
        let pages = [Page::Home, Page::Keep, Page::Give, Page::Donated, Page::Calculator];
        for (i, a) in pages.iter().enumerate() {
            assert!(a.path().starts_with('/'));
            for b in &pages[i + 1..] {
                assert_ne!(a.path(), b.path());
            }
        }
    }

    #[test]
    fn test_tabs_cover_item_categories() {
        let tabs: Vec<&str> = Page::TABS.iter().map(|(page, _)| page.path()).collect();
        assert_eq!(tabs, ["/keep", "/give", "/donated"]);
    }

    #[test]
    fn test_page_checkup_type() {
        assert_eq!(Page::Keep.checkup_type(), Some(CheckupType::Keep));
        assert_eq!(Page::Give.checkup_type(), Some(CheckupType::Give));
        assert_eq!(Page::Donated.checkup_type(), None);
        assert_eq!(Page::Calculator.checkup_type(), None);
    }
}
