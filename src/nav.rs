use std::{fmt, str::FromStr};

use thiserror::Error;

/// In-page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Projects,
    Experience,
    Contact,
}

impl SectionId {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::About,
        Self::Projects,
        Self::Experience,
        Self::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Experience => "Experience",
            Self::Contact => "Contact",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.as_str())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no such section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Entries shown in the navigation bar. Home is reached through the brand.
pub const NAV_ITEMS: [SectionId; 4] = [
    SectionId::About,
    SectionId::Projects,
    SectionId::Experience,
    SectionId::Contact,
];

/// Returns the element id an in-page link points at, if it is one.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Mobile menu open/closed state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Closes the menu and hands back the element id to scroll to.
    pub fn select<'a>(&mut self, target: &'a str) -> &'a str {
        self.open = false;
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids_round_trip() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
        }
        assert!("blog".parse::<SectionId>().is_err());
        assert_eq!(SectionId::Contact.anchor(), "#contact");
    }

    #[test]
    fn test_nav_items_skip_home() {
        assert!(!NAV_ITEMS.contains(&SectionId::Home));
        let labels = NAV_ITEMS.map(SectionId::label);
        assert_eq!(labels, ["About", "Projects", "Experience", "Contact"]);
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#about"), Some("about"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://github.com"), None);
        assert_eq!(anchor_target("/resume.pdf"), None);
    }

    #[test]
    fn test_menu_toggle_and_select() {
        let mut menu = NavMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.select("projects"), "projects");
        assert!(!menu.is_open());
        // selecting with the menu closed keeps it closed
        menu.select("about");
        assert!(!menu.is_open());
        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());
    }
}
