use std::{fmt, str::FromStr};

use thiserror::Error;

/// Minimum visible fraction before a section counts as the one being read.
pub const ACTIVE_THRESHOLD: f64 = 0.3;
/// Shrinks the observed viewport to its vertical middle band.
pub const ACTIVE_ROOT_MARGIN: &str = "-100px 0px -100px 0px";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Experience,
    Projects,
    Skills,
    Education,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Education,
        SectionId::Contact,
    ];

    /// Sections linked from the navigation bars (home is reached via the brand).
    pub const NAV: [SectionId; 6] = [
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Education,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Education => "education",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Education => "Education",
            SectionId::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.as_str())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Which section the reader is currently looking at.
///
/// Only ever written by visibility notifications and only ever read by the nav.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionTracker {
    current: SectionId,
}

impl SectionTracker {
    pub fn current(&self) -> SectionId {
        self.current
    }

    /// Feeds one visibility notification; returns whether the current section changed.
    pub fn observe(&mut self, id: SectionId, intersecting: bool, ratio: f64) -> bool {
        if !intersecting || ratio < ACTIVE_THRESHOLD {
            return false;
        }
        let changed = self.current != id;
        self.current = id;
        changed
    }
}

/// Open/closed state of the small-screen navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A link inside the menu was followed.
    pub fn navigated(&mut self) {
        self.open = false;
    }
}

/// Fraction of the document scrolled past, from 0 at the top to 1 at the bottom.
///
/// `scrollable` is document height minus viewport height; a page that doesn't
/// scroll reports 0.
pub fn scroll_progress(scroll_y: f64, scrollable: f64) -> f64 {
    if !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids_parse() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
            assert_eq!(id.href(), format!("#{id}"));
        }
        assert!("blog".parse::<SectionId>().is_err());
    }

    #[test]
    fn test_tracker_defaults_to_home() {
        assert_eq!(SectionTracker::default().current(), SectionId::Home);
    }

    #[test]
    fn test_tracker_threshold() {
        let mut tracker = SectionTracker::default();
        assert!(!tracker.observe(SectionId::Experience, true, 0.29));
        assert_eq!(tracker.current(), SectionId::Home);

        assert!(tracker.observe(SectionId::Experience, true, 0.3));
        assert_eq!(tracker.current(), SectionId::Experience);

        assert!(!tracker.observe(SectionId::Skills, true, 0.1));
        assert_eq!(tracker.current(), SectionId::Experience);

        // leaving notifications never move the highlight
        assert!(!tracker.observe(SectionId::Skills, false, 0.5));
        assert_eq!(tracker.current(), SectionId::Experience);
    }

    #[test]
    fn test_tracker_last_observed_wins() {
        let mut tracker = SectionTracker::default();
        tracker.observe(SectionId::Projects, true, 0.6);
        tracker.observe(SectionId::Skills, true, 0.4);
        assert_eq!(tracker.current(), SectionId::Skills);
        assert!(!tracker.observe(SectionId::Skills, true, 0.9));
    }

    #[test]
    fn test_mobile_menu_opens_and_closes_on_navigation() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.navigated();
        assert!(!menu.is_open());

        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());
        menu.navigated();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_scroll_progress_clamps() {
        assert_eq!(scroll_progress(0.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(1000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(1200.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-40.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(10.0, 0.0), 0.0);
        assert_eq!(scroll_progress(10.0, f64::NAN), 0.0);
    }
}
