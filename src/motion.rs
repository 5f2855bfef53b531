/// Visible fraction at which a section plays its entrance.
pub const REVEAL_THRESHOLD: f64 = 0.2;
/// How far the hero drifts up over the full scroll range.
pub const HERO_DRIFT_PX: f64 = -60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    X(f64),
    Y(f64),
}

/// Entrance animation: start offset and duration, before reduced-motion is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub offset: Offset,
    pub duration_ms: u32,
}

impl Motion {
    pub const SECTION: Motion = Motion {
        offset: Offset::Y(16.0),
        duration_ms: 600,
    };
    pub const TIMELINE_ITEM: Motion = Motion {
        offset: Offset::X(-12.0),
        duration_ms: 500,
    };
    pub const CARD: Motion = Motion {
        offset: Offset::Y(12.0),
        duration_ms: 500,
    };

    /// Reduced motion keeps the fade, drops the transform and halves the duration.
    pub fn reduced(self, reduced: bool) -> Motion {
        if !reduced {
            return self;
        }
        Motion {
            offset: match self.offset {
                Offset::X(_) => Offset::X(0.0),
                Offset::Y(_) => Offset::Y(0.0),
            },
            duration_ms: self.duration_ms / 2,
        }
    }

    /// Inline style for the hidden or shown state.
    pub fn style(self, shown: bool) -> String {
        let transition = format!(
            "transition: opacity {d}ms ease-out, transform {d}ms ease-out",
            d = self.duration_ms
        );
        if shown {
            return format!("opacity: 1; transform: none; {transition}");
        }
        let transform = match self.offset {
            Offset::X(x) if x != 0.0 => format!("translateX({x}px)"),
            Offset::Y(y) if y != 0.0 => format!("translateY({y}px)"),
            _ => "none".to_string(),
        };
        format!("opacity: 0; transform: {transform}; {transition}")
    }
}

/// One-shot reveal latch: flips once, never back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealOnce {
    revealed: bool,
}

impl RevealOnce {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns true only for the notification that triggers the reveal.
    pub fn observe(&mut self, intersecting: bool, ratio: f64) -> bool {
        if self.revealed || !intersecting || ratio < REVEAL_THRESHOLD {
            return false;
        }
        self.revealed = true;
        true
    }
}

pub fn hero_drift(progress: f64) -> f64 {
    HERO_DRIFT_PX * progress.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_fires_once() {
        let mut reveal = RevealOnce::default();
        assert!(!reveal.observe(true, 0.1));
        assert!(reveal.observe(true, 0.25));
        assert!(reveal.is_revealed());

        // scrolling away and back again does nothing
        assert!(!reveal.observe(false, 0.0));
        assert!(!reveal.observe(true, 0.8));
        assert!(!reveal.observe(true, 1.0));
        assert!(reveal.is_revealed());
    }

    #[test]
    fn test_reduced_motion_drops_transform() {
        let motion = Motion::SECTION.reduced(true);
        assert_eq!(motion.offset, Offset::Y(0.0));
        assert_eq!(motion.duration_ms, 300);
        assert!(motion.style(false).contains("transform: none"));
        assert!(motion.style(false).contains("opacity: 0"));

        assert_eq!(Motion::SECTION.reduced(false), Motion::SECTION);
    }

    #[test]
    fn test_styles() {
        let hidden = Motion::SECTION.style(false);
        assert!(hidden.contains("translateY(16px)"));
        assert!(hidden.contains("600ms"));
        let hidden = Motion::TIMELINE_ITEM.style(false);
        assert!(hidden.contains("translateX(-12px)"));
        let shown = Motion::CARD.style(true);
        assert!(shown.starts_with("opacity: 1; transform: none"));
    }

    #[test]
    fn test_hero_drift_range() {
        assert_eq!(hero_drift(0.0), 0.0);
        assert_eq!(hero_drift(0.5), -30.0);
        assert_eq!(hero_drift(1.0), -60.0);
        assert_eq!(hero_drift(3.0), -60.0);
    }
}
