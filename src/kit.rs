//! Class tables and local state for the primitive UI kit.
//!
//! The Leptos components in `app::ui` are thin wrappers over these, so the styling
//! variants and the tab/tooltip state rules can be checked without a DOM.

/// Joins class fragments, skipping empty ones.
pub fn cn(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

const BUTTON_BASE: &str = "inline-flex items-center justify-center rounded-xl text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-2 ring-offset-2 ring-primary disabled:opacity-50 disabled:pointer-events-none";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Lg,
    Sm,
    Icon,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Default => "bg-primary text-primary-foreground hover:bg-primary/90",
            ButtonVariant::Outline => {
                "border border-input hover:bg-accent hover:text-accent-foreground"
            }
            ButtonVariant::Ghost => "hover:bg-accent hover:text-accent-foreground",
        }
    }
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Default => "h-10 px-4 py-2",
            ButtonSize::Lg => "h-12 px-6",
            ButtonSize::Sm => "h-9 px-3",
            ButtonSize::Icon => "h-10 w-10",
        }
    }
}

pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    cn(&[BUTTON_BASE, variant.class(), size.class(), extra])
}

const BADGE_BASE: &str = "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-semibold transition-colors";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Outline,
}

impl BadgeVariant {
    fn class(self) -> &'static str {
        match self {
            BadgeVariant::Default => "border-transparent bg-accent text-accent-foreground",
            BadgeVariant::Secondary => "border-transparent bg-secondary text-secondary-foreground",
            BadgeVariant::Outline => "border border-input",
        }
    }
}

pub fn badge_class(variant: BadgeVariant, extra: &str) -> String {
    cn(&[BADGE_BASE, variant.class(), extra])
}

pub const CARD_CLASS: &str = "rounded-2xl border bg-card text-card-foreground shadow";
pub const CARD_HEADER_CLASS: &str = "px-6 py-4 border-b";
pub const CARD_TITLE_CLASS: &str = "text-lg font-medium";
pub const CARD_CONTENT_CLASS: &str = "px-6 py-4";
pub const SEPARATOR_CLASS: &str = "h-px w-full my-12 bg-border";

pub const TABS_LIST_CLASS: &str =
    "inline-flex items-center justify-center rounded-lg bg-muted p-1 text-muted-foreground";
const TABS_TRIGGER_BASE: &str = "inline-flex items-center justify-center whitespace-nowrap rounded-md px-3 py-1.5 text-sm font-medium transition-all focus-visible:outline-none focus-visible:ring-2 ring-offset-2 ring-primary";

pub fn tabs_trigger_class(selected: bool, extra: &str) -> String {
    let state = if selected {
        "bg-primary text-primary-foreground shadow"
    } else {
        "bg-transparent hover:bg-accent hover:text-accent-foreground"
    };
    cn(&[TABS_TRIGGER_BASE, state, extra])
}

/// Selection held by one mounted `Tabs` instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabState {
    active: String,
}

impl TabState {
    pub fn new(default_value: impl Into<String>) -> Self {
        Self {
            active: default_value.into(),
        }
    }

    pub fn select(&mut self, key: &str) {
        if self.active != key {
            self.active = key.to_string();
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active == key
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipEvent {
    PointerEnter,
    PointerLeave,
    Focus,
    Blur,
}

/// Visibility of a single tooltip; pointer and focus drive the same flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TooltipVisibility {
    visible: bool,
}

impl TooltipVisibility {
    pub fn handle(&mut self, event: TooltipEvent) {
        self.visible = matches!(event, TooltipEvent::PointerEnter | TooltipEvent::Focus);
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cn_skips_empty() {
        assert_eq!(cn(&["a", "", "  ", "b c"]), "a b c");
        assert_eq!(cn(&[]), "");
    }

    #[test]
    fn test_button_class_composition() {
        let class = button_class(ButtonVariant::Outline, ButtonSize::Icon, "md:hidden");
        assert!(class.starts_with("inline-flex"));
        assert!(class.contains("border border-input"));
        assert!(class.contains("h-10 w-10"));
        assert!(class.ends_with("md:hidden"));

        let class = button_class(ButtonVariant::default(), ButtonSize::default(), "");
        assert!(class.contains("bg-primary"));
        assert!(class.ends_with("h-10 px-4 py-2"));
    }

    #[test]
    fn test_badge_variants() {
        assert!(badge_class(BadgeVariant::Secondary, "").contains("bg-secondary"));
        assert!(badge_class(BadgeVariant::Outline, "").ends_with("border border-input"));
    }

    #[test]
    fn test_tabs_exactly_one_pane_mounted() {
        let keys = ["Languages", "Frameworks & UI", "Cloud & DevOps"];
        let mut state = TabState::new(keys[0]);
        for key in keys {
            state.select(key);
            let mounted = keys
                .iter()
                .filter(|k| state.is_active(k))
                .collect::<Vec<_>>();
            assert_eq!(mounted, vec![&key]);
            assert_eq!(state.active(), key);
        }
    }

    #[test]
    fn test_tabs_trigger_class_follows_selection() {
        assert!(tabs_trigger_class(true, "").contains("bg-primary"));
        assert!(tabs_trigger_class(false, "").contains("bg-transparent"));
    }

    #[test]
    fn test_tooltip_pointer_and_focus() {
        let mut tooltip = TooltipVisibility::default();
        assert!(!tooltip.is_visible());
        tooltip.handle(TooltipEvent::PointerEnter);
        assert!(tooltip.is_visible());
        tooltip.handle(TooltipEvent::PointerLeave);
        assert!(!tooltip.is_visible());
        tooltip.handle(TooltipEvent::Focus);
        assert!(tooltip.is_visible());
        tooltip.handle(TooltipEvent::Blur);
        assert!(!tooltip.is_visible());
    }

    #[test]
    fn test_tooltip_instances_are_independent() {
        let mut a = TooltipVisibility::default();
        let b = TooltipVisibility::default();
        a.handle(TooltipEvent::Focus);
        assert!(a.is_visible());
        assert!(!b.is_visible());
    }
}
