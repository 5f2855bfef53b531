use serde::{Deserialize, Serialize};

/// Named glyphs from the icon font. Content refers to these by kebab-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Mail,
    Phone,
    MapPin,
    Download,
    Github,
    Link,
    Briefcase,
    GraduationCap,
    ShieldCheck,
    Cpu,
    Code,
    Boxes,
    Cloud,
    Database,
    Rocket,
    MessageSquare,
    Terminal,
    Sun,
    Moon,
    Sparkles,
    Menu,
    Close,
}

const ICON_CLASSES: &[(Icon, &str)] = &[
    (Icon::Mail, "lucide-mail"),
    (Icon::Phone, "lucide-phone"),
    (Icon::MapPin, "lucide-map-pin"),
    (Icon::Download, "lucide-download"),
    (Icon::Github, "devicon-github-plain"),
    (Icon::Link, "lucide-link"),
    (Icon::Briefcase, "lucide-briefcase"),
    (Icon::GraduationCap, "lucide-graduation-cap"),
    (Icon::ShieldCheck, "lucide-shield-check"),
    (Icon::Cpu, "lucide-cpu"),
    (Icon::Code, "lucide-code-2"),
    (Icon::Boxes, "lucide-boxes"),
    (Icon::Cloud, "lucide-cloud"),
    (Icon::Database, "lucide-database"),
    (Icon::Rocket, "lucide-rocket"),
    (Icon::MessageSquare, "lucide-message-square"),
    (Icon::Terminal, "lucide-terminal"),
    (Icon::Sun, "lucide-sun"),
    (Icon::Moon, "lucide-moon"),
    (Icon::Sparkles, "lucide-sparkles"),
    (Icon::Menu, "lucide-menu"),
    (Icon::Close, "lucide-x"),
];

impl Icon {
    /// Icon font class for this glyph.
    pub fn class_name(self) -> &'static str {
        ICON_CLASSES
            .iter()
            .find_map(|(icon, class)| (*icon == self).then_some(*class))
            .unwrap_or("lucide-circle")
    }
}
