//! Static page content: outbound links, section anchors and the card lists.
//!
//! Everything here is literal data. The page maps each list to cards in
//! declaration order, so the arrays below are the single source of truth for
//! what is rendered and in which order.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Address shown in the demo section.
///
/// Not the same address as [`Links::default`]'s email. Both are rendered as
/// published until the owners settle on one.
pub const DEMO_CONTACT_EMAIL: &str = "ravigohel226020332021@gmail.com";

/// Product name used in the brand link, titles and the footer.
pub const PRODUCT_NAME: &str = "ReliefMate AI";

/// Author credited in the footer.
pub const AUTHOR: &str = "Ravi Gohel";

// ============================================================================
// Links
// ============================================================================

/// Outbound link targets shared by the navbar, hero, demo section and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    /// Hosted live demo
    pub demo: String,
    /// Source code repository
    pub repository: String,
    /// Contact address, without the `mailto:` scheme
    pub email: String,
}

impl Links {
    /// `mailto:` href for the contact address
    pub fn mailto(&self) -> String {
        mailto(&self.email)
    }
}

impl Default for Links {
    fn default() -> Self {
        Self {
            demo: "https://reliefmateai811.streamlit.app/".to_string(),
            repository: "https://github.com/GohelR/ReliefMateAI".to_string(),
            email: "ravi.n.gohel811@gmail.com".to_string(),
        }
    }
}

/// Build a `mailto:` href for an address.
pub fn mailto(address: &str) -> String {
    format!("mailto:{address}")
}

// ============================================================================
// Sections and navigation
// ============================================================================

/// In-page anchor targets. Each id is carried by exactly one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Top,
    Problem,
    Solution,
    Features,
    How,
    Demo,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Top,
        SectionId::Problem,
        SectionId::Solution,
        SectionId::Features,
        SectionId::How,
        SectionId::Demo,
    ];

    /// Element id, e.g. `how`
    pub fn id(self) -> &'static str {
        match self {
            SectionId::Top => "top",
            SectionId::Problem => "problem",
            SectionId::Solution => "solution",
            SectionId::Features => "features",
            SectionId::How => "how",
            SectionId::Demo => "demo",
        }
    }

    /// Fragment href, e.g. `#how`
    pub fn href(self) -> &'static str {
        match self {
            SectionId::Top => "#top",
            SectionId::Problem => "#problem",
            SectionId::Solution => "#solution",
            SectionId::Features => "#features",
            SectionId::How => "#how",
            SectionId::Demo => "#demo",
        }
    }
}

/// A navbar link to a section of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub target: SectionId,
}

pub const NAV_ENTRIES: [NavEntry; 5] = [
    NavEntry { label: "Problem", target: SectionId::Problem },
    NavEntry { label: "Solution", target: SectionId::Solution },
    NavEntry { label: "Features", target: SectionId::Features },
    NavEntry { label: "How it works", target: SectionId::How },
    NavEntry { label: "Demo", target: SectionId::Demo },
];

// ============================================================================
// Icons
// ============================================================================

/// Symbolic glyph reference. Displays as the lucide icon name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum IconKind {
    #[display("arrow-right")]
    ArrowRight,
    #[display("map-pin")]
    MapPin,
    #[display("shield")]
    Shield,
    #[display("languages")]
    Languages,
    #[display("life-buoy")]
    LifeBuoy,
    #[display("github")]
    Github,
    #[display("message-square")]
    MessageSquare,
    #[display("activity")]
    Activity,
    #[display("globe")]
    Globe,
}

// ============================================================================
// Card lists
// ============================================================================

/// Solution feature card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

/// How-it-works step card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub index: u8,
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROBLEMS: [&str; 3] = [
    "Victims lack verified shelter & medical info when it matters most.",
    "Relief efforts are fragmented across channels and languages.",
    "Volunteers have no single source of truth or prioritization.",
];

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: IconKind::MessageSquare,
        title: "Chatbot 24/7",
        description: "Instant guidance for shelters, helplines and hospitals.",
    },
    Feature {
        icon: IconKind::Shield,
        title: "Verified Updates",
        description: "Summarized, trustworthy information from official sources.",
    },
    Feature {
        icon: IconKind::Languages,
        title: "Multilingual",
        description: "Answers in regional languages to remove barriers.",
    },
    Feature {
        icon: IconKind::LifeBuoy,
        title: "Request Types",
        description: "Rescue, Medical, Food, Shelter \u{2014} auto\u{2011}categorized.",
    },
];

pub const STEPS: [Step; 3] = [
    Step {
        index: 1,
        icon: IconKind::MessageSquare,
        title: "Ask for help",
        description: "Web or mobile chatbot collects free\u{2011}text requests.",
    },
    Step {
        index: 2,
        icon: IconKind::Globe,
        title: "AI understands",
        description: "Classifies need, fetches verified resources and translates.",
    },
    Step {
        index: 3,
        icon: IconKind::Activity,
        title: "Rapid response",
        description: "Clear guidance delivered instantly. Dashboard triage coming soon.",
    },
];

/// Footer copyright line for the given year.
pub fn copyright_line(year: i32) -> String {
    format!("\u{a9} {year} {PRODUCT_NAME} \u{2022} Built by {AUTHOR}")
}

/// Year used by the footer, taken from the clock at render time.
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // ========================================================================
    // Links
    // ========================================================================

    #[test]
    fn test_default_links() {
        let links = Links::default();

        assert_eq!(links.demo, "https://reliefmateai811.streamlit.app/");
        assert_eq!(links.repository, "https://github.com/GohelR/ReliefMateAI");
        assert_eq!(links.email, "ravi.n.gohel811@gmail.com");
    }

    #[test]
    fn test_mailto_keeps_address_verbatim() {
        let links = Links::default();

        assert_eq!(links.mailto(), "mailto:ravi.n.gohel811@gmail.com");
        assert_eq!(
            mailto(DEMO_CONTACT_EMAIL),
            "mailto:ravigohel226020332021@gmail.com"
        );
    }

    #[test]
    fn test_contact_addresses_are_distinct() {
        assert_ne!(Links::default().email, DEMO_CONTACT_EMAIL);
    }

    #[test]
    fn test_links_serialize_field_names() {
        let json = serde_json::to_value(Links::default()).unwrap();

        assert_eq!(json["demo"], "https://reliefmateai811.streamlit.app/");
        assert_eq!(json["repository"], "https://github.com/GohelR/ReliefMateAI");
        assert_eq!(json["email"], "ravi.n.gohel811@gmail.com");
    }

    // ========================================================================
    // Sections
    // ========================================================================

    #[test]
    fn test_section_href_is_fragment_of_id() {
        for section in SectionId::ALL {
            assert_eq!(section.href(), format!("#{}", section.id()));
        }
    }

    #[test]
    fn test_section_ids_are_unique() {
        let ids: HashSet<_> = SectionId::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), SectionId::ALL.len());
    }

    #[test]
    fn test_nav_entries_order() {
        let targets: Vec<_> = NAV_ENTRIES.iter().map(|e| e.target.id()).collect();
        assert_eq!(targets, ["problem", "solution", "features", "how", "demo"]);
    }

    // ========================================================================
    // Content lists
    // ========================================================================

    #[test]
    fn test_content_list_lengths() {
        assert_eq!(PROBLEMS.len(), 3);
        assert_eq!(FEATURES.len(), 4);
        assert_eq!(STEPS.len(), 3);
    }

    #[test]
    fn test_steps_are_numbered_in_order() {
        let indices: Vec<u8> = STEPS.iter().map(|s| s.index).collect();
        assert_eq!(indices, [1, 2, 3]);
    }

    #[test]
    fn test_feature_icons() {
        let icons: Vec<String> = FEATURES.iter().map(|f| f.icon.to_string()).collect();
        assert_eq!(icons, ["message-square", "shield", "languages", "life-buoy"]);
    }

    // ========================================================================
    // Footer
    // ========================================================================

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line(2030),
            "\u{a9} 2030 ReliefMate AI \u{2022} Built by Ravi Gohel"
        );
    }

    #[test]
    fn test_current_year_is_plausible() {
        assert!(current_year() >= 2025);
    }
}
