use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

/// Site content, parsed once from the embedded JSON files.
pub static SITE_CONTENT: LazyLock<SiteContent> = LazyLock::new(|| {
    SiteContent::load().unwrap_or_else(|e| panic!("Embedded site content is invalid: {e}"))
});

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file {0} not found")]
    Missing(String),
    #[error("couldn't parse {file}: {reason}")]
    Parse { file: String, reason: String },
}

/// Accent colours used by cards, badges and progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    Blue,
    Purple,
    Pink,
    Orange,
    Amber,
    Yellow,
    Green,
    Cyan,
    Red,
    Indigo,
    Gray,
}

impl Palette {
    pub fn text_class(self) -> &'static str {
        match self {
            Self::Blue => "text-blue-400",
            Self::Purple => "text-purple-400",
            Self::Pink => "text-pink-400",
            Self::Orange => "text-orange-400",
            Self::Amber => "text-amber-400",
            Self::Yellow => "text-yellow-400",
            Self::Green => "text-green-400",
            Self::Cyan => "text-cyan-400",
            Self::Red => "text-red-400",
            Self::Indigo => "text-indigo-400",
            Self::Gray => "text-gray-400",
        }
    }

    pub fn soft_bg_class(self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-500/20",
            Self::Purple => "bg-purple-500/20",
            Self::Pink => "bg-pink-500/20",
            Self::Orange => "bg-orange-500/20",
            Self::Amber => "bg-amber-500/20",
            Self::Yellow => "bg-yellow-500/20",
            Self::Green => "bg-green-500/20",
            Self::Cyan => "bg-cyan-500/20",
            Self::Red => "bg-red-500/20",
            Self::Indigo => "bg-indigo-500/20",
            Self::Gray => "bg-gray-500/20",
        }
    }

    pub fn hover_border_class(self) -> &'static str {
        match self {
            Self::Blue => "hover:border-blue-400/50",
            Self::Purple => "hover:border-purple-400/50",
            Self::Pink => "hover:border-pink-400/50",
            Self::Orange => "hover:border-orange-400/50",
            Self::Amber => "hover:border-amber-400/50",
            Self::Yellow => "hover:border-yellow-400/50",
            Self::Green => "hover:border-green-400/50",
            Self::Cyan => "hover:border-cyan-400/50",
            Self::Red => "hover:border-red-400/50",
            Self::Indigo => "hover:border-indigo-400/50",
            Self::Gray => "hover:border-gray-400/50",
        }
    }

    pub fn solid_bg_class(self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-600",
            Self::Purple => "bg-purple-600",
            Self::Pink => "bg-pink-600",
            Self::Orange => "bg-orange-600",
            Self::Amber => "bg-amber-600",
            Self::Yellow => "bg-yellow-500",
            Self::Green => "bg-green-600",
            Self::Cyan => "bg-cyan-500",
            Self::Red => "bg-red-600",
            Self::Indigo => "bg-indigo-600",
            Self::Gray => "bg-gray-600",
        }
    }

    /// Start and end colours of the progress bar gradient.
    pub fn gradient(self) -> (&'static str, &'static str) {
        match self {
            Self::Blue | Self::Gray => ("#3b82f6", "#1d4ed8"),
            Self::Green => ("#10b981", "#059669"),
            Self::Purple => ("#8b5cf6", "#7c3aed"),
            Self::Orange => ("#f97316", "#ea580c"),
            Self::Amber => ("#f59e0b", "#d97706"),
            Self::Yellow => ("#eab308", "#ca8a04"),
            Self::Cyan => ("#06b6d4", "#0891b2"),
            Self::Red => ("#ef4444", "#dc2626"),
            Self::Pink => ("#ec4899", "#db2777"),
            Self::Indigo => ("#6366f1", "#4f46e5"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub display_name: String,
    pub target_section_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: String,
}

impl SocialLink {
    pub fn is_external(&self) -> bool {
        is_external(&self.href)
    }
}

/// Links leaving the site open in a new tab.
pub fn is_external(href: &str) -> bool {
    href.starts_with("http")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub tagline: String,
    pub focus: Vec<String>,
    pub email: String,
    pub location: String,
    pub availability: String,
    pub bio: Vec<String>,
    pub footer_blurb: String,
    pub hero_links: Vec<SocialLink>,
    pub social_links: Vec<SocialLink>,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn initial(&self) -> char {
        self.first_name.chars().next().unwrap_or('?')
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    pub icon: String,
    pub title: String,
    pub subtitle: String,
    pub color: Palette,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveCard {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub color: Palette,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub stats: Vec<StatCard>,
    pub drives: Vec<DriveCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub icon: String,
    pub name: String,
    pub percentage: f64,
    pub description: String,
    pub color: Palette,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub icon: String,
    pub color: Palette,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechBadge {
    pub icon: String,
    pub name: String,
    pub color: Palette,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    pub stack: Vec<TechBadge>,
    pub categories: Vec<SkillCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub icon: String,
    pub technologies: Vec<String>,
    pub demo_link: String,
    pub github_link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projects {
    pub projects: Vec<Project>,
    pub profile_link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMethod {
    pub icon: String,
    pub title: String,
    pub subtitle: String,
    pub value: String,
    pub href: String,
    pub color: Palette,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickAction {
    pub icon: String,
    pub label: String,
    pub href: String,
    pub color: Palette,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub intro: String,
    pub methods: Vec<ContactMethod>,
    pub quick_actions: Vec<QuickAction>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub profile: Profile,
    pub navigation: Vec<NavigationItem>,
    pub about: About,
    pub skills: Skills,
    pub projects: Projects,
    pub contact: Contact,
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        Ok(Self {
            profile: load_json("profile.json")?,
            navigation: load_json("navigation.json")?,
            about: load_json("about.json")?,
            skills: load_json("skills.json")?,
            projects: load_json("projects.json")?,
            contact: load_json("contact.json")?,
        })
    }

    /// Section the tracker falls back to before any scroll.
    pub fn default_section(&self) -> &str {
        self.navigation
            .first()
            .map(|n| n.target_section_id.as_str())
            .unwrap_or("home")
    }
}

fn load_json<T: DeserializeOwned>(name: &str) -> Result<T, ContentError> {
    let file = ContentAssets::get(name).ok_or_else(|| ContentError::Missing(name.to_string()))?;
    parse_json(name, &file.data)
}

fn parse_json<T: DeserializeOwned>(name: &str, data: &[u8]) -> Result<T, ContentError> {
    serde_json::from_slice(data).map_err(|e| ContentError::Parse {
        file: name.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let content = SiteContent::load().expect("embedded content should parse");
        assert!(!content.profile.first_name.is_empty());
        assert!(!content.skills.categories.is_empty());
        assert!(!content.projects.projects.is_empty());
        assert_eq!(content.contact.methods.len(), 4);
    }

    #[test]
    fn test_navigation_order() {
        let content = &*SITE_CONTENT;
        let ids = content
            .navigation
            .iter()
            .map(|n| n.target_section_id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, ["home", "about", "skills", "projects", "contact"]);
        assert_eq!(content.default_section(), "home");
    }

    #[test]
    fn test_skill_percentages_in_range() {
        for category in &SITE_CONTENT.skills.categories {
            assert!(!category.skills.is_empty(), "{} is empty", category.title);
            for skill in &category.skills {
                assert!(
                    (0.0..=100.0).contains(&skill.percentage),
                    "{} has {}",
                    skill.name,
                    skill.percentage
                );
            }
        }
    }

    #[test]
    fn test_missing_file() {
        let res = load_json::<Profile>("resume.json");
        assert_eq!(res, Err(ContentError::Missing("resume.json".to_string())));
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse_json::<About>("about.json", b"{\"stats\": 3}").unwrap_err();
        assert!(matches!(err, ContentError::Parse { ref file, .. } if file == "about.json"));
        assert!(err.to_string().starts_with("couldn't parse about.json"));
    }

    #[test]
    fn test_external_links() {
        assert!(is_external("https://github.com/dakshmaru"));
        assert!(!is_external("mailto:dakshmaru10@gmail.com"));
        assert!(!is_external("#contact"));
    }

    #[test]
    fn test_profile_helpers() {
        let profile = &SITE_CONTENT.profile;
        assert_eq!(
            profile.full_name(),
            format!("{} {}", profile.first_name, profile.last_name)
        );
        assert_eq!(profile.initial(), profile.first_name.chars().next().unwrap());
    }
}
