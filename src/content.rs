use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::icons::Icon;

const PORTFOLIO_FILE: &str = "portfolio.json";

static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> = LazyLock::new(load_portfolio);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Portfolio content not found")]
    NotFound,
    #[error("Couldn't parse portfolio content: {0}")]
    ParseError(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileLink {
    pub label: String,
    pub href: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub short_name: String,
    pub role: String,
    pub employer: String,
    pub tagline: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub links: Vec<ProfileLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub location: String,
    pub date: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectLink {
    #[serde(default)]
    pub label: Option<String>,
    pub href: String,
}

impl ProjectLink {
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or("Link")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub icon: Icon,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub group: String,
    pub icon: Icon,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub date: String,
}

/// Everything the page renders, decoded from the embedded JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub about: String,
    pub resume_path: String,
    pub highlights: Vec<Highlight>,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillGroup>,
    pub education: Education,
}

impl Portfolio {
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        serde_json::from_str(raw).map_err(|e| ContentError::ParseError(e.to_string()))
    }
}

fn load_portfolio() -> Result<Portfolio, ContentError> {
    let file = Assets::get(PORTFOLIO_FILE).ok_or(ContentError::NotFound)?;
    let raw = std::str::from_utf8(&file.data)
        .map_err(|e| ContentError::ParseError(e.to_string()))?;
    let portfolio = Portfolio::from_json(raw)?;
    log::debug!(
        "loaded portfolio content: {} experiences, {} projects, {} skill groups",
        portfolio.experiences.len(),
        portfolio.projects.len(),
        portfolio.skills.len()
    );
    Ok(portfolio)
}

/// Decoded page content, parsed once on first access.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    PORTFOLIO.as_ref().map_err(Clone::clone)
}
