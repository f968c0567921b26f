use serde::{Deserialize, Serialize};

/// The portfolio content document. Authored out-of-band and treated as
/// read-only here; loaded fresh from the store on every request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioDocument {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub category: String,
    pub technologies: Vec<String>,
    pub github: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Percentage, 0–100 expected. Not range-checked.
    pub level: u8,
    pub category: SkillCategory,
}

/// Known skill categories. Unknown labels pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Security,
    Blockchain,
    Database,
    Devops,
    #[serde(untagged)]
    Other(String),
}
