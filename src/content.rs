use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use log::debug;
use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::filter::{Categorized, Category};
use crate::site::SiteProfile;

/// Every registry of the site, parsed and validated on first access.
pub static CONTENT: LazyLock<Content> =
    LazyLock::new(|| Content::load().expect("embedded site content should be valid"));

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(&'static str),
    #[error("couldn't parse {file}: {source}")]
    Parse {
        file: &'static str,
        source: serde_json::Error,
    },
    #[error("duplicate gallery image id {0}")]
    DuplicateId(u32),
    #[error("skill {name} has level {level}, expected at most 100")]
    InvalidLevel { name: String, level: u8 },
    #[error("reveal threshold {0} is outside 0.0..=1.0")]
    InvalidThreshold(f64),
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub links: ProjectLinks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectLinks {
    pub live_demo: String,
    pub source: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationStatus {
    Pursuing,
    Completed,
}

impl EducationStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pursuing => "Pursuing",
            Self::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    location: Option<String>,
    pub duration: String,
    pub status: EducationStatus,
    pub icon: String,
    pub accent: String,
}

impl EducationEntry {
    /// The location, if one was given and it isn't blank.
    pub fn location(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }
}

/// A year as written in the content: either a number or free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(u16),
    Text(String),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AchievementCategory {
    Academic,
    Cultural,
    Certification,
}

impl Category for AchievementCategory {
    const ALL: &'static [Self] = &[Self::Academic, Self::Cultural, Self::Certification];

    fn label(self) -> &'static str {
        match self {
            Self::Academic => "Academic",
            Self::Cultural => "Cultural",
            Self::Certification => "Certification",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub year: Year,
    pub category: AchievementCategory,
    pub icon: String,
    pub accent: String,
}

impl Categorized for Achievement {
    type Category = AchievementCategory;

    fn category(&self) -> AchievementCategory {
        self.category
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GalleryCategory {
    Profile,
    Education,
    Projects,
    Achievements,
    Cultural,
    Workspace,
}

impl Category for GalleryCategory {
    const ALL: &'static [Self] = &[
        Self::Profile,
        Self::Education,
        Self::Projects,
        Self::Achievements,
        Self::Cultural,
        Self::Workspace,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Education => "Education",
            Self::Projects => "Projects",
            Self::Achievements => "Achievements",
            Self::Cultural => "Cultural",
            Self::Workspace => "Workspace",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: u32,
    pub src: String,
    pub alt: String,
    pub title: String,
    pub category: GalleryCategory,
    pub description: String,
}

impl Categorized for GalleryImage {
    type Category = GalleryCategory;

    fn category(&self) -> GalleryCategory {
        self.category
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub icon: String,
    pub accent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competency {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillSet {
    pub levels: Vec<Skill>,
    pub competencies: Vec<Competency>,
    pub interpersonal: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Content {
    pub site: SiteProfile,
    pub projects: Vec<Project>,
    pub education: Vec<EducationEntry>,
    pub achievements: Vec<Achievement>,
    pub gallery: Vec<GalleryImage>,
    pub skills: SkillSet,
}

fn load_json<T: DeserializeOwned>(file: &'static str) -> Result<T, ContentError> {
    let data = ContentAssets::get(file).ok_or(ContentError::NotFound(file))?;
    serde_json::from_slice(&data.data).map_err(|source| ContentError::Parse { file, source })
}

impl Content {
    /// Parses every embedded registry and checks the invariants the views
    /// rely on.
    pub fn load() -> Result<Self, ContentError> {
        let content = Self {
            site: load_json("site.json")?,
            projects: load_json("projects.json")?,
            education: load_json("education.json")?,
            achievements: load_json("achievements.json")?,
            gallery: load_json("gallery.json")?,
            skills: load_json("skills.json")?,
        };
        content.validate()?;
        debug!(
            "loaded content: {} projects, {} education entries, {} achievements, {} images, {} skills",
            content.projects.len(),
            content.education.len(),
            content.achievements.len(),
            content.gallery.len(),
            content.skills.levels.len()
        );
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.site.roles.is_empty() {
            return Err(ContentError::Empty("roles"));
        }
        let mut ids = HashSet::new();
        for image in &self.gallery {
            if !ids.insert(image.id) {
                return Err(ContentError::DuplicateId(image.id));
            }
        }
        if let Some(skill) = self.skills.levels.iter().find(|s| s.level > 100) {
            return Err(ContentError::InvalidLevel {
                name: skill.name.clone(),
                level: skill.level,
            });
        }
        let threshold = self.site.timings.reveal.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ContentError::InvalidThreshold(threshold));
        }
        Ok(())
    }

    pub fn image(&self, id: u32) -> Option<&GalleryImage> {
        self.gallery.iter().find(|img| img.id == id)
    }
}
