//! Pure projections from content records to what a card shows.
//!
//! Nothing here touches the DOM; the view layer only lays a [`Card`] out.

use crate::content::{Achievement, EducationEntry, EducationStatus, GalleryImage, Project};

/// Directory every image reference must live under.
pub const ASSET_DIR: &str = "assets/images/";
/// Shown in place of any image that is missing or fails to load.
pub const PLACEHOLDER_GLYPH: &str = "fas fa-image";
/// Shown in place of a missing portrait.
pub const PROFILE_GLYPH: &str = "fas fa-user";

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg", "avif"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Media {
    Image { src: String, alt: String },
    Placeholder { glyph: &'static str },
}

impl Media {
    /// Resolves an asset reference, falling back to `glyph` for anything
    /// that can't name an image under [`ASSET_DIR`].
    pub fn from_source(src: Option<&str>, alt: &str, glyph: &'static str) -> Self {
        match src.and_then(asset_path) {
            Some(path) => Self::Image {
                src: format!("/{path}"),
                alt: alt.to_string(),
            },
            None => Self::Placeholder { glyph },
        }
    }

    /// What to show once the browser reports the image couldn't load.
    pub fn on_load_error(&self, glyph: &'static str) -> Self {
        match self {
            Self::Image { .. } => Self::Placeholder { glyph },
            placeholder => placeholder.clone(),
        }
    }

    /// What to show for an image the browser may have finished with before
    /// anyone listened for its `error` event. A complete image with no
    /// intrinsic width failed to load.
    pub fn on_load_settled(
        &self,
        complete: bool,
        natural_width: u32,
        glyph: &'static str,
    ) -> Self {
        if complete && natural_width == 0 {
            self.on_load_error(glyph)
        } else {
            self.clone()
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

/// Normalizes `./assets/images/x.png`, `/assets/images/x.png` and
/// `assets/images/x.png` to the latter, rejecting everything else.
fn asset_path(src: &str) -> Option<&str> {
    let src = src.trim();
    let path = src
        .strip_prefix("./")
        .or_else(|| src.strip_prefix('/'))
        .unwrap_or(src);
    let name = path.strip_prefix(ASSET_DIR)?;
    if name.is_empty() || name.split('/').any(|seg| seg.is_empty() || seg == "..") {
        return None;
    }
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || !IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) {
        return None;
    }
    Some(path)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Info,
    Success,
    Accent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub tone: BadgeTone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaLine {
    pub icon: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagGroup {
    pub label: &'static str,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLink {
    pub label: &'static str,
    pub href: String,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub subtitle: Option<String>,
    pub body: String,
    pub icon: Option<String>,
    pub badge: Option<Badge>,
    pub meta: Vec<MetaLine>,
    pub tag_groups: Vec<TagGroup>,
    pub links: Vec<CardLink>,
    pub media: Media,
    pub accent: String,
}

pub trait Present {
    fn present(&self) -> Card;
}

impl Present for Project {
    fn present(&self) -> Card {
        Card {
            title: self.title.clone(),
            subtitle: None,
            body: self.description.clone(),
            icon: None,
            badge: None,
            meta: Vec::new(),
            tag_groups: vec![
                TagGroup {
                    label: "Key Features:",
                    tags: self.features.clone(),
                },
                TagGroup {
                    label: "Technologies:",
                    tags: self.technologies.clone(),
                },
            ],
            links: vec![
                CardLink {
                    label: "Live Demo",
                    href: self.links.live_demo.clone(),
                    icon: "fas fa-external-link-alt",
                },
                CardLink {
                    label: "Code",
                    href: self.links.source.clone(),
                    icon: "fab fa-github",
                },
            ],
            media: Media::from_source(self.image.as_deref(), &self.title, PLACEHOLDER_GLYPH),
            accent: "from-primary-500 to-secondary-500".to_string(),
        }
    }
}

impl Present for EducationEntry {
    fn present(&self) -> Card {
        let mut meta = Vec::with_capacity(2);
        if let Some(location) = self.location() {
            meta.push(MetaLine {
                icon: "fas fa-map-marker-alt",
                text: location.to_string(),
            });
        }
        meta.push(MetaLine {
            icon: "fas fa-calendar-alt",
            text: self.duration.clone(),
        });
        let tone = match self.status {
            EducationStatus::Pursuing => BadgeTone::Info,
            EducationStatus::Completed => BadgeTone::Success,
        };
        Card {
            title: self.degree.clone(),
            subtitle: Some(self.institution.clone()),
            body: String::new(),
            icon: Some(self.icon.clone()),
            badge: Some(Badge {
                label: self.status.label().to_string(),
                tone,
            }),
            meta,
            tag_groups: Vec::new(),
            links: Vec::new(),
            media: Media::Placeholder {
                glyph: PLACEHOLDER_GLYPH,
            },
            accent: self.accent.clone(),
        }
    }
}

impl Present for Achievement {
    fn present(&self) -> Card {
        use crate::filter::Category;

        Card {
            title: self.title.clone(),
            subtitle: Some(self.year.to_string()),
            body: self.description.clone(),
            icon: Some(self.icon.clone()),
            badge: Some(Badge {
                label: self.category.label().to_string(),
                tone: BadgeTone::Accent,
            }),
            meta: Vec::new(),
            tag_groups: Vec::new(),
            links: Vec::new(),
            media: Media::Placeholder {
                glyph: PLACEHOLDER_GLYPH,
            },
            accent: self.accent.clone(),
        }
    }
}

impl Present for GalleryImage {
    fn present(&self) -> Card {
        use crate::filter::Category;

        Card {
            title: self.title.clone(),
            subtitle: None,
            body: self.description.clone(),
            icon: None,
            badge: Some(Badge {
                label: self.category.label().to_string(),
                tone: BadgeTone::Accent,
            }),
            meta: Vec::new(),
            tag_groups: Vec::new(),
            links: Vec::new(),
            media: Media::from_source(Some(self.src.as_str()), &self.alt, PLACEHOLDER_GLYPH),
            accent: "from-primary-500 to-secondary-500".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{GalleryCategory, CONTENT};

    fn gallery_image(src: &str) -> GalleryImage {
        GalleryImage {
            id: 42,
            src: src.to_string(),
            alt: "alt text".to_string(),
            title: "Title".to_string(),
            category: GalleryCategory::Workspace,
            description: "Description".to_string(),
        }
    }

    #[test]
    fn test_valid_sources_resolve_to_images() {
        for src in [
            "assets/images/me.png",
            "./assets/images/me.png",
            "/assets/images/me.png",
            "assets/images/trips/beach.JPG",
        ] {
            let media = Media::from_source(Some(src), "me", PLACEHOLDER_GLYPH);
            assert!(!media.is_placeholder(), "{src} should resolve");
        }
        assert_eq!(
            Media::from_source(Some("./assets/images/me.png"), "me", PLACEHOLDER_GLYPH),
            Media::Image {
                src: "/assets/images/me.png".to_string(),
                alt: "me".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_sources_render_placeholder() {
        for src in [
            "",
            "   ",
            "assets/images/",
            "assets/images/.png",
            "assets/images/notes.txt",
            "assets/images/no-extension",
            "assets/images/../secret.png",
            "images/me.png",
            "https://example.com/me.png",
        ] {
            let card = gallery_image(src).present();
            assert_eq!(
                card.media,
                Media::Placeholder {
                    glyph: PLACEHOLDER_GLYPH
                },
                "{src:?} should degrade to a placeholder"
            );
        }
        assert!(Media::from_source(None, "missing", PROFILE_GLYPH).is_placeholder());
    }

    #[test]
    fn test_load_error_swaps_to_placeholder() {
        let media = Media::from_source(Some("assets/images/gone.jpg"), "gone", PLACEHOLDER_GLYPH);
        assert_eq!(
            media.on_load_error(PROFILE_GLYPH),
            Media::Placeholder {
                glyph: PROFILE_GLYPH
            }
        );
    }

    #[test]
    fn test_image_broken_before_hydration_swaps_to_placeholder() {
        let media = Media::from_source(Some("assets/images/Aditya.png"), "Aditya", PROFILE_GLYPH);
        // failed while the page was still parsing
        assert!(media.on_load_settled(true, 0, PROFILE_GLYPH).is_placeholder());
        // still downloading, leave it to the error listener
        assert_eq!(media.on_load_settled(false, 0, PROFILE_GLYPH), media);
        // loaded fine
        assert_eq!(media.on_load_settled(true, 640, PROFILE_GLYPH), media);
    }

    #[test]
    fn test_education_omits_blank_location() {
        let content = &*CONTENT;
        let with_location = content.education[0].present();
        assert_eq!(with_location.meta.len(), 2);
        assert_eq!(with_location.meta[0].text, "Mohali, Punjab");

        let without = content.education[2].present();
        assert_eq!(without.meta.len(), 1);
        assert_eq!(without.meta[0].icon, "fas fa-calendar-alt");
    }

    #[test]
    fn test_education_status_tone() {
        let content = &*CONTENT;
        let pursuing = content.education[0].present().badge.expect("status badge");
        assert_eq!(pursuing.label, "Pursuing");
        assert_eq!(pursuing.tone, BadgeTone::Info);
        let completed = content.education[1].present().badge.expect("status badge");
        assert_eq!(completed.tone, BadgeTone::Success);
    }

    #[test]
    fn test_project_card() {
        let card = CONTENT.projects[0].present();
        assert_eq!(card.title, "Library Management System");
        assert_eq!(card.tag_groups[0].tags.len(), 4);
        assert_eq!(card.links.len(), 2);
        assert!(!card.media.is_placeholder());
    }

    #[test]
    fn test_achievement_card_shows_category_and_year() {
        let card = CONTENT.achievements[3].present();
        assert_eq!(card.badge.map(|b| b.label), Some("Certification".to_string()));
        assert_eq!(card.subtitle.as_deref(), Some("2023"));
    }
}
