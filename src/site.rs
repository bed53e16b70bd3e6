use std::time::Duration;

use chrono::{DateTime, Datelike};
use serde::{Deserialize, Serialize};

/// Owner identity and site-wide copy, loaded from `content/site.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteProfile {
    pub owner: String,
    pub headline: String,
    pub summary: String,
    pub roles: Vec<String>,
    pub profile_image: String,
    pub resume_url: String,
    pub email: String,
    pub location: String,
    pub socials: Vec<SocialLink>,
    pub projects_url: String,
    pub about: About,
    #[serde(default)]
    pub footer_facts: Vec<Fact>,
    #[serde(default)]
    pub timings: Timings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub handle: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub paragraphs: Vec<String>,
    pub image: String,
    pub highlights: Vec<Highlight>,
    pub stats: Vec<Stat>,
    pub current_education: CurrentEducation,
    pub hobbies: Vec<String>,
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    pub value: String,
    pub label: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentEducation {
    pub degree: String,
    pub institution: String,
    pub duration: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fact {
    pub icon: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub typing: TypingTimings,
    pub reveal: RevealTimings,
}

/// Tick delays of the typed-text role cycler, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingTimings {
    pub type_ms: u64,
    pub delete_ms: u64,
    pub pause_ms: u64,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            type_ms: 100,
            delete_ms: 50,
            pause_ms: 2000,
        }
    }
}

impl TypingTimings {
    pub fn type_delay(&self) -> Duration {
        Duration::from_millis(self.type_ms)
    }

    pub fn delete_delay(&self) -> Duration {
        Duration::from_millis(self.delete_ms)
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}

/// Staggered reveal spacing and the fraction of the section that must be
/// visible before it triggers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealTimings {
    pub interval_ms: u64,
    pub threshold: f64,
}

impl Default for RevealTimings {
    fn default() -> Self {
        Self {
            interval_ms: 200,
            threshold: 0.5,
        }
    }
}

impl RevealTimings {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Year the binary was built, from the timestamp `build.rs` exports.
pub fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timings_default_when_missing() {
        let timings: Timings = serde_json::from_str("{}").expect("empty timings should parse");
        assert_eq!(timings.typing.type_delay(), Duration::from_millis(100));
        assert_eq!(timings.typing.delete_delay(), Duration::from_millis(50));
        assert_eq!(timings.typing.pause(), Duration::from_millis(2000));
        assert_eq!(timings.reveal.interval(), Duration::from_millis(200));
        assert_eq!(timings.reveal.threshold, 0.5);
    }

    #[test]
    fn test_partial_timings_keep_other_defaults() {
        let timings: Timings = serde_json::from_str(r#"{"typing": {"pause_ms": 500}}"#)
            .expect("partial timings should parse");
        assert_eq!(timings.typing.pause(), Duration::from_millis(500));
        assert_eq!(timings.typing.type_ms, 100);
    }

    #[test]
    fn test_build_year() {
        let year = build_year().expect("build time should be RFC 3339");
        assert!(year >= 2024);
    }
}
