// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio document data structures.
//!
//! This module defines the static document the whole application renders:
//! the profile, the work/about/resume sections and the video collections.
//! Every collection defaults to empty so a partial document still loads,
//! and a null or mistyped field falls back to its default instead of
//! rejecting the document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Deserialize a field, falling back to its default when the value is null
/// or has the wrong shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Deserialize a list entry by entry, skipping entries that do not parse.
fn lenient_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

/// The complete portfolio document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioData {
    #[serde(deserialize_with = "lenient")]
    pub profile: Profile,
    #[serde(deserialize_with = "lenient")]
    pub sections: Sections,
    #[serde(deserialize_with = "lenient")]
    pub videos: Videos,
    #[serde(deserialize_with = "lenient_items")]
    pub todo_list: Vec<String>,
}

/// Owner profile shown in the sidebar and the About Me card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "lenient")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub title: String,
    #[serde(deserialize_with = "lenient")]
    pub location: String,
    #[serde(deserialize_with = "lenient")]
    pub bio: String,
    #[serde(deserialize_with = "lenient")]
    pub avatar: String,
    #[serde(deserialize_with = "lenient")]
    pub experience: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub whatsapp: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub calendar: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub website: Option<String>,
}

impl Profile {
    /// Social-style handle: lowercase name with the first space removed.
    pub fn handle(&self) -> String {
        format!("@{}", self.name.to_lowercase().replacen(' ', "", 1))
    }

    /// First character of the name, used when no avatar image is available.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sections {
    #[serde(deserialize_with = "lenient")]
    pub work: WorkSection,
    #[serde(deserialize_with = "lenient")]
    pub about: AboutSection,
    #[serde(deserialize_with = "lenient")]
    pub resume: ResumeSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkSection {
    #[serde(deserialize_with = "lenient")]
    pub title: String,
    #[serde(deserialize_with = "lenient")]
    pub description: String,
    #[serde(deserialize_with = "lenient_items")]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutSection {
    #[serde(deserialize_with = "lenient")]
    pub title: String,
    #[serde(deserialize_with = "lenient")]
    pub content: AboutContent,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutContent {
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_items")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "lenient_items")]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeSection {
    #[serde(deserialize_with = "lenient")]
    pub title: String,
    #[serde(deserialize_with = "lenient")]
    pub content: ResumeContent,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeContent {
    #[serde(deserialize_with = "lenient_items")]
    pub experience: Vec<Experience>,
    #[serde(deserialize_with = "lenient_items")]
    pub education: Vec<Education>,
}

/// A work project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: String,
    pub description: String,
    pub thumbnail: String,
    pub link: Option<String>,
    pub tags: Vec<String>,
    /// Label to value, kept in document order.
    pub stats: Map<String, Value>,
    /// Long-form text opened in the Notes window.
    pub notes: Option<String>,
}

impl Project {
    /// Stats rendered as `(label, value)` display pairs.
    pub fn stat_pairs(&self) -> Vec<(&str, String)> {
        self.stats
            .iter()
            .map(|(label, value)| {
                let shown = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (label.as_str(), shown)
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub url: String,
    pub embed_id: String,
    pub thumbnail: String,
    pub description: String,
    pub duration: Option<String>,
    pub views: Option<String>,
}

/// The two disjoint video collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Videos {
    #[serde(deserialize_with = "lenient_items")]
    pub full_length: Vec<Video>,
    #[serde(deserialize_with = "lenient_items")]
    pub shorts: Vec<Video>,
}

impl Videos {
    pub fn collection(&self, tab: VideoTab) -> &[Video] {
        match tab {
            VideoTab::FullLength => &self.full_length,
            VideoTab::Shorts => &self.shorts,
        }
    }

    pub fn len(&self) -> usize {
        self.full_length.len() + self.shorts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Which video collection is being browsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoTab {
    FullLength,
    #[default]
    Shorts,
}

impl VideoTab {
    pub fn label(self) -> &'static str {
        match self {
            VideoTab::FullLength => "Full Videos",
            VideoTab::Shorts => "Shorts",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(alias = "title")]
    pub position: String,
    pub company: String,
    #[serde(alias = "period")]
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    #[serde(alias = "school")]
    pub institution: String,
    #[serde(alias = "period")]
    pub year: String,
    pub description: Option<String>,
}

/// A top-level navigation section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    #[default]
    Work,
    About,
    Resume,
}

impl SectionKind {
    pub const ALL: [SectionKind; 3] = [SectionKind::Work, SectionKind::About, SectionKind::Resume];

    pub fn key(self) -> &'static str {
        match self {
            SectionKind::Work => "work",
            SectionKind::About => "about",
            SectionKind::Resume => "resume",
        }
    }

    /// Label used in the sidebar navigation.
    pub fn nav_label(self) -> &'static str {
        match self {
            SectionKind::Work => "Work",
            SectionKind::About => "About Me",
            SectionKind::Resume => "Resume",
        }
    }

    /// Canvas header as `(title, subtitle)`.
    pub fn heading(self) -> (&'static str, &'static str) {
        match self {
            SectionKind::Work => ("Work Portfolio", "Visual Design & UI"),
            SectionKind::About => ("About Me", "Personal Information & Skills"),
            SectionKind::Resume => ("Resume & Experience", "Professional Background"),
        }
    }
}

/// Typed section content, chosen where the data is read rather than
/// guessed from which keys happen to be present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContentBlock<'a> {
    Skills(&'a [String]),
    Achievements(&'a [String]),
    Experience(&'a [Experience]),
    Education(&'a [Education]),
}

impl<'a> ContentBlock<'a> {
    pub fn len(&self) -> usize {
        match self {
            ContentBlock::Skills(items) | ContentBlock::Achievements(items) => items.len(),
            ContentBlock::Experience(items) => items.len(),
            ContentBlock::Education(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AboutContent {
    pub fn skills_block(&self) -> ContentBlock<'_> {
        ContentBlock::Skills(&self.skills)
    }

    pub fn achievements_block(&self) -> ContentBlock<'_> {
        ContentBlock::Achievements(&self.achievements)
    }
}

impl ResumeContent {
    pub fn experience_block(&self) -> ContentBlock<'_> {
        ContentBlock::Experience(&self.experience)
    }

    pub fn education_block(&self) -> ContentBlock<'_> {
        ContentBlock::Education(&self.education)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_videos_defaults_to_empty() {
        let json = r#"{ "profile": { "name": "Ada", "title": "Editor" } }"#;
        let data: PortfolioData = serde_json::from_str(json).unwrap();
        assert!(data.videos.is_empty());
        assert!(data.sections.work.projects.is_empty());
        assert!(data.todo_list.is_empty());
    }

    #[test]
    fn test_field_aliases() {
        let json = r#"{
            "sections": { "resume": { "content": {
                "experience": [{ "title": "Editor", "company": "Acme", "period": "2023" }],
                "education": [{ "degree": "BA", "school": "Uni", "period": "2020" }]
            } } }
        }"#;
        let data: PortfolioData = serde_json::from_str(json).unwrap();
        let resume = &data.sections.resume.content;
        assert_eq!(resume.experience[0].position, "Editor");
        assert_eq!(resume.experience[0].duration, "2023");
        assert_eq!(resume.education[0].institution, "Uni");
        assert_eq!(resume.education[0].year, "2020");
    }

    #[test]
    fn test_stats_keep_document_order() {
        let json = r#"{ "id": "p1", "name": "P", "stats": { "views": "10K", "likes": 42 } }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        let pairs = project.stat_pairs();
        assert_eq!(pairs, vec![("views", "10K".to_string()), ("likes", "42".to_string())]);
    }

    #[test]
    fn test_handle() {
        let profile = Profile {
            name: "Alex Thompson Smith".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.handle(), "@alexthompson smith");
    }

    #[test]
    fn test_section_keys() {
        for kind in SectionKind::ALL {
            let parsed: SectionKind = serde_json::from_value(Value::from(kind.key())).unwrap();
            assert_eq!(parsed, kind);
        }
        assert!(serde_json::from_value::<SectionKind>(Value::from("contact")).is_err());
    }
}
