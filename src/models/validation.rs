// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio document validation.
//!
//! Problems found here never stop the application. Each one is reported
//! as a [`ValidationIssue`] and the offending entry is repaired or dropped
//! so the rest of the document still renders.

use super::portfolio::PortfolioData;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use thiserror::Error;

static ABSOLUTE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^\s/?#]+\S*$").unwrap());

/// A single problem found in the portfolio document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("profile.{0} is empty")]
    EmptyProfileField(&'static str),
    #[error("project at index {0} has no id; dropped")]
    MissingProjectId(usize),
    #[error("duplicate project id '{0}'; later entry dropped")]
    DuplicateProjectId(String),
    #[error("project '{0}' has no name; dropped")]
    EmptyProjectName(String),
    #[error("project '{id}' link '{link}' is not an absolute URL; link removed")]
    RelativeProjectLink { id: String, link: String },
    #[error("video at index {0} has no id; dropped")]
    MissingVideoId(usize),
    #[error("duplicate video id '{0}'; later entry dropped")]
    DuplicateVideoId(String),
    #[error("video '{id}' url '{url}' is not an absolute URL; dropped")]
    RelativeVideoUrl { id: String, url: String },
    #[error("{collection}[{index}] is malformed ({reason}); dropped")]
    MalformedEntry {
        collection: &'static str,
        index: usize,
        reason: String,
    },
}

/// Check whether `candidate` is an absolute URL with a scheme and host.
pub fn is_absolute_url(candidate: &str) -> bool {
    ABSOLUTE_URL.is_match(candidate)
}

/// Repair the document and report everything that had to change.
///
/// Video ids are unique across both collections.
pub fn sanitize(mut data: PortfolioData) -> (PortfolioData, Vec<ValidationIssue>) {
    let mut issues = Vec::new();

    if data.profile.name.trim().is_empty() {
        issues.push(ValidationIssue::EmptyProfileField("name"));
    }
    if data.profile.title.trim().is_empty() {
        issues.push(ValidationIssue::EmptyProfileField("title"));
    }

    let mut seen = HashSet::new();
    let projects = std::mem::take(&mut data.sections.work.projects);
    for (index, mut project) in projects.into_iter().enumerate() {
        if project.id.trim().is_empty() {
            issues.push(ValidationIssue::MissingProjectId(index));
            continue;
        }
        if !seen.insert(project.id.clone()) {
            issues.push(ValidationIssue::DuplicateProjectId(project.id));
            continue;
        }
        if project.name.trim().is_empty() {
            issues.push(ValidationIssue::EmptyProjectName(project.id));
            continue;
        }
        if let Some(link) = project.link.take() {
            if is_absolute_url(&link) {
                project.link = Some(link);
            } else {
                issues.push(ValidationIssue::RelativeProjectLink {
                    id: project.id.clone(),
                    link,
                });
            }
        }
        data.sections.work.projects.push(project);
    }

    let mut seen = HashSet::new();
    let mut index = 0;
    for collection in [&mut data.videos.full_length, &mut data.videos.shorts] {
        collection.retain(|video| {
            let position = index;
            index += 1;
            if video.id.trim().is_empty() {
                issues.push(ValidationIssue::MissingVideoId(position));
                return false;
            }
            if !seen.insert(video.id.clone()) {
                issues.push(ValidationIssue::DuplicateVideoId(video.id.clone()));
                return false;
            }
            if !is_absolute_url(&video.url) {
                issues.push(ValidationIssue::RelativeVideoUrl {
                    id: video.id.clone(),
                    url: video.url.clone(),
                });
                return false;
            }
            true
        });
    }

    (data, issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::{Project, Video};

    fn project(id: &str, name: &str, link: Option<&str>) -> Project {
        Project {
            id: id.to_string(),
            name: name.to_string(),
            link: link.map(str::to_string),
            ..Default::default()
        }
    }

    fn video(id: &str, url: &str) -> Video {
        Video {
            id: id.to_string(),
            url: url.to_string(),
            ..Default::default()
        }
    }

    fn valid_profile() -> PortfolioData {
        let mut data = PortfolioData::default();
        data.profile.name = "Ada".to_string();
        data.profile.title = "Video Editor".to_string();
        data
    }

    #[test]
    fn test_absolute_urls() {
        assert!(is_absolute_url("https://example.com"));
        assert!(is_absolute_url("http://example.com/a?b=c"));
        assert!(!is_absolute_url("/resume.pdf"));
        assert!(!is_absolute_url("example.com"));
        assert!(!is_absolute_url("https://"));
        assert!(!is_absolute_url(""));
    }

    #[test]
    fn test_clean_document_has_no_issues() {
        let mut data = valid_profile();
        data.sections.work.projects.push(project("p1", "One", Some("https://a.dev")));
        data.videos.shorts.push(video("v1", "https://youtu.be/abcdefghijk"));

        let (clean, issues) = sanitize(data.clone());
        assert!(issues.is_empty());
        assert_eq!(clean, data);
    }

    #[test]
    fn test_empty_profile_fields_reported() {
        let (_, issues) = sanitize(PortfolioData::default());
        assert_eq!(
            issues,
            vec![
                ValidationIssue::EmptyProfileField("name"),
                ValidationIssue::EmptyProfileField("title"),
            ]
        );
    }

    #[test]
    fn test_projects_repaired() {
        let mut data = valid_profile();
        data.sections.work.projects = vec![
            project("p1", "One", Some("https://a.dev")),
            project("p1", "Dup", None),
            project("p2", "", None),
            project("p3", "Three", Some("/local")),
            project("", "Anon", None),
        ];

        let (clean, issues) = sanitize(data);
        let ids: Vec<_> = clean.sections.work.projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p3"]);
        assert_eq!(clean.sections.work.projects[1].link, None);
        assert_eq!(issues.len(), 4);
        assert!(issues.contains(&ValidationIssue::DuplicateProjectId("p1".to_string())));
        assert!(issues.contains(&ValidationIssue::MissingProjectId(4)));
    }

    #[test]
    fn test_video_ids_unique_across_collections() {
        let mut data = valid_profile();
        data.videos.full_length = vec![video("v1", "https://youtube.com/watch?v=abcdefghijk")];
        data.videos.shorts = vec![
            video("v1", "https://youtube.com/shorts/abcdefghijk"),
            video("v2", "youtube.com/nope"),
            video("v3", "https://youtube.com/shorts/zzzzzzzzzzz"),
        ];

        let (clean, issues) = sanitize(data);
        assert_eq!(clean.videos.full_length.len(), 1);
        assert_eq!(clean.videos.shorts.len(), 1);
        assert_eq!(clean.videos.shorts[0].id, "v3");
        assert_eq!(issues.len(), 2);
    }
}
