// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Modal window contents.
//!
//! A window carries everything it needs to draw itself. Dismissal is not
//! stored here: the window component reports a close request and the app
//! clears the panel state.

use crate::models::portfolio::{PortfolioData, Project};

/// The one modal window that may be open.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowSpec {
    Notes(NotesContent),
    FileExplorer(ExplorerContent),
}

impl WindowSpec {
    pub fn title(&self) -> &str {
        match self {
            WindowSpec::Notes(notes) => &notes.title,
            WindowSpec::FileExplorer(explorer) => &explorer.title,
        }
    }
}

/// What kind of item a note was opened from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteOrigin {
    About,
    Project,
    Experience,
}

impl NoteOrigin {
    pub fn label(self) -> &'static str {
        match self {
            NoteOrigin::About => "About Me",
            NoteOrigin::Project => "Project",
            NoteOrigin::Experience => "Experience",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotesContent {
    pub title: String,
    pub body: String,
    pub origin: NoteOrigin,
}

impl NotesContent {
    pub fn new(title: impl Into<String>, body: impl Into<String>, origin: NoteOrigin) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            origin,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderKind {
    Work,
    Youtube,
    Shorts,
    Document,
}

impl FolderKind {
    /// Logical icon name for the folder row.
    pub fn icon(self) -> &'static str {
        match self {
            FolderKind::Work => "work",
            FolderKind::Youtube => "youtube",
            FolderKind::Shorts => "shorts",
            FolderKind::Document => "document",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Project,
    Video,
    Document,
}

impl ItemKind {
    pub fn icon(self) -> &'static str {
        match self {
            ItemKind::Project => "project",
            ItemKind::Video => "video",
            ItemKind::Document => "document",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerItem {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    pub url: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerFolder {
    pub id: String,
    pub name: String,
    pub kind: FolderKind,
    pub items: Vec<ExplorerItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerContent {
    pub title: String,
    pub folders: Vec<ExplorerFolder>,
}

impl ExplorerContent {
    /// Build the Finder view of the portfolio: projects, both video
    /// collections and the resume entries.
    pub fn from_portfolio(data: &PortfolioData) -> Self {
        let projects = data
            .sections
            .work
            .projects
            .iter()
            .map(|project| ExplorerItem {
                id: project.id.clone(),
                name: project.name.clone(),
                kind: ItemKind::Project,
                url: project.link.clone(),
                notes: project.notes.clone().or_else(|| {
                    (!project.description.is_empty()).then(|| project_note(project))
                }),
            })
            .collect();

        let video_items = |videos: &[crate::models::portfolio::Video]| {
            videos
                .iter()
                .map(|video| ExplorerItem {
                    id: video.id.clone(),
                    name: video.title.clone(),
                    kind: ItemKind::Video,
                    url: Some(video.url.clone()),
                    notes: None,
                })
                .collect()
        };

        let resume = data
            .sections
            .resume
            .content
            .experience
            .iter()
            .enumerate()
            .map(|(index, exp)| ExplorerItem {
                id: format!("experience-{}", index),
                name: format!("{} - {}", exp.position, exp.company),
                kind: ItemKind::Document,
                url: None,
                notes: Some(format!("{}\n{}\n\n{}", exp.company, exp.duration, exp.description)),
            })
            .collect();

        Self {
            title: "Portfolio".to_string(),
            folders: vec![
                ExplorerFolder {
                    id: "projects".to_string(),
                    name: "Projects".to_string(),
                    kind: FolderKind::Work,
                    items: projects,
                },
                ExplorerFolder {
                    id: "youtube-videos".to_string(),
                    name: "YouTube Videos".to_string(),
                    kind: FolderKind::Youtube,
                    items: video_items(&data.videos.full_length),
                },
                ExplorerFolder {
                    id: "youtube-shorts".to_string(),
                    name: "YouTube Shorts".to_string(),
                    kind: FolderKind::Shorts,
                    items: video_items(&data.videos.shorts),
                },
                ExplorerFolder {
                    id: "resume".to_string(),
                    name: "Resume".to_string(),
                    kind: FolderKind::Document,
                    items: resume,
                },
            ],
        }
    }

    pub fn folder(&self, id: &str) -> Option<&ExplorerFolder> {
        self.folders.iter().find(|folder| folder.id == id)
    }
}

fn project_note(project: &Project) -> String {
    let mut note = project.description.clone();
    if !project.tags.is_empty() {
        note.push_str("\n\nTags: ");
        note.push_str(&project.tags.join(", "));
    }
    for (label, value) in project.stat_pairs() {
        note.push_str(&format!("\n{}: {}", label, value));
    }
    if let Some(link) = &project.link {
        note.push_str("\n\n");
        note.push_str(link);
    }
    note
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::{Experience, Project, Video};

    #[test]
    fn test_explorer_from_empty_portfolio() {
        let explorer = ExplorerContent::from_portfolio(&PortfolioData::default());
        assert_eq!(explorer.folders.len(), 4);
        assert!(explorer.folders.iter().all(|folder| folder.items.is_empty()));
    }

    #[test]
    fn test_explorer_items() {
        let mut data = PortfolioData::default();
        data.sections.work.projects.push(Project {
            id: "p1".to_string(),
            name: "Reel".to_string(),
            description: "A showreel".to_string(),
            link: Some("https://example.com/reel".to_string()),
            ..Default::default()
        });
        data.sections.work.projects.push(Project {
            id: "p2".to_string(),
            name: "Bare".to_string(),
            ..Default::default()
        });
        data.videos.shorts.push(Video {
            id: "s1".to_string(),
            title: "Short".to_string(),
            url: "https://youtube.com/shorts/abcdefghijk".to_string(),
            ..Default::default()
        });
        data.sections.resume.content.experience.push(Experience {
            position: "Editor".to_string(),
            company: "Acme".to_string(),
            ..Default::default()
        });

        let explorer = ExplorerContent::from_portfolio(&data);
        let projects = explorer.folder("projects").unwrap();
        assert!(projects.items[0].notes.as_deref().unwrap().contains("https://example.com/reel"));
        assert_eq!(projects.items[1].notes, None);

        let shorts = explorer.folder("youtube-shorts").unwrap();
        assert_eq!(shorts.items[0].url.as_deref(), Some("https://youtube.com/shorts/abcdefghijk"));

        let resume = explorer.folder("resume").unwrap();
        assert_eq!(resume.items[0].name, "Editor - Acme");
        assert!(explorer.folder("missing").is_none());
    }
}
