// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Canvas layout table.
//!
//! Turns the selected section and the expanded-card set into the ordered
//! list of panels to draw. Positions are constants chosen so panels never
//! overlap; there is no solver. An expanded card always takes the place of
//! its folder, so the two are never drawn together.

use crate::models::portfolio::{
    AboutContent, ContentBlock, PortfolioData, Profile, SectionKind, Videos,
};
use crate::util::geometry::{CanvasPoint, CanvasRect};
use std::collections::BTreeSet;

/// Stable card identifiers.
pub mod ids {
    pub const ABOUT_NAV: &str = "about-nav";
    pub const VIDEOS_FOLDER: &str = "videos-folder";
    pub const VIDEOS_EXPANDED: &str = "videos-expanded";
    pub const RESUME_NAV: &str = "resume-nav";

    pub const ABOUT_MAIN: &str = "about-main";
    pub const ABOUT_EXPANDED: &str = "about-expanded";
    pub const SKILLS_FOLDER: &str = "skills-folder";
    pub const SKILLS_EXPANDED: &str = "skills-expanded";
    pub const ACHIEVEMENTS_FOLDER: &str = "achievements-folder";
    pub const ACHIEVEMENTS_EXPANDED: &str = "achievements-expanded";

    pub const RESUME_MAIN: &str = "resume-main";
    pub const EXPERIENCE_FOLDER: &str = "experience-folder";
    pub const EXPERIENCE_EXPANDED: &str = "experience-expanded";
    pub const EDUCATION_FOLDER: &str = "education-folder";
    pub const EDUCATION_EXPANDED: &str = "education-expanded";
}

const BIO_PREVIEW_CHARS: usize = 80;

/// Component used to draw a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Info,
    Folder,
    VideoCarousel,
    ExpandedInfo,
    AboutMeExpanded,
}

impl PanelKind {
    /// Nominal size in canvas units, used to fit the canvas into view.
    pub fn size(self) -> (f32, f32) {
        match self {
            PanelKind::Info => (220.0, 110.0),
            PanelKind::Folder => (130.0, 120.0),
            PanelKind::VideoCarousel => (600.0, 470.0),
            PanelKind::ExpandedInfo => (330.0, 300.0),
            PanelKind::AboutMeExpanded => (620.0, 440.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoRole {
    About,
    Resume,
}

impl InfoRole {
    pub fn icon(self) -> &'static str {
        match self {
            InfoRole::About => "about",
            InfoRole::Resume => "resume",
        }
    }
}

/// Data handed to the component that draws a panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelPayload<'a> {
    Info {
        label: &'static str,
        subtitle: String,
        role: InfoRole,
    },
    Folder {
        label: &'static str,
        item_count: usize,
    },
    VideoCarousel {
        videos: &'a Videos,
    },
    ExpandedInfo {
        title: &'static str,
        block: ContentBlock<'a>,
    },
    AboutMeExpanded {
        profile: &'a Profile,
        content: &'a AboutContent,
    },
}

impl PanelPayload<'_> {
    pub fn kind(&self) -> PanelKind {
        match self {
            PanelPayload::Info { .. } => PanelKind::Info,
            PanelPayload::Folder { .. } => PanelKind::Folder,
            PanelPayload::VideoCarousel { .. } => PanelKind::VideoCarousel,
            PanelPayload::ExpandedInfo { .. } => PanelKind::ExpandedInfo,
            PanelPayload::AboutMeExpanded { .. } => PanelKind::AboutMeExpanded,
        }
    }
}

/// What activating a panel asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Expand(&'static str),
    Collapse(&'static str),
    SelectSection(SectionKind),
    DownloadResume,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelDescriptor<'a> {
    pub id: &'static str,
    pub position: CanvasPoint,
    pub payload: PanelPayload<'a>,
    /// Action for a click on the panel body.
    pub on_click: Option<PanelAction>,
    /// Action for the panel's close control, if it has one.
    pub on_close: Option<PanelAction>,
}

impl PanelDescriptor<'_> {
    pub fn kind(&self) -> PanelKind {
        self.payload.kind()
    }

    pub fn rect(&self) -> CanvasRect {
        let (width, height) = self.kind().size();
        CanvasRect::from_min_size(self.position, width, height)
    }
}

/// Compute the panels for a section.
pub fn layout<'a>(
    section: SectionKind,
    expanded: &BTreeSet<String>,
    data: &'a PortfolioData,
) -> Vec<PanelDescriptor<'a>> {
    match section {
        SectionKind::Work => work_layout(expanded, data),
        SectionKind::About => about_layout(expanded, data),
        SectionKind::Resume => resume_layout(expanded, data),
    }
}

fn folder<'a>(id: &'static str, label: &'static str, x: f32, y: f32, item_count: usize) -> PanelDescriptor<'a> {
    PanelDescriptor {
        id,
        position: CanvasPoint::new(x, y),
        payload: PanelPayload::Folder { label, item_count },
        on_click: Some(PanelAction::Expand(id)),
        on_close: None,
    }
}

fn expanded_info<'a>(
    id: &'static str,
    folder_id: &'static str,
    title: &'static str,
    x: f32,
    y: f32,
    block: ContentBlock<'a>,
) -> PanelDescriptor<'a> {
    PanelDescriptor {
        id,
        position: CanvasPoint::new(x, y),
        payload: PanelPayload::ExpandedInfo { title, block },
        on_click: None,
        on_close: Some(PanelAction::Collapse(folder_id)),
    }
}

fn work_layout<'a>(expanded: &BTreeSet<String>, data: &'a PortfolioData) -> Vec<PanelDescriptor<'a>> {
    if expanded.contains(ids::VIDEOS_FOLDER) {
        return vec![PanelDescriptor {
            id: ids::VIDEOS_EXPANDED,
            position: CanvasPoint::new(150.0, 300.0),
            payload: PanelPayload::VideoCarousel { videos: &data.videos },
            on_click: None,
            on_close: Some(PanelAction::Collapse(ids::VIDEOS_FOLDER)),
        }];
    }

    vec![
        PanelDescriptor {
            id: ids::ABOUT_NAV,
            position: CanvasPoint::new(200.0, 300.0),
            payload: PanelPayload::Info {
                label: "About Me",
                subtitle: "Learn more about me".to_string(),
                role: InfoRole::About,
            },
            on_click: Some(PanelAction::SelectSection(SectionKind::About)),
            on_close: None,
        },
        folder(ids::VIDEOS_FOLDER, "YouTube Videos", 450.0, 300.0, data.videos.len()),
        PanelDescriptor {
            id: ids::RESUME_NAV,
            position: CanvasPoint::new(700.0, 300.0),
            payload: PanelPayload::Info {
                label: "Resume.pdf",
                subtitle: "Download my resume".to_string(),
                role: InfoRole::Resume,
            },
            on_click: Some(PanelAction::DownloadResume),
            on_close: None,
        },
    ]
}

fn about_layout<'a>(expanded: &BTreeSet<String>, data: &'a PortfolioData) -> Vec<PanelDescriptor<'a>> {
    let about = &data.sections.about.content;

    // The full About Me card covers the folders below it.
    if expanded.contains(ids::ABOUT_MAIN) {
        return vec![PanelDescriptor {
            id: ids::ABOUT_EXPANDED,
            position: CanvasPoint::new(100.0, 80.0),
            payload: PanelPayload::AboutMeExpanded {
                profile: &data.profile,
                content: about,
            },
            on_click: None,
            on_close: Some(PanelAction::Collapse(ids::ABOUT_MAIN)),
        }];
    }

    let mut panels = vec![PanelDescriptor {
        id: ids::ABOUT_MAIN,
        position: CanvasPoint::new(350.0, 80.0),
        payload: PanelPayload::Info {
            label: "About Me",
            subtitle: bio_preview(&data.profile.bio),
            role: InfoRole::About,
        },
        on_click: Some(PanelAction::Expand(ids::ABOUT_MAIN)),
        on_close: None,
    }];

    panels.push(if expanded.contains(ids::SKILLS_FOLDER) {
        expanded_info(
            ids::SKILLS_EXPANDED,
            ids::SKILLS_FOLDER,
            "Skills & Expertise",
            100.0,
            300.0,
            about.skills_block(),
        )
    } else {
        folder(ids::SKILLS_FOLDER, "Skills", 200.0, 300.0, about.skills.len())
    });

    panels.push(if expanded.contains(ids::ACHIEVEMENTS_FOLDER) {
        expanded_info(
            ids::ACHIEVEMENTS_EXPANDED,
            ids::ACHIEVEMENTS_FOLDER,
            "Achievements",
            450.0,
            300.0,
            about.achievements_block(),
        )
    } else {
        folder(ids::ACHIEVEMENTS_FOLDER, "Achievements", 600.0, 300.0, about.achievements.len())
    });

    panels
}

fn resume_layout<'a>(expanded: &BTreeSet<String>, data: &'a PortfolioData) -> Vec<PanelDescriptor<'a>> {
    let resume = &data.sections.resume.content;

    let mut panels = vec![PanelDescriptor {
        id: ids::RESUME_MAIN,
        position: CanvasPoint::new(350.0, 100.0),
        payload: PanelPayload::Info {
            label: "Resume.pdf",
            subtitle: "Download my complete resume".to_string(),
            role: InfoRole::Resume,
        },
        on_click: Some(PanelAction::DownloadResume),
        on_close: None,
    }];

    panels.push(if expanded.contains(ids::EXPERIENCE_FOLDER) {
        expanded_info(
            ids::EXPERIENCE_EXPANDED,
            ids::EXPERIENCE_FOLDER,
            "Work Experience",
            100.0,
            280.0,
            resume.experience_block(),
        )
    } else {
        folder(ids::EXPERIENCE_FOLDER, "Experience", 250.0, 280.0, resume.experience.len())
    });

    panels.push(if expanded.contains(ids::EDUCATION_FOLDER) {
        expanded_info(
            ids::EDUCATION_EXPANDED,
            ids::EDUCATION_FOLDER,
            "Education",
            450.0,
            280.0,
            resume.education_block(),
        )
    } else {
        folder(ids::EDUCATION_FOLDER, "Education", 550.0, 280.0, resume.education.len())
    });

    panels
}

/// First 80 characters of the bio followed by an ellipsis.
fn bio_preview(bio: &str) -> String {
    let preview: String = bio.chars().take(BIO_PREVIEW_CHARS).collect();
    format!("{}...", preview)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::Video;
    use crate::state::panel::PanelState;

    fn ids_of(panels: &[PanelDescriptor]) -> Vec<&'static str> {
        panels.iter().map(|panel| panel.id).collect()
    }

    fn expanded(cards: &[&str]) -> BTreeSet<String> {
        cards.iter().map(|card| card.to_string()).collect()
    }

    fn sample() -> PortfolioData {
        let mut data = PortfolioData::default();
        data.profile.name = "Ada".to_string();
        data.profile.bio = "x".repeat(120);
        data.sections.about.content.skills = vec!["Premiere".to_string(), "Resolve".to_string()];
        data.videos.shorts.push(Video {
            id: "s1".to_string(),
            url: "https://youtube.com/shorts/abcdefghijk".to_string(),
            ..Default::default()
        });
        data
    }

    #[test]
    fn test_work_collapsed() {
        let data = sample();
        let panels = layout(SectionKind::Work, &BTreeSet::new(), &data);
        assert_eq!(ids_of(&panels), vec![ids::ABOUT_NAV, ids::VIDEOS_FOLDER, ids::RESUME_NAV]);
        assert_eq!(panels[0].on_click, Some(PanelAction::SelectSection(SectionKind::About)));
        assert_eq!(panels[1].kind(), PanelKind::Folder);
        assert_eq!(panels[2].on_click, Some(PanelAction::DownloadResume));
    }

    #[test]
    fn test_work_videos_expanded() {
        let data = sample();
        let panels = layout(SectionKind::Work, &expanded(&[ids::VIDEOS_FOLDER]), &data);
        assert_eq!(ids_of(&panels), vec![ids::VIDEOS_EXPANDED]);
        assert_eq!(panels[0].on_close, Some(PanelAction::Collapse(ids::VIDEOS_FOLDER)));
        match &panels[0].payload {
            PanelPayload::VideoCarousel { videos } => {
                assert!(videos.full_length.is_empty());
                assert_eq!(videos.shorts.len(), 1);
            }
            other => panic!("unexpected payload {:?}", other),
        }
    }

    #[test]
    fn test_missing_videos_render_empty_carousel() {
        let data: PortfolioData =
            serde_json::from_str(r#"{ "profile": { "name": "Ada", "title": "Editor" } }"#).unwrap();
        let panels = layout(SectionKind::Work, &expanded(&[ids::VIDEOS_FOLDER]), &data);
        assert_eq!(panels.len(), 1);
        match &panels[0].payload {
            PanelPayload::VideoCarousel { videos } => assert!(videos.is_empty()),
            other => panic!("unexpected payload {:?}", other),
        }

        let folders = layout(SectionKind::Work, &BTreeSet::new(), &data);
        assert_eq!(
            folders[1].payload,
            PanelPayload::Folder { label: "YouTube Videos", item_count: 0 }
        );
    }

    #[test]
    fn test_about_layout() {
        let data = sample();
        let panels = layout(SectionKind::About, &BTreeSet::new(), &data);
        assert_eq!(
            ids_of(&panels),
            vec![ids::ABOUT_MAIN, ids::SKILLS_FOLDER, ids::ACHIEVEMENTS_FOLDER]
        );
        match &panels[0].payload {
            PanelPayload::Info { subtitle, .. } => {
                assert_eq!(subtitle.chars().count(), BIO_PREVIEW_CHARS + 3);
                assert!(subtitle.ends_with("..."));
            }
            other => panic!("unexpected payload {:?}", other),
        }

        let skills = layout(SectionKind::About, &expanded(&[ids::SKILLS_FOLDER]), &data);
        assert_eq!(
            ids_of(&skills),
            vec![ids::ABOUT_MAIN, ids::SKILLS_EXPANDED, ids::ACHIEVEMENTS_FOLDER]
        );
        assert_eq!(
            skills[1].payload,
            PanelPayload::ExpandedInfo {
                title: "Skills & Expertise",
                block: ContentBlock::Skills(&data.sections.about.content.skills),
            }
        );
    }

    #[test]
    fn test_about_main_hides_folders() {
        let data = sample();
        let panels = layout(
            SectionKind::About,
            &expanded(&[ids::ABOUT_MAIN, ids::SKILLS_FOLDER, ids::ACHIEVEMENTS_FOLDER]),
            &data,
        );
        assert_eq!(ids_of(&panels), vec![ids::ABOUT_EXPANDED]);
        assert_eq!(panels[0].kind(), PanelKind::AboutMeExpanded);
    }

    #[test]
    fn test_resume_layout() {
        let data = sample();
        let panels = layout(
            SectionKind::Resume,
            &expanded(&[ids::EXPERIENCE_FOLDER, ids::EDUCATION_FOLDER]),
            &data,
        );
        assert_eq!(
            ids_of(&panels),
            vec![ids::RESUME_MAIN, ids::EXPERIENCE_EXPANDED, ids::EDUCATION_EXPANDED]
        );
        // Empty collections still produce their panels.
        match &panels[1].payload {
            PanelPayload::ExpandedInfo { block, .. } => assert!(block.is_empty()),
            other => panic!("unexpected payload {:?}", other),
        }
    }

    #[test]
    fn test_folder_and_card_never_together() {
        let data = sample();
        let pairs = [
            (SectionKind::Work, ids::VIDEOS_FOLDER, ids::VIDEOS_EXPANDED),
            (SectionKind::About, ids::SKILLS_FOLDER, ids::SKILLS_EXPANDED),
            (SectionKind::About, ids::ACHIEVEMENTS_FOLDER, ids::ACHIEVEMENTS_EXPANDED),
            (SectionKind::Resume, ids::EXPERIENCE_FOLDER, ids::EXPERIENCE_EXPANDED),
            (SectionKind::Resume, ids::EDUCATION_FOLDER, ids::EDUCATION_EXPANDED),
        ];
        for (section, folder_id, card_id) in pairs {
            for cards in [expanded(&[]), expanded(&[folder_id])] {
                let shown = ids_of(&layout(section, &cards, &data));
                assert!(!(shown.contains(&folder_id) && shown.contains(&card_id)));
                assert!(shown.contains(&folder_id) || shown.contains(&card_id));
            }
        }
    }

    #[test]
    fn test_expand_collapse_round_trip() {
        let data = sample();
        let cards = [
            (SectionKind::Work, ids::VIDEOS_FOLDER),
            (SectionKind::About, ids::ABOUT_MAIN),
            (SectionKind::About, ids::SKILLS_FOLDER),
            (SectionKind::About, ids::ACHIEVEMENTS_FOLDER),
            (SectionKind::Resume, ids::EXPERIENCE_FOLDER),
            (SectionKind::Resume, ids::EDUCATION_FOLDER),
        ];
        for (section, card) in cards {
            let mut state = PanelState::new(section);
            let before = layout(section, state.expanded_cards(), &data);

            state.expand_card(card);
            assert_ne!(layout(section, state.expanded_cards(), &data), before);

            state.collapse_card(card);
            assert_eq!(layout(section, state.expanded_cards(), &data), before);
        }
    }

    #[test]
    fn test_section_switch_drops_stale_panels() {
        let data = sample();
        let mut state = PanelState::new(SectionKind::Work);
        state.expand_card(ids::VIDEOS_FOLDER);
        state.select_section(SectionKind::Work);
        assert_eq!(layout(SectionKind::Work, state.expanded_cards(), &data).len(), 3);
    }

    #[test]
    fn test_panels_do_not_overlap() {
        let data = sample();
        let cards = expanded(&[
            ids::SKILLS_FOLDER,
            ids::ACHIEVEMENTS_FOLDER,
            ids::EXPERIENCE_FOLDER,
            ids::EDUCATION_FOLDER,
        ]);
        for section in SectionKind::ALL {
            for set in [BTreeSet::new(), cards.clone()] {
                let rects: Vec<_> = layout(section, &set, &data).iter().map(|p| p.rect()).collect();
                for (i, a) in rects.iter().enumerate() {
                    for b in &rects[i + 1..] {
                        let overlap = a.min.x < b.max.x
                            && b.min.x < a.max.x
                            && a.min.y < b.max.y
                            && b.min.y < a.max.y;
                        assert!(!overlap, "{:?} overlaps {:?} in {:?}", a, b, section);
                    }
                }
            }
        }
    }
}
