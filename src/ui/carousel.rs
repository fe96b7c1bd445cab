// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video carousel card.
//!
//! Browses one collection at a time; shorts are shown first. The tab and
//! index are local to the card and reset when the card is reopened.

use crate::models::portfolio::{Video, VideoTab, Videos};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarouselState {
    tab: VideoTab,
    index: usize,
}

impl CarouselState {
    pub fn new(tab: VideoTab) -> Self {
        Self { tab, index: 0 }
    }

    pub fn tab(&self) -> VideoTab {
        self.tab
    }

    pub fn switch_tab(&mut self, tab: VideoTab) {
        self.tab = tab;
        self.index = 0;
    }

    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + 1) % len;
        }
    }

    pub fn previous(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + len - 1) % len;
        }
    }

    /// Index of the shown video in a collection of `len`; an index left
    /// past the end by a shorter collection shows the first video.
    pub fn position(&self, len: usize) -> usize {
        if self.index < len {
            self.index
        } else {
            0
        }
    }

    /// The video under the cursor, if the collection has one.
    pub fn current<'a>(&self, videos: &'a [Video]) -> Option<&'a Video> {
        videos.get(self.position(videos.len()))
    }
}

/// Result of interacting with the carousel.
pub enum CarouselAction {
    None,
    Close,
    OpenUrl(String),
}

pub fn show(
    ui: &mut egui::Ui,
    state: &mut CarouselState,
    collections: &Videos,
) -> CarouselAction {
    let mut action = CarouselAction::None;

    ui.horizontal(|ui| {
        ui.heading("YouTube Videos");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("✖").on_hover_text("Close").clicked() {
                action = CarouselAction::Close;
            }
        });
    });

    ui.horizontal(|ui| {
        for tab in [VideoTab::Shorts, VideoTab::FullLength] {
            let label = format!("{} ({})", tab.label(), collections.collection(tab).len());
            if ui.selectable_label(state.tab() == tab, label).clicked() {
                state.switch_tab(tab);
            }
        }
    });
    ui.separator();

    let videos = collections.collection(state.tab());
    let Some(video) = state.current(videos) else {
        let empty = if collections.is_empty() {
            "No videos yet".to_string()
        } else {
            format!("No {} yet", state.tab().label().to_lowercase())
        };
        ui.centered_and_justified(|ui| {
            ui.label(egui::RichText::new(empty).weak());
        });
        return action;
    };

    ui.label(egui::RichText::new(&video.title).strong().size(16.0));
    if !video.description.is_empty() {
        ui.label(&video.description);
    }
    ui.horizontal(|ui| {
        if let Some(duration) = &video.duration {
            ui.label(egui::RichText::new(format!("⏱ {}", duration)).weak());
        }
        if let Some(views) = &video.views {
            ui.label(egui::RichText::new(format!("👁 {}", views)).weak());
        }
    });

    ui.add_space(8.0);
    if ui.button("▶ Watch on YouTube").clicked() {
        action = CarouselAction::OpenUrl(video.url.clone());
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        let many = videos.len() > 1;
        if ui.add_enabled(many, egui::Button::new("◀")).clicked() {
            state.previous(videos.len());
        }
        ui.label(format!("Video {} of {}", state.position(videos.len()) + 1, videos.len()));
        if ui.add_enabled(many, egui::Button::new("▶")).clicked() {
            state.next(videos.len());
        }
    });

    action
}

#[cfg(test)]
mod tests {
    use super::*;

    fn videos(count: usize) -> Vec<Video> {
        (0..count)
            .map(|i| Video {
                id: format!("v{}", i),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_defaults_to_shorts() {
        let state = CarouselState::default();
        assert_eq!(state.tab(), VideoTab::Shorts);
        assert_eq!(state.index, 0);
    }

    #[test]
    fn test_wraps_both_ways() {
        let list = videos(3);
        let mut state = CarouselState::default();
        state.previous(list.len());
        assert_eq!(state.index, 2);
        state.next(list.len());
        assert_eq!(state.index, 0);
        state.next(list.len());
        assert_eq!(state.current(&list).unwrap().id, "v1");
    }

    #[test]
    fn test_switch_tab_resets_index() {
        let mut state = CarouselState::new(VideoTab::FullLength);
        state.next(5);
        state.next(5);
        state.switch_tab(VideoTab::Shorts);
        assert_eq!(state.index, 0);
        assert_eq!(state.tab(), VideoTab::Shorts);
    }

    #[test]
    fn test_empty_collection() {
        let mut state = CarouselState::default();
        state.next(0);
        state.previous(0);
        assert_eq!(state.index, 0);
        assert!(state.current(&[]).is_none());
    }

    #[test]
    fn test_index_past_end_falls_back_to_first() {
        let mut state = CarouselState::default();
        state.next(4);
        state.next(4);
        let short_list = videos(1);
        assert_eq!(state.current(&short_list).unwrap().id, "v0");
        assert_eq!(state.position(short_list.len()), 0);
        assert_eq!(state.position(4), 2);
    }
}
