// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Panel visibility state.
//!
//! Tracks the selected section, which canvas cards are expanded and the
//! single open modal window. The store is a plain container: it does not
//! know which cards exclude each other, the layout decides that.

use super::window::WindowSpec;
use crate::models::portfolio::SectionKind;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelState {
    section: SectionKind,
    expanded: BTreeSet<String>,
    window: Option<WindowSpec>,
}

impl PanelState {
    pub fn new(section: SectionKind) -> Self {
        Self {
            section,
            ..Default::default()
        }
    }

    pub fn selected_section(&self) -> SectionKind {
        self.section
    }

    pub fn expanded_cards(&self) -> &BTreeSet<String> {
        &self.expanded
    }

    pub fn is_expanded(&self, card_id: &str) -> bool {
        self.expanded.contains(card_id)
    }

    pub fn open_window_spec(&self) -> Option<&WindowSpec> {
        self.window.as_ref()
    }

    /// Switch sections. No expanded card or window survives a switch,
    /// even when the section is reselected.
    pub fn select_section(&mut self, section: SectionKind) {
        log::info!("Selected section '{}'", section.key());
        self.section = section;
        self.expanded.clear();
        self.window = None;
    }

    pub fn expand_card(&mut self, card_id: impl Into<String>) {
        let card_id = card_id.into();
        log::debug!("Expanding card '{}'", card_id);
        self.expanded.insert(card_id);
    }

    pub fn collapse_card(&mut self, card_id: &str) {
        log::debug!("Collapsing card '{}'", card_id);
        self.expanded.remove(card_id);
    }

    /// Open a window, replacing whatever was open.
    pub fn open_window(&mut self, spec: WindowSpec) {
        if let Some(previous) = &self.window {
            log::info!("Replacing window '{}' with '{}'", previous.title(), spec.title());
        } else {
            log::info!("Opened window '{}'", spec.title());
        }
        self.window = Some(spec);
    }

    pub fn close_window(&mut self) {
        if let Some(previous) = self.window.take() {
            log::info!("Closed window '{}'", previous.title());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::window::{ExplorerContent, NoteOrigin, NotesContent};

    fn notes(title: &str) -> WindowSpec {
        WindowSpec::Notes(NotesContent::new(title, "body", NoteOrigin::Project))
    }

    #[test]
    fn test_select_section_clears_everything() {
        for section in SectionKind::ALL {
            let mut state = PanelState::default();
            state.expand_card("videos-folder");
            state.expand_card("skills-folder");
            state.open_window(notes("A"));

            state.select_section(section);
            assert_eq!(state.selected_section(), section);
            assert!(state.expanded_cards().is_empty());
            assert!(state.open_window_spec().is_none());
        }
    }

    #[test]
    fn test_expand_collapse_idempotent() {
        let mut state = PanelState::default();
        state.expand_card("skills-folder");
        state.expand_card("skills-folder");
        assert_eq!(state.expanded_cards().len(), 1);

        state.collapse_card("skills-folder");
        state.collapse_card("skills-folder");
        state.collapse_card("never-there");
        assert!(state.expanded_cards().is_empty());
    }

    #[test]
    fn test_store_imposes_no_exclusivity() {
        let mut state = PanelState::default();
        state.expand_card("experience-folder");
        state.expand_card("education-folder");
        assert!(state.is_expanded("experience-folder"));
        assert!(state.is_expanded("education-folder"));
    }

    #[test]
    fn test_open_window_replaces() {
        let mut state = PanelState::default();
        state.open_window(notes("A"));
        let explorer = WindowSpec::FileExplorer(ExplorerContent {
            title: "B".to_string(),
            folders: Vec::new(),
        });
        state.open_window(explorer.clone());
        assert_eq!(state.open_window_spec(), Some(&explorer));

        state.close_window();
        assert!(state.open_window_spec().is_none());
        state.close_window();
        assert!(state.open_window_spec().is_none());
    }
}
