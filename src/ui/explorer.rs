// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! File Explorer window.

use crate::icons::IconCache;
use crate::state::window::{ExplorerContent, ExplorerItem, ItemKind, NoteOrigin, NotesContent};
use std::collections::BTreeSet;

/// Selection and expansion local to one explorer window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExplorerView {
    selected: Option<String>,
    expanded: BTreeSet<String>,
}

impl ExplorerView {
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_expanded(&self, folder_id: &str) -> bool {
        self.expanded.contains(folder_id)
    }

    /// Clicking a folder selects it and toggles its expansion.
    pub fn click_folder(&mut self, folder_id: &str) {
        if !self.expanded.remove(folder_id) {
            self.expanded.insert(folder_id.to_string());
        }
        self.selected = Some(folder_id.to_string());
    }
}

pub enum ExplorerAction {
    None,
    Close,
    OpenNotes(NotesContent),
    OpenUrl(String),
}

/// What clicking an item does: notes win over the URL.
pub fn item_action(item: &ExplorerItem) -> ExplorerAction {
    if let Some(notes) = &item.notes {
        let origin = match item.kind {
            ItemKind::Document => NoteOrigin::Experience,
            _ => NoteOrigin::Project,
        };
        ExplorerAction::OpenNotes(NotesContent::new(item.name.clone(), notes.clone(), origin))
    } else if let Some(url) = &item.url {
        ExplorerAction::OpenUrl(url.clone())
    } else {
        ExplorerAction::None
    }
}

pub fn show(
    ctx: &egui::Context,
    content: &ExplorerContent,
    view: &mut ExplorerView,
    icons: &mut IconCache,
) -> ExplorerAction {
    let mut action = ExplorerAction::None;
    let mut open = true;

    egui::Window::new(&content.title)
        .id(egui::Id::new("explorer_window"))
        .collapsible(false)
        .resizable(false)
        .fixed_size(egui::vec2(650.0, 400.0))
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .open(&mut open)
        .show(ctx, |ui| {
            ui.horizontal_top(|ui| {
                ui.vertical(|ui| {
                    ui.set_width(180.0);
                    ui.label(egui::RichText::new("FAVORITES").small().weak());
                    for folder in &content.folders {
                        let selected = view.selected() == Some(folder.id.as_str());
                        ui.horizontal(|ui| {
                            icons.show(ui, folder.kind.icon(), 16.0);
                            let arrow = if view.is_expanded(&folder.id) { "▾" } else { "▸" };
                            let label = format!("{} {}", arrow, folder.name);
                            if ui.selectable_label(selected, label).clicked() {
                                view.click_folder(&folder.id);
                            }
                        });
                        if view.is_expanded(&folder.id) {
                            for item in &folder.items {
                                ui.horizontal(|ui| {
                                    ui.add_space(18.0);
                                    if ui.small_button(&item.name).clicked() {
                                        action = item_action(item);
                                    }
                                });
                            }
                        }
                    }
                });

                ui.separator();

                ui.vertical(|ui| {
                    let Some(folder) = view.selected().and_then(|id| content.folder(id)) else {
                        ui.centered_and_justified(|ui| {
                            ui.label(egui::RichText::new("Select a folder").weak());
                        });
                        return;
                    };

                    ui.heading(&folder.name);
                    ui.separator();
                    if folder.items.is_empty() {
                        ui.label(egui::RichText::new("This folder is empty").weak());
                        return;
                    }

                    egui::ScrollArea::vertical().show(ui, |ui| {
                        ui.horizontal_wrapped(|ui| {
                            for item in &folder.items {
                                ui.vertical(|ui| {
                                    ui.set_width(96.0);
                                    let icon = icons.show(ui, item.kind.icon(), 48.0);
                                    let label = ui.add(
                                        egui::Label::new(egui::RichText::new(&item.name).small())
                                            .sense(egui::Sense::click()),
                                    );
                                    let icon = icon.interact(egui::Sense::click());
                                    if icon.clicked() || label.clicked() {
                                        action = item_action(item);
                                    }
                                });
                            }
                        });
                    });
                });
            });
        });

    if !open {
        action = ExplorerAction::Close;
    }
    action
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(notes: Option<&str>, url: Option<&str>) -> ExplorerItem {
        ExplorerItem {
            id: "p1".to_string(),
            name: "Reel".to_string(),
            kind: ItemKind::Project,
            url: url.map(str::to_string),
            notes: notes.map(str::to_string),
        }
    }

    #[test]
    fn test_folder_click_toggles() {
        let mut view = ExplorerView::default();
        assert_eq!(view.selected(), None);

        view.click_folder("projects");
        assert!(view.is_expanded("projects"));
        assert_eq!(view.selected(), Some("projects"));

        view.click_folder("projects");
        assert!(!view.is_expanded("projects"));
        assert_eq!(view.selected(), Some("projects"));
    }

    #[test]
    fn test_item_prefers_notes() {
        match item_action(&item(Some("body"), Some("https://a.dev"))) {
            ExplorerAction::OpenNotes(notes) => {
                assert_eq!(notes.title, "Reel");
                assert_eq!(notes.origin, NoteOrigin::Project);
            }
            _ => panic!("expected notes"),
        }
        assert!(matches!(
            item_action(&item(None, Some("https://a.dev"))),
            ExplorerAction::OpenUrl(url) if url == "https://a.dev"
        ));
    }

    #[test]
    fn test_item_without_link_has_no_action() {
        assert!(matches!(item_action(&item(None, None)), ExplorerAction::None));
    }
}
