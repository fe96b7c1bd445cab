// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application dock.
//!
//! A row of icons along the bottom edge that magnify toward the pointer.
//! Hover is tracked in [`DockState`]; a click hands the item's command
//! back to the app without touching the hover state.

use crate::icons::IconCache;
use crate::state::dock::{DockCommand, DockItem, DockState};

const ICON_SIZE: f32 = 50.0;

pub fn show(
    ui: &mut egui::Ui,
    items: &[DockItem],
    state: &mut DockState,
    icons: &mut IconCache,
) -> Option<DockCommand> {
    let mut command = None;
    let mut any_hovered = false;

    ui.horizontal(|ui| {
        let row_width = items.len() as f32 * (ICON_SIZE + 16.0);
        ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));

        for (index, item) in items.iter().enumerate() {
            let size = ICON_SIZE * state.scale(items, index);
            let response = ui
                .vertical(|ui| {
                    ui.add_space(ICON_SIZE * 1.3 - size);
                    icons.show(ui, item.icon, size);
                    let (dot, _) = ui.allocate_exact_size(egui::vec2(size, 6.0), egui::Sense::hover());
                    if item.running {
                        ui.painter().circle_filled(
                            dot.center(),
                            2.0,
                            egui::Color32::from_rgb(0, 122, 255),
                        );
                    }
                })
                .response
                .interact(egui::Sense::click())
                .on_hover_cursor(egui::CursorIcon::PointingHand);

            if response.hovered() {
                any_hovered = true;
                state.pointer_enter(item.id);
                response.clone().on_hover_ui(|ui| {
                    ui.label(egui::RichText::new(item.name).strong());
                    ui.label(egui::RichText::new(&item.cta).italics().small());
                });
            }
            if response.clicked() {
                log::info!("Dock item '{}' clicked", item.id);
                command = Some(state.click(item).clone());
            }
        }
    });

    if !any_hovered {
        state.pointer_leave();
    }
    command
}
