// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Profile sidebar and section navigation.

use crate::models::portfolio::{PortfolioData, SectionKind};

const TODO_LIMIT: usize = 6;

/// Result of sidebar interaction.
pub enum SidebarAction {
    None,
    SelectSection(SectionKind),
    OpenUrl(String),
}

pub fn show(ui: &mut egui::Ui, data: &PortfolioData, selected: SectionKind) -> SidebarAction {
    let mut action = SidebarAction::None;
    let profile = &data.profile;

    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(80.0, 80.0), egui::Sense::hover());
        ui.painter().circle_filled(rect.center(), 40.0, egui::Color32::from_rgb(0, 122, 255));
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            profile.initial().map(String::from).unwrap_or_default(),
            egui::FontId::proportional(36.0),
            egui::Color32::WHITE,
        );
        ui.add_space(8.0);

        if profile.name.is_empty() {
            ui.label(egui::RichText::new("Portfolio").strong().size(18.0));
        } else {
            ui.label(egui::RichText::new(&profile.name).strong().size(18.0));
            let handle = if profile.location.is_empty() {
                profile.handle()
            } else {
                format!("{} • {}", profile.handle(), profile.location)
            };
            ui.label(egui::RichText::new(handle).weak());
        }
        if !profile.title.is_empty() {
            ui.label(&profile.title);
        }
        ui.add_space(12.0);
    });

    ui.separator();

    for section in SectionKind::ALL {
        let label = egui::RichText::new(section.nav_label()).size(15.0);
        let response = ui.add_sized(
            [ui.available_width(), 28.0],
            egui::SelectableLabel::new(selected == section, label),
        );
        if response.clicked() {
            action = SidebarAction::SelectSection(section);
        }
    }

    let projects = &data.sections.work.projects;
    if !projects.is_empty() {
        ui.separator();
        ui.label(egui::RichText::new("PROJECTS").small().weak());
        for project in projects {
            match &project.link {
                Some(link) => {
                    if ui.link(&project.name).on_hover_text(link).clicked() {
                        action = SidebarAction::OpenUrl(link.clone());
                    }
                }
                None => {
                    ui.label(&project.name);
                }
            }
        }
    }

    if !data.todo_list.is_empty() {
        ui.separator();
        egui::Frame::none()
            .fill(egui::Color32::from_rgb(255, 243, 205))
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(egui::Margin::same(10.0))
            .show(ui, |ui| {
                ui.label(egui::RichText::new("📝 To Do").strong());
                for todo in data.todo_list.iter().take(TODO_LIMIT) {
                    ui.label(format!("• {}", todo));
                }
            });
    }

    action
}
