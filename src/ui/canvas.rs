// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Node canvas for the selected section.
//!
//! Draws the panels produced by the layout on a dotted background, fitted
//! into the available space, and reports which panel action was taken.

use super::carousel::{self, CarouselAction, CarouselState};
use crate::icons::IconCache;
use crate::layout::{PanelAction, PanelDescriptor, PanelPayload};
use crate::models::portfolio::{AboutContent, ContentBlock, Profile, SectionKind};
use crate::state::window::{NoteOrigin, NotesContent};
use crate::util::geometry::{self, ViewTransform};

const DOT_GAP: f32 = 20.0;

/// Result of canvas interaction.
pub enum CanvasAction {
    None,
    Panel(PanelAction),
    OpenUrl(String),
    OpenNotes(NotesContent),
}

/// Display the canvas and handle panel interactions.
pub fn show(
    ui: &mut egui::Ui,
    section: SectionKind,
    panels: &[PanelDescriptor],
    carousel: &mut CarouselState,
    icons: &mut IconCache,
) -> CanvasAction {
    let mut action = CanvasAction::None;

    let (title, subtitle) = section.heading();
    ui.vertical(|ui| {
        ui.heading(egui::RichText::new(title).strong());
        ui.label(egui::RichText::new(subtitle).weak());
    });
    ui.separator();

    let (canvas_rect, _) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
    draw_dots(ui.painter(), canvas_rect);

    if section == SectionKind::Work {
        ui.painter().text(
            canvas_rect.center_top() + egui::vec2(0.0, 40.0),
            egui::Align2::CENTER_TOP,
            "welcome to my\nportfolio.",
            egui::FontId::proportional(30.0),
            egui::Color32::from_gray(60),
        );
    }

    let view = geometry::bounds(panels.iter().map(|panel| panel.rect()))
        .map(|content| ViewTransform::fit(content, canvas_rect.width(), canvas_rect.height()))
        .unwrap_or(ViewTransform::IDENTITY);

    for panel in panels {
        let (x, y) = view.apply(panel.position);
        let (width, height) = panel.kind().size();
        let rect = egui::Rect::from_min_size(
            canvas_rect.min + egui::vec2(x, y),
            egui::vec2(width, height) * view.scale,
        );

        let clicked = ui
            .allocate_ui_at_rect(rect, |ui| {
                ui.set_clip_rect(rect.intersect(canvas_rect));
                draw_panel(ui, panel, rect, carousel, icons, &mut action)
            })
            .inner;

        if clicked {
            if let Some(panel_action) = panel.on_click {
                log::info!("Clicked panel '{}'", panel.id);
                action = CanvasAction::Panel(panel_action);
            }
        }
    }

    action
}

fn draw_dots(painter: &egui::Painter, rect: egui::Rect) {
    painter.rect_filled(rect, 0.0, egui::Color32::from_gray(245));
    let color = egui::Color32::from_gray(190);
    let mut y = rect.min.y + DOT_GAP / 2.0;
    while y < rect.max.y {
        let mut x = rect.min.x + DOT_GAP / 2.0;
        while x < rect.max.x {
            painter.circle_filled(egui::pos2(x, y), 1.0, color);
            x += DOT_GAP;
        }
        y += DOT_GAP;
    }
}

/// Draw one panel; returns whether its body was clicked.
fn draw_panel(
    ui: &mut egui::Ui,
    panel: &PanelDescriptor,
    rect: egui::Rect,
    carousel: &mut CarouselState,
    icons: &mut IconCache,
    action: &mut CanvasAction,
) -> bool {
    let frame = egui::Frame::group(ui.style())
        .fill(egui::Color32::WHITE)
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::same(12.0));

    let response = frame
        .show(ui, |ui| {
            ui.set_min_size(rect.size() - egui::vec2(24.0, 24.0));
            match &panel.payload {
                PanelPayload::Info { label, subtitle, role } => {
                    ui.horizontal(|ui| {
                        icons.show(ui, role.icon(), 40.0);
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(*label).strong().size(16.0));
                            ui.label(egui::RichText::new(subtitle).weak());
                        });
                    });
                }
                PanelPayload::Folder { label, item_count } => {
                    ui.vertical_centered(|ui| {
                        icons.show(ui, "folder", 64.0);
                        ui.label(egui::RichText::new(*label).strong());
                        ui.label(egui::RichText::new(format!("{} items", item_count)).weak().small());
                    });
                }
                PanelPayload::VideoCarousel { videos } => {
                    match carousel::show(ui, carousel, videos) {
                        CarouselAction::Close => {
                            if let Some(close) = panel.on_close {
                                *action = CanvasAction::Panel(close);
                            }
                        }
                        CarouselAction::OpenUrl(url) => *action = CanvasAction::OpenUrl(url),
                        CarouselAction::None => {}
                    }
                }
                PanelPayload::ExpandedInfo { title, block } => {
                    if closable_header(ui, title) {
                        if let Some(close) = panel.on_close {
                            *action = CanvasAction::Panel(close);
                        }
                    }
                    egui::ScrollArea::vertical()
                        .id_source(panel.id)
                        .show(ui, |ui| draw_block(ui, block));
                }
                PanelPayload::AboutMeExpanded { profile, content } => {
                    if closable_header(ui, "About Me") {
                        if let Some(close) = panel.on_close {
                            *action = CanvasAction::Panel(close);
                        }
                    }
                    let read_bio = egui::ScrollArea::vertical()
                        .id_source(panel.id)
                        .show(ui, |ui| draw_about(ui, profile, content))
                        .inner;
                    if read_bio {
                        *action = CanvasAction::OpenNotes(NotesContent::new(
                            profile.name.clone(),
                            profile.bio.clone(),
                            NoteOrigin::About,
                        ));
                    }
                }
            }
        })
        .response;

    if panel.on_click.is_none() {
        return false;
    }
    let response = response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    response.clicked()
}

/// Title row with a close button; returns whether close was clicked.
fn closable_header(ui: &mut egui::Ui, title: &str) -> bool {
    let mut close = false;
    ui.horizontal(|ui| {
        ui.heading(title);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            close = ui.button("✖").on_hover_text("Close").clicked();
        });
    });
    ui.separator();
    close
}

fn draw_block(ui: &mut egui::Ui, block: &ContentBlock) {
    if block.is_empty() {
        ui.label(egui::RichText::new("Nothing here yet").weak());
        return;
    }

    match block {
        ContentBlock::Skills(skills) => {
            ui.horizontal_wrapped(|ui| {
                for skill in skills.iter() {
                    ui.label(
                        egui::RichText::new(skill)
                            .background_color(egui::Color32::from_rgb(230, 242, 255))
                            .color(egui::Color32::from_rgb(0, 90, 200)),
                    );
                }
            });
        }
        ContentBlock::Achievements(achievements) => {
            for achievement in achievements.iter() {
                ui.label(format!("🏆 {}", achievement));
            }
        }
        ContentBlock::Experience(experience) => {
            for exp in experience.iter() {
                ui.label(egui::RichText::new(&exp.position).strong());
                ui.label(format!("{} • {}", exp.company, exp.duration));
                if !exp.description.is_empty() {
                    ui.label(egui::RichText::new(&exp.description).weak());
                }
                ui.add_space(6.0);
            }
        }
        ContentBlock::Education(education) => {
            for edu in education.iter() {
                ui.label(egui::RichText::new(&edu.degree).strong());
                ui.label(format!("{} • {}", edu.institution, edu.year));
                if let Some(description) = &edu.description {
                    ui.label(egui::RichText::new(description).weak());
                }
                ui.add_space(6.0);
            }
        }
    }
}

/// Returns whether the bio was opened as a note.
fn draw_about(ui: &mut egui::Ui, profile: &Profile, content: &AboutContent) -> bool {
    ui.horizontal(|ui| {
        let initial = profile.initial().map(String::from).unwrap_or_default();
        let (rect, _) = ui.allocate_exact_size(egui::vec2(56.0, 56.0), egui::Sense::hover());
        ui.painter().circle_filled(rect.center(), 28.0, egui::Color32::from_rgb(0, 122, 255));
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            initial,
            egui::FontId::proportional(26.0),
            egui::Color32::WHITE,
        );
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(&profile.name).strong().size(18.0));
            ui.label(&profile.title);
            if !profile.location.is_empty() {
                ui.label(egui::RichText::new(format!("📍 {}", profile.location)).weak());
            }
        });
    });
    ui.add_space(8.0);
    ui.label(&profile.bio);
    let read_bio = !profile.bio.is_empty() && ui.link("Open in Notes").clicked();
    if let Some(description) = &content.description {
        ui.add_space(4.0);
        ui.label(description);
    }

    ui.add_space(8.0);
    ui.label(egui::RichText::new("Skills").strong());
    draw_block(ui, &content.skills_block());

    if let Some(experience) = &profile.experience {
        ui.add_space(8.0);
        ui.label(egui::RichText::new("Experience").strong());
        ui.label(experience);
    }

    if !content.achievements.is_empty() {
        ui.add_space(8.0);
        ui.label(egui::RichText::new("Highlights").strong());
        let top = &content.achievements[..content.achievements.len().min(3)];
        draw_block(ui, &ContentBlock::Achievements(top));
    }
    read_bio
}
