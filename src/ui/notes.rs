// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Notes window.
//!
//! Shows a note body with its URLs turned into links. YouTube URLs get a
//! dedicated "Open in YouTube" affordance.

use crate::state::window::NotesContent;
use once_cell::sync::Lazy;
use regex::Regex;

static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://[^\s]+").unwrap());

static YOUTUBE_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#,
    )
    .unwrap()
});

/// A run of note text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Link(&'a str),
    YouTube { url: &'a str, video_id: &'a str },
}

/// Extract the 11-character video id from a YouTube URL.
pub fn youtube_id(url: &str) -> Option<&str> {
    YOUTUBE_ID
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str())
}

/// Split a note body into text, link and YouTube segments.
pub fn segments(body: &str) -> Vec<Segment<'_>> {
    let mut parts = Vec::new();
    let mut last = 0;
    for found in URL.find_iter(body) {
        if found.start() > last {
            parts.push(Segment::Text(&body[last..found.start()]));
        }
        let url = found.as_str();
        parts.push(match youtube_id(url) {
            Some(video_id) => Segment::YouTube { url, video_id },
            None => Segment::Link(url),
        });
        last = found.end();
    }
    if last < body.len() {
        parts.push(Segment::Text(&body[last..]));
    }
    parts
}

/// Local window state.
#[derive(Debug, Clone, Default)]
pub struct NotesView {
    pub maximized: bool,
}

pub enum NotesAction {
    None,
    Close,
    OpenUrl(String),
}

pub fn show(ctx: &egui::Context, notes: &NotesContent, view: &mut NotesView) -> NotesAction {
    let mut action = NotesAction::None;
    let mut open = true;

    let screen = ctx.screen_rect();
    let size = if view.maximized {
        egui::vec2(screen.width() * 0.9, screen.height() * 0.8)
    } else {
        egui::vec2(600.0, 500.0)
    };

    egui::Window::new(format!("Notes: {}", notes.title))
        .id(egui::Id::new("notes_window"))
        .collapsible(false)
        .resizable(false)
        .fixed_size(size)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .open(&mut open)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(notes.origin.label()).weak().small());
                let label = if view.maximized { "Restore" } else { "Maximize" };
                if ui.small_button(label).clicked() {
                    view.maximized = !view.maximized;
                }
            });
            ui.separator();

            ui.heading(&notes.title);
            ui.add_space(6.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for segment in segments(&notes.body) {
                        match segment {
                            Segment::Text(text) => {
                                ui.label(text);
                            }
                            Segment::Link(url) => {
                                if ui.link(url).clicked() {
                                    action = NotesAction::OpenUrl(url.to_string());
                                }
                            }
                            Segment::YouTube { url, video_id } => {
                                ui.end_row();
                                ui.group(|ui| {
                                    ui.label(egui::RichText::new(format!("▶ YouTube video {}", video_id)).strong());
                                    if ui.link("🔗 Open in YouTube").clicked() {
                                        action = NotesAction::OpenUrl(url.to_string());
                                    }
                                });
                                ui.end_row();
                            }
                        }
                    }
                });
            });
        });

    if !open {
        action = NotesAction::Close;
    }
    action
}
