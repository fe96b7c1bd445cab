// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Icon name resolution and texture caching.

use crate::io::media;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Asset used for any name not in the table.
pub const FALLBACK_ICON: &str = "Document.png";

/// Map a logical icon name to its asset file name. Case-insensitive;
/// unknown names resolve to [`FALLBACK_ICON`].
pub fn resolve(name: &str) -> &'static str {
    match name.to_lowercase().as_str() {
        "folder" | "work" => "Folder.png",
        "document" | "project" | "resume" | "description" => "Document.png",
        "finder" => "Finder.png",
        "notes" => "Notes.png",
        "calculator" => "Calculator.png",
        "calendar" => "Calendar.png",
        "contacts" | "about" | "person" => "Contacts.png",
        "mail" => "Mail.png",
        "safari" => "Safari.png",
        "settings" => "Settings.png",
        "terminal" => "Terminal.png",
        "textedit" => "TextEdit.png",
        "preview" => "Preview.png",
        "photos" => "Photos.png",
        "music" => "Music.png",
        "tv" => "TV.png",
        "app-store" => "App Store.png",
        "launchpad" => "Launchpad.png",
        "mission-control" => "Mission Control.png",
        "final-cut-pro" => "Final Cut Pro.png",
        "imovie" | "shorts" | "movie" => "iMovie.png",
        "garageband" => "GarageBand.png",
        "keynote" => "Keynote.png",
        "pages" => "Pages.png",
        "numbers" => "Numbers.png",
        "figma" => "Figma.png",
        "xcode" => "Xcode.png",
        "facetime" => "FaceTime.png",
        "messages" => "Messages.png",
        "news" => "News.png",
        "podcasts" => "Podcasts.png",
        "activity-monitor" => "Activity Monitor.png",
        "disk-utility" => "Disk Utility.png",
        "keychain-access" => "Keychain Access.png",
        "system-information" | "info" => "System Information.png",
        "time-machine" => "Time Machine.png",
        "console" => "Console.png",
        "screenshot" => "Screenshot.png",
        "quicktime" | "video" | "youtube" | "video-library" => "QuickTime Player.png",
        "photo-booth" => "Photo Booth.png",
        "voice-memos" => "Voice Memos.png",
        "reminders" => "Reminders.png",
        "stickies" => "Stickies.png",
        "dictionary" => "Dictionary.png",
        "font-book" => "Font Book.png",
        "books" => "Books.png",
        "trash-empty" => "Trash Empty.png",
        "trash-full" => "Trash Full.png",
        "home" => "Home.png",
        "find-my" => "Find My.png",
        "siri" => "Siri.png",
        "shortcuts" => "Shortcuts.png",
        "weather" => "Weather.png",
        "stocks" => "Stocks.png",
        "maps" => "Maps.png",
        "clock" => "Clock.png",
        _ => FALLBACK_ICON,
    }
}

/// Full path of the asset for `name` inside `icon_dir`.
pub fn asset_path(icon_dir: &Path, name: &str) -> PathBuf {
    icon_dir.join(resolve(name))
}

/// Lazily loaded icon textures keyed by asset file.
///
/// A file that fails to load is remembered as missing so it is not
/// retried every frame.
pub struct IconCache {
    icon_dir: PathBuf,
    textures: HashMap<&'static str, Option<egui::TextureHandle>>,
}

impl IconCache {
    pub fn new(icon_dir: PathBuf) -> Self {
        Self {
            icon_dir,
            textures: HashMap::new(),
        }
    }

    pub fn get(&mut self, ctx: &egui::Context, name: &str) -> Option<egui::TextureHandle> {
        let file = resolve(name);
        let icon_dir = &self.icon_dir;
        self.textures
            .entry(file)
            .or_insert_with(|| {
                let path = asset_path(icon_dir, name);
                match media::load_image(&path) {
                    Ok(image) => Some(ctx.load_texture(
                        format!("icon:{}", file),
                        image.to_color_image(),
                        egui::TextureOptions::LINEAR,
                    )),
                    Err(e) => {
                        log::warn!("Icon unavailable: {:#}", e);
                        None
                    }
                }
            })
            .clone()
    }

    /// Draw the icon at `size`, or a glyph placeholder when the asset is
    /// missing.
    pub fn show(&mut self, ui: &mut egui::Ui, name: &str, size: f32) -> egui::Response {
        match self.get(ui.ctx(), name) {
            Some(texture) => ui.add(
                egui::Image::new((texture.id(), texture.size_vec2()))
                    .fit_to_exact_size(egui::vec2(size, size)),
            ),
            None => {
                let (rect, response) =
                    ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
                ui.painter().rect_filled(rect, size * 0.22, glyph_color(name));
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    glyph(name),
                    egui::FontId::proportional(size * 0.5),
                    egui::Color32::WHITE,
                );
                response
            }
        }
    }
}

fn glyph(name: &str) -> &'static str {
    match resolve(name) {
        "Folder.png" => "📁",
        "Finder.png" => "☺",
        "Mail.png" => "✉",
        "FaceTime.png" => "☎",
        "Messages.png" => "💬",
        "Calendar.png" => "📅",
        "QuickTime Player.png" | "iMovie.png" => "▶",
        "Contacts.png" => "👤",
        "Trash Empty.png" | "Trash Full.png" => "🗑",
        _ => "📄",
    }
}

fn glyph_color(name: &str) -> egui::Color32 {
    match resolve(name) {
        "Folder.png" => egui::Color32::from_rgb(84, 160, 230),
        "Mail.png" | "Finder.png" => egui::Color32::from_rgb(0, 122, 255),
        "FaceTime.png" | "Messages.png" => egui::Color32::from_rgb(52, 199, 89),
        "Calendar.png" => egui::Color32::from_rgb(255, 69, 58),
        "QuickTime Player.png" | "iMovie.png" => egui::Color32::from_rgb(88, 86, 214),
        "Trash Empty.png" => egui::Color32::from_gray(140),
        _ => egui::Color32::from_gray(110),
    }
}
