// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Top menu bar with contact shortcuts and a clock.

use crate::config::ContactConfig;
use crate::io::outbound;
use chrono::NaiveDateTime;

/// Result of menu bar interaction.
pub enum MenuAction {
    None,
    CopyText(String),
    OpenUrl(String),
    DownloadResume,
    OpenFileExplorer,
}

/// Clock text, e.g. `Friday, Oct 16 3:05 PM`.
pub fn format_clock(now: &NaiveDateTime) -> String {
    now.format("%A, %b %-d %-I:%M %p").to_string()
}

pub fn show(ui: &mut egui::Ui, contact: &ContactConfig, now: &NaiveDateTime) -> MenuAction {
    let mut action = MenuAction::None;

    egui::menu::bar(ui, |ui| {
        ui.menu_button(egui::RichText::new("Contact").strong(), |ui| {
            if ui.button(format!("Copy phone ({})", contact.phone)).clicked() {
                action = MenuAction::CopyText(contact.phone.clone());
                ui.close_menu();
            }
            if ui.button(format!("Email {}", contact.email)).clicked() {
                action = MenuAction::OpenUrl(outbound::mailto_link(
                    &contact.email,
                    &contact.mail_subject,
                    &contact.mail_body,
                ));
                ui.close_menu();
            }
            if ui.button("WhatsApp").clicked() {
                action = MenuAction::OpenUrl(outbound::whatsapp_link(
                    &contact.whatsapp,
                    &contact.whatsapp_message,
                ));
                ui.close_menu();
            }
            if ui.button("Schedule a meeting").clicked() {
                action = MenuAction::OpenUrl(contact.calendar_url.clone());
                ui.close_menu();
            }
        });

        ui.menu_button("Resume", |ui| {
            if ui.button("Download Resume...").clicked() {
                action = MenuAction::DownloadResume;
                ui.close_menu();
            }
            if ui.button("Browse Files").clicked() {
                action = MenuAction::OpenFileExplorer;
                ui.close_menu();
            }
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format_clock(now));
            ui.label(egui::RichText::new("ᛒ").color(egui::Color32::from_rgb(0, 122, 255)));
            ui.label("📶");
            ui.label("🔋");
        });
    });

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_clock() {
        let afternoon = NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(15, 5, 0)
            .unwrap();
        assert_eq!(format_clock(&afternoon), "Friday, Oct 16 3:05 PM");

        let midnight = NaiveDate::from_ymd_opt(2026, 1, 4)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(format_clock(&midnight), "Sunday, Jan 4 12:00 AM");
    }
}
