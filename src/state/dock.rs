// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Dock items and the dock hover state machine.

use crate::config::ContactConfig;
use crate::io::outbound;
use crate::models::portfolio::{SectionKind, VideoTab};

/// What a dock item does when clicked.
#[derive(Debug, Clone, PartialEq)]
pub enum DockCommand {
    OpenFileExplorer,
    SelectSection(SectionKind),
    ShowVideos(VideoTab),
    DownloadResume,
    /// Copy text to the clipboard; the message is logged for the user.
    CopyText { text: String, message: String },
    OpenUrl(String),
    Trash,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DockItem {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub cta: String,
    pub running: bool,
    pub command: DockCommand,
}

/// The canonical dock configuration.
pub fn dock_items(contact: &ContactConfig) -> Vec<DockItem> {
    vec![
        DockItem {
            id: "finder",
            name: "Finder",
            icon: "finder",
            cta: "Browse my portfolio files and projects".to_string(),
            running: true,
            command: DockCommand::OpenFileExplorer,
        },
        DockItem {
            id: "work",
            name: "Work Projects",
            icon: "work",
            cta: "View my professional work and case studies".to_string(),
            running: false,
            command: DockCommand::SelectSection(SectionKind::Work),
        },
        DockItem {
            id: "facetime",
            name: "Phone",
            icon: "facetime",
            cta: format!("{} - Click to copy my phone number", contact.phone),
            running: false,
            command: DockCommand::CopyText {
                text: contact.phone.clone(),
                message: format!("Phone number copied: {}", contact.phone),
            },
        },
        DockItem {
            id: "mail",
            name: "Mail",
            icon: "mail",
            cta: format!("{} - Send me an email", contact.email),
            running: false,
            command: DockCommand::OpenUrl(outbound::mailto_link(
                &contact.email,
                &contact.mail_subject,
                &contact.mail_body,
            )),
        },
        DockItem {
            id: "youtube-videos",
            name: "YouTube Videos",
            icon: "youtube",
            cta: "Watch my video editing work and tutorials".to_string(),
            running: false,
            command: DockCommand::ShowVideos(VideoTab::FullLength),
        },
        DockItem {
            id: "youtube-shorts",
            name: "YouTube Shorts",
            icon: "shorts",
            cta: "Quick video edits and creative content".to_string(),
            running: false,
            command: DockCommand::ShowVideos(VideoTab::Shorts),
        },
        DockItem {
            id: "resume",
            name: "Resume",
            icon: "resume",
            cta: "Download my complete resume PDF".to_string(),
            running: false,
            command: DockCommand::DownloadResume,
        },
        DockItem {
            id: "messages",
            name: "WhatsApp",
            icon: "messages",
            cta: "Message me on WhatsApp for quick chat".to_string(),
            running: false,
            command: DockCommand::OpenUrl(outbound::whatsapp_link(
                &contact.whatsapp,
                &contact.whatsapp_message,
            )),
        },
        DockItem {
            id: "calendar",
            name: "Schedule Meeting",
            icon: "calendar",
            cta: "Schedule a meeting to discuss projects".to_string(),
            running: false,
            command: DockCommand::OpenUrl(contact.calendar_url.clone()),
        },
        DockItem {
            id: "trash",
            name: "Trash",
            icon: "trash-empty",
            cta: "Clean workspace - drag files here".to_string(),
            running: false,
            command: DockCommand::Trash,
        },
    ]
}

/// Dock hover state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DockHover {
    #[default]
    Idle,
    Hovering(&'static str),
}

#[derive(Debug, Clone, Default)]
pub struct DockState {
    hover: DockHover,
}

impl DockState {
    pub fn hover(&self) -> DockHover {
        self.hover
    }

    pub fn hovered(&self) -> Option<&'static str> {
        match self.hover() {
            DockHover::Idle => None,
            DockHover::Hovering(id) => Some(id),
        }
    }

    pub fn pointer_enter(&mut self, item_id: &'static str) {
        if self.hover != DockHover::Hovering(item_id) {
            log::debug!("Dock hover: {}", item_id);
        }
        self.hover = DockHover::Hovering(item_id);
    }

    pub fn pointer_leave(&mut self) {
        self.hover = DockHover::Idle;
    }

    /// Clicking leaves the hover state untouched and hands back the
    /// item's command.
    pub fn click<'a>(&self, item: &'a DockItem) -> &'a DockCommand {
        &item.command
    }

    /// Icon scale for the item at `index`, growing toward the hovered item.
    pub fn scale(&self, items: &[DockItem], index: usize) -> f32 {
        let Some(hovered) = self.hovered() else {
            return 1.0;
        };
        let Some(hovered_index) = items.iter().position(|item| item.id == hovered) else {
            return 1.0;
        };
        match index.abs_diff(hovered_index) {
            0 => 1.3,
            1 => 1.15,
            2 => 1.05,
            _ => 1.0,
        }
    }
}
