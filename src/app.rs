// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! The app owns the portfolio document and the panel state, routes every
//! component's returned action into state changes, and performs the
//! outbound effects (URLs, clipboard, resume download) those actions ask for.

use crate::config::{AppConfig, ContactConfig};
use crate::icons::IconCache;
use crate::io::outbound;
use crate::layout::{self, ids, PanelAction};
use crate::models::portfolio::{PortfolioData, SectionKind, VideoTab};
use crate::state::dock::{dock_items, DockCommand, DockItem, DockState};
use crate::state::panel::PanelState;
use crate::state::window::{ExplorerContent, NotesContent, WindowSpec};
use crate::ui::canvas::{self, CanvasAction};
use crate::ui::carousel::CarouselState;
use crate::ui::explorer::{self, ExplorerAction, ExplorerView};
use crate::ui::menu_bar::{self, MenuAction};
use crate::ui::notes::{self, NotesAction, NotesView};
use crate::ui::dock;
use crate::ui::sidebar::{self, SidebarAction};
use std::time::Duration;

/// Side effect requested by an action, performed against the egui context.
#[derive(Debug, Clone, PartialEq)]
enum Effect {
    OpenUrl(String),
    CopyText { text: String, message: String },
    DownloadResume,
}

/// Main application state.
pub struct PortfolioApp {
    data: PortfolioData,
    config: AppConfig,

    /// Config contact details overridden by the profile
    contact: ContactConfig,

    /// Section, expanded cards and the open window
    panels: PanelState,

    dock: DockState,
    dock_items: Vec<DockItem>,

    /// Video carousel position; reset whenever the carousel is reopened
    carousel: CarouselState,

    notes_view: NotesView,
    explorer_view: ExplorerView,
    icons: IconCache,
}

impl PortfolioApp {
    pub fn new(config: AppConfig, data: PortfolioData) -> Self {
        let contact = config.contact.merged_with(&data.profile);
        let dock_items = dock_items(&contact);
        let icons = IconCache::new(config.icon_dir.clone());
        let panels = PanelState::new(config.initial_section);

        Self {
            data,
            config,
            contact,
            panels,
            dock: DockState::default(),
            dock_items,
            carousel: CarouselState::default(),
            notes_view: NotesView::default(),
            explorer_view: ExplorerView::default(),
            icons,
        }
    }

    fn open_explorer(&mut self) {
        self.explorer_view = ExplorerView::default();
        self.panels
            .open_window(WindowSpec::FileExplorer(ExplorerContent::from_portfolio(&self.data)));
    }

    fn open_notes(&mut self, notes: NotesContent) {
        self.notes_view = NotesView::default();
        self.panels.open_window(WindowSpec::Notes(notes));
    }

    fn show_videos(&mut self, tab: VideoTab) {
        self.panels.select_section(SectionKind::Work);
        self.panels.expand_card(ids::VIDEOS_FOLDER);
        self.carousel = CarouselState::new(tab);
    }

    fn handle_dock(&mut self, command: DockCommand) -> Option<Effect> {
        match command {
            DockCommand::OpenFileExplorer => self.open_explorer(),
            DockCommand::SelectSection(section) => self.panels.select_section(section),
            DockCommand::ShowVideos(tab) => self.show_videos(tab),
            DockCommand::DownloadResume => return Some(Effect::DownloadResume),
            DockCommand::CopyText { text, message } => {
                return Some(Effect::CopyText { text, message })
            }
            DockCommand::OpenUrl(url) => return Some(Effect::OpenUrl(url)),
            DockCommand::Trash => log::info!("Trash is empty"),
        }
        None
    }

    fn handle_menu(&mut self, action: MenuAction) -> Option<Effect> {
        match action {
            MenuAction::None => None,
            MenuAction::CopyText(text) => Some(Effect::CopyText {
                message: format!("Copied {} to clipboard", text),
                text,
            }),
            MenuAction::OpenUrl(url) => Some(Effect::OpenUrl(url)),
            MenuAction::DownloadResume => Some(Effect::DownloadResume),
            MenuAction::OpenFileExplorer => {
                self.open_explorer();
                None
            }
        }
    }

    fn handle_panel(&mut self, action: PanelAction) -> Option<Effect> {
        match action {
            PanelAction::Expand(card_id) => {
                if card_id == ids::VIDEOS_FOLDER && !self.panels.is_expanded(card_id) {
                    self.carousel = CarouselState::default();
                }
                self.panels.expand_card(card_id);
            }
            PanelAction::Collapse(card_id) => self.panels.collapse_card(card_id),
            PanelAction::SelectSection(section) => self.panels.select_section(section),
            PanelAction::DownloadResume => return Some(Effect::DownloadResume),
        }
        None
    }

    fn handle_canvas(&mut self, action: CanvasAction) -> Option<Effect> {
        match action {
            CanvasAction::None => None,
            CanvasAction::Panel(action) => self.handle_panel(action),
            CanvasAction::OpenUrl(url) => Some(Effect::OpenUrl(url)),
            CanvasAction::OpenNotes(notes) => {
                self.open_notes(notes);
                None
            }
        }
    }

    fn handle_sidebar(&mut self, action: SidebarAction) -> Option<Effect> {
        match action {
            SidebarAction::None => None,
            SidebarAction::SelectSection(section) => {
                self.panels.select_section(section);
                None
            }
            SidebarAction::OpenUrl(url) => Some(Effect::OpenUrl(url)),
        }
    }

    fn handle_notes(&mut self, action: NotesAction) -> Option<Effect> {
        match action {
            NotesAction::None => None,
            NotesAction::Close => {
                self.panels.close_window();
                None
            }
            NotesAction::OpenUrl(url) => Some(Effect::OpenUrl(url)),
        }
    }

    fn handle_explorer(&mut self, action: ExplorerAction) -> Option<Effect> {
        match action {
            ExplorerAction::None => None,
            ExplorerAction::Close => {
                self.panels.close_window();
                None
            }
            ExplorerAction::OpenNotes(notes) => {
                self.open_notes(notes);
                None
            }
            ExplorerAction::OpenUrl(url) => Some(Effect::OpenUrl(url)),
        }
    }

    fn perform(&self, ctx: &egui::Context, effect: Effect) {
        match effect {
            Effect::OpenUrl(url) => outbound::open_url(ctx, &url),
            Effect::CopyText { text, message } => {
                outbound::copy_text(ctx, &text);
                log::info!("{}", message);
            }
            Effect::DownloadResume => {
                outbound::download_resume(&self.config.resume_path, &self.config.resume_file_name)
            }
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Keep the menu bar clock ticking
        ctx.request_repaint_after(Duration::from_secs(1));

        let mut effects = Vec::new();

        let now = chrono::Local::now().naive_local();
        let menu_action = egui::TopBottomPanel::top("menu_bar")
            .show(ctx, |ui| menu_bar::show(ui, &self.contact, &now))
            .inner;
        effects.extend(self.handle_menu(menu_action));

        let dock_command = egui::TopBottomPanel::bottom("dock")
            .resizable(false)
            .show(ctx, |ui| dock::show(ui, &self.dock_items, &mut self.dock, &mut self.icons))
            .inner;
        if let Some(command) = dock_command {
            effects.extend(self.handle_dock(command));
        }

        let section = self.panels.selected_section();
        let sidebar_action = egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(280.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .show(ui, |ui| sidebar::show(ui, &self.data, section))
                    .inner
            })
            .inner;
        effects.extend(self.handle_sidebar(sidebar_action));

        let canvas_action = {
            let section = self.panels.selected_section();
            let panels = layout::layout(section, self.panels.expanded_cards(), &self.data);
            egui::CentralPanel::default()
                .show(ctx, |ui| {
                    canvas::show(ui, section, &panels, &mut self.carousel, &mut self.icons)
                })
                .inner
        };
        effects.extend(self.handle_canvas(canvas_action));

        match self.panels.open_window_spec() {
            Some(WindowSpec::Notes(content)) => {
                let action = notes::show(ctx, content, &mut self.notes_view);
                effects.extend(self.handle_notes(action));
            }
            Some(WindowSpec::FileExplorer(content)) => {
                let action = explorer::show(ctx, content, &mut self.explorer_view, &mut self.icons);
                effects.extend(self.handle_explorer(action));
            }
            None => {}
        }

        for effect in effects {
            self.perform(ctx, effect);
        }
    }
}
