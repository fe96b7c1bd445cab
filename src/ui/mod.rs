// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the portfolio desktop.

pub mod canvas;
pub mod carousel;
pub mod dock;
pub mod explorer;
pub mod menu_bar;
pub mod notes;
pub mod sidebar;
