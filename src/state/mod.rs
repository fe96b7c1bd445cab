// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Shared UI state, kept apart from rendering.

pub mod dock;
pub mod panel;
pub mod window;
