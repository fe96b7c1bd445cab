// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O: document loading, images and outbound links.

pub mod loader;
pub mod media;
pub mod outbound;
