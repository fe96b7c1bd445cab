// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data models for the portfolio document.

pub mod portfolio;
pub mod validation;
