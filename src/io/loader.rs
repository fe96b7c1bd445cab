// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio document loading.
//!
//! This module reads the portfolio document in JSON or YAML format and
//! runs it through validation before the UI sees it.

use crate::models::portfolio::PortfolioData;
use crate::models::validation::{self, ValidationIssue};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;

/// Parse portfolio data from JSON text.
pub fn from_json_str(json: &str) -> Result<(PortfolioData, Vec<ValidationIssue>)> {
    let document: Value = serde_json::from_str(json)?;
    decode(document)
}

/// Parse portfolio data from YAML text.
pub fn from_yaml_str(yaml: &str) -> Result<(PortfolioData, Vec<ValidationIssue>)> {
    let document: Value = serde_yaml::from_str(yaml)?;
    decode(document)
}

/// Build the document from a parsed tree. Projects and videos are decoded
/// one entry at a time so a malformed entry is dropped on its own.
fn decode(mut document: Value) -> Result<(PortfolioData, Vec<ValidationIssue>)> {
    if !document.is_object() {
        anyhow::bail!("Portfolio document must be a mapping at the top level");
    }

    let mut issues = Vec::new();
    let projects = take_array(&mut document, "/sections/work/projects");
    let full_length = take_array(&mut document, "/videos/fullLength");
    let shorts = take_array(&mut document, "/videos/shorts");

    let mut data: PortfolioData = serde_json::from_value(document)?;
    data.sections.work.projects = entries(projects, "projects", &mut issues);
    data.videos.full_length = entries(full_length, "videos.fullLength", &mut issues);
    data.videos.shorts = entries(shorts, "videos.shorts", &mut issues);
    Ok((data, issues))
}

/// Remove the array at `pointer`, leaving null behind. Anything that is
/// not an array counts as empty.
fn take_array(document: &mut Value, pointer: &str) -> Vec<Value> {
    match document.pointer_mut(pointer).map(Value::take) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

fn entries<T: DeserializeOwned>(
    items: Vec<Value>,
    collection: &'static str,
    issues: &mut Vec<ValidationIssue>,
) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(entry) => Some(entry),
            Err(e) => {
                issues.push(ValidationIssue::MalformedEntry {
                    collection,
                    index,
                    reason: e.to_string(),
                });
                None
            }
        })
        .collect()
}

/// Import portfolio data, dispatching on the file extension.
pub fn import(path: &Path) -> Result<(PortfolioData, Vec<ValidationIssue>)> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let extension = path.extension().and_then(|s| s.to_str());
    let parsed = match extension {
        Some("json") => from_json_str(&text),
        Some("yaml") | Some("yml") => from_yaml_str(&text),
        _ => anyhow::bail!("Unsupported file extension: {:?}", extension),
    };
    parsed.with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load and sanitise the document. Any failure leaves an empty portfolio
/// so the desktop still comes up.
pub fn load_portfolio(path: &Path) -> PortfolioData {
    let (data, mut issues) = match import(path) {
        Ok(decoded) => decoded,
        Err(e) => {
            log::error!("Failed to load portfolio: {:#}", e);
            return PortfolioData::default();
        }
    };

    let (data, found) = validation::sanitize(data);
    issues.extend(found);
    for issue in &issues {
        log::warn!("Portfolio data: {}", issue);
    }
    log::info!(
        "Loaded portfolio from {}: {} projects, {} videos, {} issues",
        path.display(),
        data.sections.work.projects.len(),
        data.videos.len(),
        issues.len()
    );
    data
}
