// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Outbound side effects.
//!
//! Deep-link builders are pure. The effect functions are fire-and-forget:
//! failures are logged and never reach the rest of the UI.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub fn mailto_link(email: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        email,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

/// wa.me link; the number keeps digits only.
pub fn whatsapp_link(number: &str, message: &str) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("https://wa.me/{}?text={}", digits, urlencoding::encode(message))
}

/// Open a URL in a new browser tab.
pub fn open_url(ctx: &egui::Context, url: &str) {
    log::info!("Opening {}", url);
    ctx.open_url(egui::OpenUrl::new_tab(url));
}

pub fn copy_text(ctx: &egui::Context, text: &str) {
    ctx.output_mut(|output| output.copied_text = text.to_string());
}

/// Copy the resume to a location chosen in a native save dialog.
///
/// Returns `Ok(None)` when the dialog is cancelled.
pub fn save_resume(source: &Path, file_name: &str) -> Result<Option<PathBuf>> {
    if !source.exists() {
        anyhow::bail!("Resume not found: {}", source.display());
    }
    let Some(target) = rfd::FileDialog::new()
        .add_filter("PDF", &["pdf"])
        .set_file_name(file_name)
        .save_file()
    else {
        return Ok(None);
    };
    copy_resume(source, &target)?;
    Ok(Some(target))
}

fn copy_resume(source: &Path, target: &Path) -> Result<()> {
    std::fs::copy(source, target).with_context(|| {
        format!("Failed to copy {} to {}", source.display(), target.display())
    })?;
    Ok(())
}

/// Fire-and-forget wrapper around [`save_resume`].
pub fn download_resume(source: &Path, file_name: &str) {
    match save_resume(source, file_name) {
        Ok(Some(path)) => log::info!("Saved resume to {}", path.display()),
        Ok(None) => log::debug!("Resume download cancelled"),
        Err(e) => log::error!("Resume download failed: {:#}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_link() {
        assert_eq!(
            mailto_link("me@site.dev", "Portfolio Inquiry", "Hi there"),
            "mailto:me@site.dev?subject=Portfolio%20Inquiry&body=Hi%20there"
        );
        assert_eq!(
            mailto_link("me@site.dev", "Q&A?", "café, 5 = 5"),
            "mailto:me@site.dev?subject=Q%26A%3F&body=caf%C3%A9%2C%205%20%3D%205"
        );
    }

    #[test]
    fn test_whatsapp_link_strips_formatting() {
        assert_eq!(
            whatsapp_link("+91 98765-43210", "Hi!"),
            "https://wa.me/919876543210?text=Hi%21"
        );
    }

    #[test]
    fn test_missing_resume_is_an_error() {
        let missing = std::env::temp_dir().join("folio-desktop-no-such-resume.pdf");
        assert!(save_resume(&missing, "Resume.pdf").is_err());
    }

    #[test]
    fn test_copy_resume() {
        let dir = std::env::temp_dir().join("folio-desktop-resume-test");
        std::fs::create_dir_all(&dir).unwrap();
        let source = dir.join("resume.pdf");
        std::fs::write(&source, b"%PDF-1.4").unwrap();
        let target = dir.join("copy.pdf");

        copy_resume(&source, &target).unwrap();
        assert_eq!(std::fs::read(&target).unwrap(), b"%PDF-1.4");
    }
}
