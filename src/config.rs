// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application configuration.
//!
//! Settings come from an optional YAML or JSON file. Every field has a
//! default so an empty or partial file is valid.

use crate::models::portfolio::{Profile, SectionKind};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the config file when no argument is given.
pub const CONFIG_ENV: &str = "FOLIO_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Portfolio document (JSON or YAML).
    pub data_path: PathBuf,
    /// Resume file offered by the download actions.
    pub resume_path: PathBuf,
    /// Suggested file name in the save dialog.
    pub resume_file_name: String,
    /// Directory holding the icon PNGs.
    pub icon_dir: PathBuf,
    pub window_width: f32,
    pub window_height: f32,
    pub initial_section: SectionKind,
    pub contact: ContactConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("portfolio.json"),
            resume_path: PathBuf::from("resume.pdf"),
            resume_file_name: "Resume.pdf".to_string(),
            icon_dir: PathBuf::from("mac-icons"),
            window_width: 1280.0,
            window_height: 800.0,
            initial_section: SectionKind::Work,
            contact: ContactConfig::default(),
        }
    }
}

/// Contact details used by the dock and the menu bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub phone: String,
    pub email: String,
    pub mail_subject: String,
    pub mail_body: String,
    pub whatsapp: String,
    pub whatsapp_message: String,
    pub calendar_url: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone: "+1-555-0100".to_string(),
            email: "hello@example.com".to_string(),
            mail_subject: "Portfolio Inquiry".to_string(),
            mail_body: "Hi, I found your portfolio and would like to discuss opportunities!"
                .to_string(),
            whatsapp: "+15550100".to_string(),
            whatsapp_message: "Hi! I found your portfolio and would like to connect.".to_string(),
            calendar_url: "https://calendly.com/".to_string(),
        }
    }
}

impl ContactConfig {
    /// Contact fields present in the profile take precedence.
    pub fn merged_with(&self, profile: &Profile) -> ContactConfig {
        let pick = |from_profile: &Option<String>, fallback: &String| {
            from_profile
                .as_deref()
                .filter(|value| !value.trim().is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| fallback.clone())
        };

        ContactConfig {
            phone: pick(&profile.phone, &self.phone),
            email: pick(&profile.email, &self.email),
            whatsapp: pick(&profile.whatsapp, &self.whatsapp),
            calendar_url: pick(&profile.calendar, &self.calendar_url),
            ..self.clone()
        }
    }
}

impl AppConfig {
    /// Load configuration, dispatching on the file extension.
    pub fn load(path: &Path) -> Result<AppConfig> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let extension = path.extension().and_then(|s| s.to_str());
        let config = match extension {
            Some("json") => serde_json::from_str(&text)?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&text)?,
            _ => anyhow::bail!("Unsupported config extension: {:?}", extension),
        };
        Ok(config)
    }

    /// Config file named by the first argument, then by [`CONFIG_ENV`].
    pub fn locate(args: impl IntoIterator<Item = String>) -> Option<PathBuf> {
        args.into_iter()
            .nth(1)
            .or_else(|| std::env::var(CONFIG_ENV).ok())
            .map(PathBuf::from)
    }

    /// Load the located config, falling back to defaults on any failure.
    pub fn load_or_default(path: Option<&Path>) -> AppConfig {
        match path {
            Some(path) => match AppConfig::load(path) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::error!("Failed to load config: {:#}; using defaults", e);
                    AppConfig::default()
                }
            },
            None => {
                log::info!("No config file given; using defaults");
                AppConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "data_path: data/me.json\ninitial_section: resume\ncontact:\n  email: me@site.dev\n";
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.data_path, PathBuf::from("data/me.json"));
        assert_eq!(config.initial_section, SectionKind::Resume);
        assert_eq!(config.contact.email, "me@site.dev");
        assert_eq!(config.contact.phone, ContactConfig::default().phone);
        assert_eq!(config.window_width, 1280.0);
    }

    #[test]
    fn test_load_by_extension() {
        let dir = std::env::temp_dir().join("folio-desktop-config-test");
        std::fs::create_dir_all(&dir).unwrap();

        let json_path = dir.join("config.json");
        std::fs::write(&json_path, r#"{ "resume_file_name": "Me.pdf" }"#).unwrap();
        assert_eq!(AppConfig::load(&json_path).unwrap().resume_file_name, "Me.pdf");

        let toml_path = dir.join("config.toml");
        std::fs::write(&toml_path, "x = 1").unwrap();
        assert!(AppConfig::load(&toml_path).is_err());

        assert!(AppConfig::load(&dir.join("missing.yaml")).is_err());
        assert_eq!(AppConfig::load_or_default(Some(&toml_path)), AppConfig::default());
    }

    #[test]
    fn test_locate_prefers_argument() {
        let args = vec!["folio-desktop".to_string(), "my.yaml".to_string()];
        assert_eq!(AppConfig::locate(args), Some(PathBuf::from("my.yaml")));
    }

    #[test]
    fn test_profile_contact_overrides() {
        let profile = Profile {
            email: Some("owner@site.dev".to_string()),
            phone: Some("  ".to_string()),
            ..Default::default()
        };
        let merged = ContactConfig::default().merged_with(&profile);
        assert_eq!(merged.email, "owner@site.dev");
        assert_eq!(merged.phone, ContactConfig::default().phone);
    }
}
