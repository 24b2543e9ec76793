use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::report::ReportKind;

/// Root configuration structure, deserialized from `license-report.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Report output settings.
    #[serde(default)]
    pub report: ReportConfig,
    /// Coordinate filtering.
    #[serde(default)]
    pub filter: FilterConfig,
}

#[derive(Debug, Deserialize)]
pub struct ReportConfig {
    /// Report formats to generate. All four by default.
    #[serde(default = "default_formats")]
    pub formats: Vec<FormatName>,
    /// Show resolved versions in HTML library names.
    #[serde(default)]
    pub show_versions: bool,
    /// Year token for HTML copyright lines when a POM has no inception year.
    #[serde(default = "default_copyright_year")]
    pub copyright_year_fallback: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            formats: default_formats(),
            show_versions: false,
            copyright_year_fallback: default_copyright_year(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct FilterConfig {
    /// Coordinates containing any of these substrings are excluded.
    #[serde(default)]
    pub ignored_patterns: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatName {
    Csv,
    Json,
    Html,
    Text,
}

impl From<&FormatName> for ReportKind {
    fn from(name: &FormatName) -> Self {
        match name {
            FormatName::Csv => ReportKind::Csv,
            FormatName::Json => ReportKind::Json,
            FormatName::Html => ReportKind::Html,
            FormatName::Text => ReportKind::Text,
        }
    }
}

fn default_formats() -> Vec<FormatName> {
    vec![
        FormatName::Csv,
        FormatName::Json,
        FormatName::Html,
        FormatName::Text,
    ]
}

fn default_copyright_year() -> String {
    "20xx".to_string()
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `./license-report.toml`
/// 3. `~/.config/pom-license-report/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        return toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()));
    }

    let project_config = Path::new("license-report.toml");
    if project_config.exists() {
        let content = std::fs::read_to_string(project_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("pom-license-report")
            .join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}
