//! Report renderers for the normalized project list.
//!
//! - [`csv`] — one row per project, spreadsheet-friendly escaping.
//! - [`json`] — array of objects with fixed key order and null-for-empty.
//! - [`html`] — projects grouped by shared license set, with license bodies.
//! - [`text`] — plain-text notice file.
//! - [`terminal`] — colored console summary; not one of the file reports.
//!
//! Each file renderer is a pure function of the finished
//! [`ResolvedProject`](crate::models::ResolvedProject) list; no renderer
//! performs I/O or holds state.

pub mod csv;
pub mod html;
pub mod json;
pub mod terminal;
pub mod text;

use anyhow::Result;

use crate::models::ResolvedProject;

/// Options that shape report output without changing its data.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Append resolved versions to library names in the HTML report.
    pub show_versions: bool,
    /// Year token used in HTML copyright lines when a POM has no
    /// inception year.
    pub copyright_year_fallback: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_versions: false,
            copyright_year_fallback: "20xx".to_string(),
        }
    }
}

/// The four file report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Csv,
    Json,
    Html,
    Text,
}

impl ReportKind {
    /// Display label used in log lines.
    pub fn name(self) -> &'static str {
        match self {
            ReportKind::Csv => "CSV",
            ReportKind::Json => "JSON",
            ReportKind::Html => "HTML",
            ReportKind::Text => "Text",
        }
    }

    /// Output file suffix.
    pub fn extension(self) -> &'static str {
        match self {
            ReportKind::Csv => "csv",
            ReportKind::Json => "json",
            ReportKind::Html => "html",
            ReportKind::Text => "txt",
        }
    }

    pub fn render(self, projects: &[ResolvedProject], options: &RenderOptions) -> Result<String> {
        match self {
            ReportKind::Csv => Ok(csv::render(projects)),
            ReportKind::Json => json::render(projects),
            ReportKind::Html => Ok(html::render(projects, options)),
            ReportKind::Text => Ok(text::render(projects)),
        }
    }
}
