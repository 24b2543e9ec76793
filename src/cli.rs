use std::path::PathBuf;

use clap::Parser;

use crate::report::ReportKind;

#[derive(Parser, Debug)]
#[command(
    name = "pom-license-report",
    about = "Generate open source license reports from Maven POM metadata",
    version
)]
pub struct Cli {
    /// Input manifest listing root coordinates and their POM files
    pub manifest: PathBuf,

    /// Output directory for generated reports
    #[arg(long, default_value = "licenses", value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Base file name for generated reports
    #[arg(long, default_value = "open_source_licenses", value_name = "NAME")]
    pub name: String,

    /// Report format to generate (repeatable) [default: all formats]
    #[arg(long = "report", value_name = "FORMAT")]
    pub report: Vec<FormatArg>,

    /// Exclude coordinates containing this substring (repeatable)
    #[arg(long = "ignore", value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Show resolved versions in HTML library names
    #[arg(long)]
    pub show_versions: bool,

    /// Download missing parent POMs from a Maven repository before resolving
    #[arg(long)]
    pub fetch_parents: bool,

    /// Directory for downloaded parent POMs [default: <output-dir>/poms]
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Maven repository queried by --fetch-parents
    #[arg(
        long,
        default_value = "https://repo1.maven.org/maven2",
        value_name = "URL"
    )]
    pub repository: String,

    /// Config file [default: ./license-report.toml, fallback ~/.config/pom-license-report/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the per-project table after writing reports
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print the summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FormatArg {
    Csv,
    Json,
    Html,
    Text,
}

impl From<&FormatArg> for ReportKind {
    fn from(arg: &FormatArg) -> Self {
        match arg {
            FormatArg::Csv => ReportKind::Csv,
            FormatArg::Json => ReportKind::Json,
            FormatArg::Html => ReportKind::Html,
            FormatArg::Text => ReportKind::Text,
        }
    }
}
