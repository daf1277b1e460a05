use clap::Parser;
use std::path::PathBuf;
use stylish_report::output::ColorChoice;

#[derive(Parser, Debug)]
#[command(
    name = "stylish-report",
    version,
    about = "Render lint results as a column-aligned console report"
)]
pub struct Cli {
    /// JSON file with lint results (reads stdin when omitted or `-`)
    pub input: Option<PathBuf>,

    /// When to color the summary line (overrides the config file)
    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,

    /// Write output to file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Treat warnings as errors for the exit code
    #[arg(long)]
    pub strict: bool,

    /// Custom config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,
}
