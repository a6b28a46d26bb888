use clap::{Parser, Subcommand, ValueEnum};
use diffly::export::ExportFormat;
use diffly::ViewMode;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(name = "diffly")]
#[clap(version, about = "Compare two texts word by word and line by line", long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// More output on stderr (-v info, -vv debug)
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Diff two files (`-` reads one of them from stdin)
    Compare {
        original: PathBuf,
        modified: PathBuf,
        #[clap(short, long, value_enum)]
        mode: Option<Mode>,
        #[clap(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Save the rendered diff into this directory instead of printing it
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the query string that reopens this comparison
    Share {
        original: PathBuf,
        modified: PathBuf,
        #[clap(short, long, value_enum)]
        mode: Option<Mode>,
    },
    /// Diff the two texts packed into a shared query string
    Open {
        query: String,
        #[clap(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Inline,
    Split,
}

impl From<Mode> for ViewMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Inline => ViewMode::Inline,
            Mode::Split => ViewMode::Split,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Html,
    Json,
}

impl Format {
    /// The file format for saving, `None` for JSON which is only printed.
    pub fn export_format(self) -> Option<ExportFormat> {
        match self {
            Format::Text => Some(ExportFormat::Text),
            Format::Html => Some(ExportFormat::Html),
            Format::Json => None,
        }
    }
}
