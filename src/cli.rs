use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::intake::MoisturizerTexture;
use crate::io::OutputFormat;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TextureArg {
    /// Cream moisturizer unless the skin is oily
    Normal,
    /// Always use a lightweight gel moisturizer
    Lightweight,
}

impl From<TextureArg> for MoisturizerTexture {
    fn from(arg: TextureArg) -> Self {
        match arg {
            TextureArg::Normal => MoisturizerTexture::Normal,
            TextureArg::Lightweight => MoisturizerTexture::Lightweight,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "skinplan")]
#[command(about = "Deterministic skincare routine planner", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a treatment plan from an intake JSON file
    Plan {
        /// Intake file: {"answers": {...}, "metrics": [...], "preferences": {...}}
        intake: PathBuf,

        /// Override the maximum number of morning serums
        #[arg(long)]
        max_serums: Option<usize>,

        /// Override the moisturizer texture preference
        #[arg(long, value_enum)]
        texture: Option<TextureArg>,

        /// Analysis time (RFC 3339); defaults to now
        #[arg(long)]
        timestamp: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (otherwise .skinplan.toml is searched for)
        #[arg(short, long, env = "SKINPLAN_CONFIG")]
        config: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Compare two assessment sessions
    Compare {
        /// Snapshot JSON of one session
        previous: PathBuf,

        /// Snapshot JSON of the other session
        latest: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Write a default .skinplan.toml to the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
