//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config) are inherited by all subcommands
//! - Running without a subcommand starts the interactive session

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// qcompass - convert between QCAD angles and compass bearings
#[derive(Parser, Debug)]
#[command(name = "qcompass")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'qcompass' without arguments for an interactive session.")]
pub struct Cli {
    /// Output JSON lines instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to <config dir>/qcompass/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a QCAD angle (0° = East, counterclockwise) to a compass bearing
    ToCompass {
        /// QCAD angle in degrees
        #[arg(allow_hyphen_values = true, value_name = "QCAD")]
        angle: String,
    },

    /// Convert a compass bearing (0° = North, clockwise) to a QCAD angle
    ToQcad {
        /// Compass bearing in degrees
        #[arg(allow_hyphen_values = true, value_name = "COMPASS")]
        angle: String,
    },

    /// Show landmark angles and conversion formulas
    #[command(alias = "ref")]
    Reference,

    /// Edit the QCAD and compass fields line by line
    Interactive,

    /// Show version information
    Version,
}
