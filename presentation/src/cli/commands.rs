//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for `render`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored seat grids
    #[default]
    Text,
    /// Chamber layouts as JSON
    Json,
}

/// CLI arguments for legislation
#[derive(Parser, Debug)]
#[command(name = "legislation")]
#[command(author, version, about = "Seat-grid visualizer for legislative chambers")]
#[command(long_about = r#"
Legislation draws every chamber of a legislature as a grid of seats, one
dot per member, colored by party. The seat that completes a majority is
highlighted.

Configuration files are loaded from (in priority order):
1. LEGISLATION_* environment variables
2. --config <path>        Explicit config file
3. ./legislation.toml     Project-level config
4. ~/.config/legislation/config.toml   Global config

Example:
  legislation                      # interactive editor
  legislation render --no-color
  legislation shape 435
  legislation countries --refresh --write data/countries.json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Subcommand to run; the interactive editor when none is given
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Tui)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive editor and visualizer (default)
    Tui,

    /// Print the chamber grids and exit
    Render {
        /// Country to show in the heading
        #[arg(long)]
        country: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Print the grid shape chosen for a seat total
    Shape {
        /// Total number of seats
        #[arg(allow_negative_numbers = true)]
        total: i64,
    },

    /// List selectable countries
    Countries {
        /// Fetch the list from the REST Countries service
        #[arg(long)]
        refresh: bool,

        /// Write the list as JSON to this file
        #[arg(long, value_name = "PATH")]
        write: Option<PathBuf>,
    },
}
