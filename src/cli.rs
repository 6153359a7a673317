use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Tomato Steward: how long, and how hot, to stew your tomatoes.
#[derive(Parser, Debug)]
#[command(name = "tomato_steward")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Settings file for remembered inputs and units (overrides config).
    #[arg(short, long, global = true)]
    pub store: Option<PathBuf>,

    /// JSON file of flag values (overrides config).
    #[arg(long, global = true)]
    pub flags: Option<PathBuf>,

    /// Configuration file (TOML).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute a stew plan. Prompts when no inputs are given.
    Plan {
        /// Tomato weight in ounces (4 to 128).
        #[arg(short, long)]
        weight: Option<String>,

        /// Varietal, e.g. roma or "San Marzano".
        #[arg(short, long)]
        varietal: Option<String>,

        /// Style, e.g. crushed or whole-peeled.
        #[arg(short = 't', long)]
        style: Option<String>,

        /// Print the plan as JSON.
        #[arg(long)]
        json: bool,

        /// Show temperatures in Celsius for this run.
        #[arg(long, conflicts_with = "fahrenheit")]
        celsius: bool,

        /// Show temperatures in Fahrenheit for this run.
        #[arg(long)]
        fahrenheit: bool,
    },

    /// Show or change the preferred temperature units.
    Units {
        #[arg(value_enum)]
        action: Option<UnitsAction>,
    },

    /// Show the effective flag values.
    Flags,

    /// Forget remembered state.
    Reset {
        /// Forget the last inputs.
        #[arg(long)]
        inputs: bool,

        /// Forget the units preference.
        #[arg(long)]
        units: bool,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitsAction {
    /// Celsius
    C,
    /// Fahrenheit
    F,
    /// Switch to the other unit
    Toggle,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            weight: None,
            varietal: None,
            style: None,
            json: false,
            celsius: false,
            fahrenheit: false,
        }
    }
}
