//! CLI definitions using clap.

use clap::{Args, Parser, Subcommand};
use rigsmith::display::OutputFormat;
use rigsmith::{Recipe, Step};

/// rigsmith - assemble computer configurations with the Builder pattern
#[derive(Parser)]
#[command(name = "rigsmith")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of the default locations
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Output format for built configurations
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build every built-in preset and a manual configuration (default)
    Showcase,

    /// Build a single preset
    Build(BuildArgs),

    /// List available presets
    List,

    /// Write the default config to the user config directory
    InitConfig,
}

#[derive(Args)]
pub struct BuildArgs {
    /// Preset name (gaming, office, budget-gaming or one from the config)
    pub preset: String,

    /// Construction recipe the director runs
    #[arg(short, long, value_enum, default_value_t = Recipe::Full, conflicts_with = "steps")]
    pub recipe: Recipe,

    /// Run these steps by hand, in order, instead of a recipe
    #[arg(short, long, value_enum, value_delimiter = ',', num_args = 1..)]
    pub steps: Option<Vec<Step>>,
}
