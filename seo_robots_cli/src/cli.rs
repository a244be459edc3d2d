//! Argument definitions for the `robots` binary

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Parse, validate and render SEO robots directives.
#[derive(Parser, Debug)]
#[command(name = "robots")]
#[command(version)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Runtime preferences file (TOML).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short = 'v', long = "verbose", global = true)]
    pub is_verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render meta robots and X-Robots-Tag values.
    Build {
        #[command(flatten)]
        input: DirectiveInput,

        /// Which value to print.
        #[arg(long, value_enum, default_value_t = Target::Both)]
        target: Target,

        /// Print the full result as JSON.
        #[arg(long = "json")]
        is_json: bool,
    },

    /// Validate directives; exits with status 1 when issues are found.
    Validate {
        #[command(flatten)]
        input: DirectiveInput,
    },

    /// Show the directives a legacy numeric robots code stands for.
    Legacy {
        /// Legacy code (1-8; anything else means index, follow).
        #[arg(allow_negative_numbers = true)]
        code: i64,
    },

    /// Migrate a stored settings document from legacy codes to directive arrays.
    Migrate {
        /// Settings document (JSON object).
        file: PathBuf,

        /// Write the migrated document here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the directive catalog used by administrative UIs.
    Catalog,
}

/// Directives given inline as flat tokens or read from a JSON file
#[derive(Args, Debug, Clone)]
pub struct DirectiveInput {
    /// Flat directive tokens, e.g. `noindex googlebot:nofollow max-snippet:50`.
    pub tokens: Vec<String>,

    /// JSON array of tokens or `{value, bot, modification}` records.
    #[arg(short, long, conflicts_with = "tokens")]
    pub file: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Meta,
    XRobots,
    Both,
}
