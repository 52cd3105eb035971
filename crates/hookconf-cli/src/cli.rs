//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// hookconf - Read typed values from git-hook configuration domains
#[derive(Parser, Debug)]
#[command(name = "hookconf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the `<name>.conf` files
    ///
    /// Defaults to the platform configuration directory (for example
    /// ~/.config/hookconf on Linux).
    #[arg(short, long, global = true, env = "HOOKCONF_ROOT")]
    pub root: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// How `get` should interpret the raw value
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueKind {
    /// The raw string, verbatim
    #[default]
    #[value(name = "string")]
    Text,
    /// Integer for all-digit values, float for other numbers
    Numeric,
    /// Comma separated list, one item per output line
    Array,
    /// true only for "true" or "1"
    Bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print one value from a configuration file
    ///
    /// Examples:
    ///   hookconf get githooksystem freeze repo_names --as array
    ///   hookconf get deploy limits retries --as numeric --default 3
    Get {
        /// Configuration name (file name without .conf)
        name: String,

        /// Section in the file
        section: String,

        /// Key in the section
        key: String,

        /// Value type to coerce to
        #[arg(long = "as", value_enum, default_value_t = ValueKind::Text)]
        kind: ValueKind,

        /// Value to use when the key is missing
        #[arg(short, long)]
        default: Option<String>,

        /// Print nothing instead of failing when the key is missing
        #[arg(long)]
        optional: bool,
    },

    /// List every section.key = value in a configuration file
    Sections {
        /// Configuration name (file name without .conf)
        name: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the expected file layout of bundled domains
    Readme {
        /// Domain to show; all domains when omitted
        domain: Option<String>,
    },

    /// Print the effective user name
    Whoami,

    /// Prompt for a secret, or print it if already known
    Secret {
        /// Configuration name (file name without .conf)
        name: String,

        /// Section to cache the secret under
        section: String,

        /// Key to cache the secret under
        key: String,

        /// Prompt text; defaults to "<section>.<key>"
        #[arg(short, long)]
        prompt: Option<String>,
    },
}
