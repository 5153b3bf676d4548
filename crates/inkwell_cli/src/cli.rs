//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inkwell blog content browser
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// JSON article file to use instead of the built-in articles
    /// (overrides INKWELL_CONTENT_PATH)
    #[arg(short, long, global = true)]
    pub content: Option<PathBuf>,

    /// Article shown when `show` receives an unknown id
    #[arg(long = "fallback-id", global = true)]
    pub fallback_id: Option<String>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List every article in store order
    List,

    /// Render one article; unknown ids render the fallback article
    Show {
        /// Article id
        id: String,

        /// Number of related articles listed after the body
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print the sample comment thread
        #[arg(long)]
        comments: bool,

        /// Post a guest comment to the (session-only) thread before printing it
        #[arg(long, requires = "comments")]
        comment: Option<String>,
    },

    /// List articles matching a category or tag ("All" lists everything)
    Filter {
        /// Category or tag, case-sensitive
        selector: String,
    },

    /// List related articles for an id
    Related {
        /// Article id to exclude
        id: String,

        /// Maximum number of articles
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show listing selectors and how many articles each one yields
    Selectors {
        /// List every category and tag found in the store instead
        #[arg(long)]
        all: bool,
    },

    /// Print the article store as JSON
    Export,
}
