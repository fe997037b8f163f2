use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::convert::Category;

#[derive(Parser, Debug)]
#[command(name = "unitwise")]
#[command(version)]
#[command(about = "Unit converter with a built-in AI assistant", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a value between two units of a category
    Convert {
        /// Measurement category
        #[arg(value_enum)]
        category: Category,

        /// Value to convert
        value: f64,

        /// Source unit name (e.g. "Meter")
        from: String,

        /// Target unit name (e.g. "Foot")
        to: String,
    },

    /// List unit names for one category, or all of them
    Units {
        /// Measurement category (omit to list every category)
        #[arg(value_enum)]
        category: Option<Category>,
    },

    /// Ask the AI assistant a free-text question
    Ask {
        /// The question
        prompt: String,
    },

    /// Initialize configuration
    Init,
}
