//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "food-diary")]
#[command(about = "Track foods, how they made you feel and what they gave you", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Diary directory (default: FOOD_DIARY_HOME or the platform data dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a new entry
    Add {
        /// What did you eat?
        food: String,

        /// How it made you feel (e.g. good, neutral, bad)
        #[arg(short, long)]
        feeling: Option<String>,

        /// A reaction it gave you; repeat for several
        #[arg(short, long = "reaction", value_name = "REACTION")]
        reactions: Vec<String>,
    },

    /// Change an existing entry
    Edit {
        /// Entry id or unique prefix
        id: String,

        /// New food text
        #[arg(long)]
        food: Option<String>,

        /// New feeling
        #[arg(short, long)]
        feeling: Option<String>,

        /// Replace the reactions; repeat for several
        #[arg(short, long = "reaction", value_name = "REACTION")]
        reactions: Vec<String>,

        /// Clear all reactions
        #[arg(long, conflicts_with = "reactions")]
        no_reactions: bool,
    },

    /// Delete an entry
    Remove {
        /// Entry id or unique prefix
        id: String,
    },

    /// List entries, newest first
    List {
        /// Show at most this many entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Print one entry as JSON
    Show {
        /// Entry id or unique prefix
        id: String,
    },

    /// List the selectable feelings
    Feelings,

    /// List the selectable reactions
    Reactions,
}
