//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use blogspot_core::{PostId, SortKey};

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Top-level CLI parser for the `blogspot` binary.
#[derive(Debug, Parser)]
#[command(name = "blogspot", version, about = "Blog Spot - manage blog posts from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: table, json
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Data file holding the stored posts (overrides BLOGSPOT_DATA_FILE)
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Quiet mode (only errors are logged)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List posts with search, sort and pagination
    List(ListArgs),

    /// Show one post in full
    Show { id: PostId },

    /// Create a post
    Add(AddArgs),

    /// Change an existing post; omitted fields keep their value
    Edit(EditArgs),

    /// Delete a post
    Delete {
        id: PostId,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Throw away all changes and restore the built-in posts
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive match on title or author
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Column to sort by: title, author, date, status
    #[arg(long, default_value = "title")]
    pub sort: SortKey,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub page: u64,

    /// Rows per page (defaults to BLOGSPOT_PAGE_SIZE or 5)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub page_size: Option<u64>,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub author: String,

    #[arg(long)]
    pub content: String,

    /// Draft or Published
    #[arg(long, default_value = "Draft")]
    pub status: String,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    pub id: PostId,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub author: Option<String>,

    #[arg(long)]
    pub content: Option<String>,

    /// Draft or Published
    #[arg(long)]
    pub status: Option<String>,
}
