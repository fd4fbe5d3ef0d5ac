//! CLI command definitions

use crate::infrastructure::LibraryType;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "zotmeta")]
#[command(about = "Meta-analysis helpers for a Zotero bibliographic library", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Zotero API key (not required for read-only commands)
    #[arg(long, global = true)]
    pub key: Option<String>,

    /// Numeric library identifier
    #[arg(long, global = true)]
    pub library_id: Option<String>,

    /// Whether the library belongs to a user or a group
    #[arg(long, global = true, value_enum)]
    pub library_type: Option<LibraryType>,

    /// Tag prefix to include or exclude; repeatable, all must match.
    /// Prefix with '-' to exclude, separate alternatives with '||'.
    #[arg(
        long = "tag-filter",
        global = true,
        value_name = "EXPR",
        allow_hyphen_values = true
    )]
    pub tag_filter: Vec<String>,

    /// Base URL of the Zotero API
    #[arg(long, global = true, value_name = "URL")]
    pub api_base: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the library's tags that pass the filters
    GetTags {
        /// Output file, or `-` for stdout
        output: String,
    },

    /// Render the filtered items as an HTML bibliography
    PrintBibliography {
        /// Output file, or `-` for stdout
        output: String,
    },

    /// Add a category tag to every item matching a tag in INPUT
    ApplyCategoryTags {
        /// Tag name to apply
        #[arg(long)]
        tag: String,

        /// Newline-delimited tag list, or `-` for stdin
        input: String,
    },

    /// Compare a tag list against the library's tags
    FindMissingTags {
        /// Output for tags present remotely but not in TAGS_LIST
        #[arg(long, default_value = "missing-local.txt")]
        local: String,

        /// Output for tags present in TAGS_LIST but not remotely
        #[arg(long, default_value = "missing-remote.txt")]
        remote: String,

        /// Newline-delimited tag list, or `-` for stdin
        tags_list: String,
    },

    /// Write a CSV matrix of tag co-occurrence counts
    GetUnion {
        /// Column-axis tag list file
        x_tags: String,

        /// Row-axis tag list file
        y_tags: String,

        /// Output file, or `-` for stdout
        output: String,
    },

    /// Write a CSV table of journal frequencies, most frequent first
    ListJournals {
        /// Earliest publication date to include (YYYY, YYYY-MM or YYYY-MM-DD)
        #[arg(long, default_value = "1900")]
        start_date: String,

        /// Latest publication date to include (YYYY, YYYY-MM or YYYY-MM-DD)
        #[arg(long, default_value = "2100")]
        end_date: String,

        /// Output file, or `-` for stdout
        output: String,
    },
}
