//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod render;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List medicines, optionally filtered by category.
    List {
        /// Category label, or `all`.
        #[arg(short = 'C', long)]
        category: Option<String>,
    },
    /// Show one medicine.
    Show {
        /// Medicine id.
        id: String,
    },
    /// Validate the catalog and report uncategorized medicines.
    Check,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Category label for the listing, or `all`.
    #[arg(short = 'C', long, conflicts_with = "medicine")]
    pub category: Option<String>,

    /// Render the detail page of this medicine instead of the listing.
    #[arg(short, long)]
    pub medicine: Option<String>,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    pub out: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
