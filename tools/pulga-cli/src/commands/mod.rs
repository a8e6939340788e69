//! CLI command implementations.

pub mod categories;
pub mod config;
pub mod history;
pub mod open;
pub mod popular;
pub mod search;
pub mod session;

use clap::{Args, Subcommand};

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {
    /// Skip the popular products section.
    #[arg(long)]
    pub no_popular: bool,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Free text to search for.
    pub text: Option<String>,

    /// Category name (SORPRENDEME for a random sample, TODO for all).
    #[arg(long)]
    pub category: Option<String>,

    /// Price bracket, e.g. "hasta 50000", "entre 50000 - 100000", "mas de 500000".
    #[arg(short, long)]
    pub price: Option<String>,

    /// Condition: NUEVO, USADO or REACONDICIONADO.
    #[arg(long)]
    pub condition: Option<String>,

    /// Price sort: precio-asc or precio-desc.
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Page number.
    #[arg(long, default_value = "1")]
    pub page: u32,
}

/// Arguments for the suggest command.
#[derive(Args)]
pub struct SuggestArgs {
    /// Partial search text. Empty shows the history.
    #[arg(default_value = "")]
    pub text: String,
}

/// Arguments for the popular command.
#[derive(Args)]
pub struct PopularArgs {
    /// Number of products (default: from config).
    #[arg(short, long)]
    pub limit: Option<u32>,
}

/// Arguments for the open command.
#[derive(Args)]
pub struct OpenArgs {
    /// Catalog product id.
    pub product_id: String,

    /// Publication id on the detail site.
    pub publication_id: String,

    /// Product name recorded with the click.
    #[arg(short, long)]
    pub name: Option<String>,
}

/// Arguments for the history command.
#[derive(Args)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub command: HistoryCommand,
}

#[derive(Subcommand)]
pub enum HistoryCommand {
    /// Delete one history entry.
    Delete {
        /// History entry id.
        id: String,
    },
    /// Delete the whole search history.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the session command.
#[derive(Args)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand)]
pub enum SessionCommand {
    /// Show the stored tokens.
    Show,
    /// Store a token.
    Set {
        /// Token value.
        value: String,
        /// Set the auth token instead of the session token.
        #[arg(long)]
        auth: bool,
    },
    /// Remove a stored token.
    Clear {
        /// Clear the auth token instead of the session token.
        #[arg(long)]
        auth: bool,
        /// Clear both tokens.
        #[arg(long, conflicts_with = "auth")]
        all: bool,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Write a default config file.
    Init {
        /// Target file.
        #[arg(short, long, default_value = "pulga.toml")]
        path: String,
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
