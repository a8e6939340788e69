//! Pulga CLI - Command line front end for the Pulga storefront.
//!
//! Commands:
//! - `pulga categories` - Browse categories and popular products
//! - `pulga search` - Search products with facets
//! - `pulga suggest` - Show autocomplete suggestions
//! - `pulga popular` - Most clicked products
//! - `pulga open` - Record a click and print the detail page URL
//! - `pulga history` - Delete search history
//! - `pulga session` - Inspect or change the stored tokens
//! - `pulga config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use commands::{
    CategoriesArgs, ConfigArgs, HistoryArgs, OpenArgs, PopularArgs, SearchArgs, SessionArgs,
    SuggestArgs,
};

/// Pulga CLI - Browse and search the Pulga storefront
#[derive(Parser)]
#[command(name = "pulga")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Named environment from the config file
    #[arg(short, long, global = true)]
    env: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse categories and popular products
    Categories(CategoriesArgs),

    /// Search products
    Search(SearchArgs),

    /// Show autocomplete suggestions and history
    Suggest(SuggestArgs),

    /// Show the most clicked products
    Popular(PopularArgs),

    /// Record a click and print the product detail URL
    Open(OpenArgs),

    /// Manage search history
    History(HistoryArgs),

    /// Manage the stored session and auth tokens
    Session(SessionArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = match context::Context::load(cli.config.as_deref(), cli.env.as_deref(), output) {
        Ok(ctx) => ctx,
        Err(e) => {
            output::Output::new(cli.verbose, cli.json).error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Categories(args) => commands::categories::run(args, &ctx).await,
        Commands::Search(args) => commands::search::run(args, &ctx).await,
        Commands::Suggest(args) => commands::search::suggest(args, &ctx).await,
        Commands::Popular(args) => commands::popular::run(args, &ctx).await,
        Commands::Open(args) => commands::open::run(args, &ctx).await,
        Commands::History(args) => commands::history::run(args, &ctx).await,
        Commands::Session(args) => commands::session::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
