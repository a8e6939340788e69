//! Configuration management commands.

use anyhow::{bail, Result};
use serde_json::json;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { path, force } => init_config(&path, force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let store_path = ctx.config.store_path();
    let source = ctx
        .config_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(defaults)".to_string());

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "config_path": ctx.config_path,
            "store_path": store_path,
            "config": ctx.config,
        }));
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    ctx.output.kv("source", &source);

    let api = &ctx.config.api;
    ctx.output.info("");
    ctx.output.info("[api]");
    ctx.output.kv("api_url", &api.api_url);
    ctx.output.kv("detail_url", &api.detail_url);
    ctx.output.kv("page_size", &api.page_size.to_string());
    ctx.output
        .kv("random_sample_size", &api.random_sample_size.to_string());
    ctx.output.kv("popular_limit", &api.popular_limit.to_string());

    ctx.output.info("");
    ctx.output.info("[session]");
    ctx.output.kv("store_path", &store_path.display().to_string());

    if !ctx.config.environments.is_empty() {
        let mut names: Vec<&String> = ctx.config.environments.keys().collect();
        names.sort();
        ctx.output.info("");
        ctx.output.kv(
            "environments",
            &names
                .iter()
                .map(|n| n.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        );
    }

    Ok(())
}

fn init_config(path: &str, force: bool, ctx: &Context) -> Result<()> {
    let target = ctx.resolve_path(path);

    if target.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            target.display()
        );
    }

    if target.extension().map_or(false, |e| e == "json") {
        CliConfig::default().save(&target)?;
    } else {
        std::fs::write(&target, generate_default_config())?;
    }

    ctx.output
        .success(&format!("Created {}", target.display()));
    Ok(())
}
