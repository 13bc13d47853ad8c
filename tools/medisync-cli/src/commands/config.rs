//! Configuration management commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => {
            let path = init_config(&ctx.cwd, force)?;
            ctx.output.success(&format!("Created: {}", path.display()));
            Ok(())
        }
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, using defaults)"),
    }

    let store = &ctx.config.store;
    ctx.output.info("");
    ctx.output.info("[store]");
    ctx.output.kv("brand", &store.brand);
    ctx.output.kv("currency", &store.currency);
    ctx.output.kv("title", &store.title);
    ctx.output.kv("headline", &store.headline);
    ctx.output.kv("tagline", &store.tagline);
    ctx.output.kv("search_placeholder", &store.search_placeholder);

    ctx.output.info("");
    ctx.output.info("[[store.nav_links]]");
    for link in &store.nav_links {
        ctx.output.list_item(&format!("{} -> {}", link.label, link.href));
    }

    ctx.output.info("");
    ctx.output.info("[catalog]");
    match &ctx.config.catalog.path {
        Some(path) => ctx.output.kv("path", &path.display().to_string()),
        None => ctx.output.kv("path", "(builtin)"),
    }

    Ok(())
}

/// Write a default `medisync.toml` into `dir`.
fn init_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config()?)?;
    Ok(config_path)
}
