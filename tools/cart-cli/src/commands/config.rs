//! Store configuration commands.

use anyhow::{bail, Context as _, Result};
use turbo_cart::config::StoreConfig;

use super::{ConfigArgs, ConfigCommand};
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    ctx.output.kv("source", &ctx.config_source());
    ctx.output.kv("threshold", &ctx.config.threshold.to_string());
    ctx.output.kv(
        "gift",
        &format!(
            "{} ({}, price {})",
            ctx.config.gift.name, ctx.config.gift.id, ctx.config.gift.price
        ),
    );
    ctx.output.kv("gift_message", &ctx.config.engine().rule().message());

    ctx.output.info("");
    ctx.output.info(&format!("{} product(s):", ctx.config.products.len()));
    for product in &ctx.config.products {
        ctx.output.list_item(&format!(
            "{} - {} @ {}",
            product.id, product.name, product.price
        ));
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    StoreConfig::demo()
        .save(&config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    ctx.config
        .validate()
        .with_context(|| format!("Invalid store config: {}", ctx.config_source()))?;

    if ctx.config.products.is_empty() {
        ctx.output.warn("catalog is empty; the gift is only reachable with a zero threshold");
    }

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "valid": true }));
    } else {
        ctx.output.success("Configuration is valid");
    }

    Ok(())
}
