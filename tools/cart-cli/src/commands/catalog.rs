//! Catalog listing.

use anyhow::Result;
use serde_json::json;

use super::CatalogArgs;
use crate::context::Context;

/// Run the catalog command.
pub fn run(_args: CatalogArgs, ctx: &Context) -> Result<()> {
    let config = &ctx.config;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "threshold": config.threshold,
            "gift": config.gift,
            "products": config.products,
        }));
        return Ok(());
    }

    ctx.output.header("Catalog");
    let widths = [16, 24, 10];
    ctx.output.table_row(&["ID", "NAME", "PRICE"], &widths);
    for product in &config.products {
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &product.name,
                &product.price.to_string(),
            ],
            &widths,
        );
    }

    ctx.output.header("Free gift");
    ctx.output.kv("gift", &format!("{} ({})", config.gift.name, config.gift.id));
    ctx.output.kv("threshold", &config.threshold.to_string());
    ctx.output.kv("source", &ctx.config_source());

    Ok(())
}
