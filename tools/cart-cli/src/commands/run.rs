//! Session script replay.

use std::io::Read;

use anyhow::{Context as _, Result};
use serde::Serialize;
use turbo_cart::cart::{Change, GiftTransition};
use turbo_cart::session::{CartSession, SessionSnapshot};

use super::RunArgs;
use crate::context::Context;
use crate::script::{self, Op, OpResult};

#[derive(Serialize)]
struct StepReport {
    #[serde(flatten)]
    op: Op,
    result: OpResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    snapshot: Option<SessionSnapshot>,
}

#[derive(Serialize)]
struct RunReport {
    steps: Vec<StepReport>,
    cart: SessionSnapshot,
}

/// Run the replay command.
pub fn run(args: RunArgs, ctx: &Context) -> Result<()> {
    let source = read_script(&args.script)?;
    let ops = script::parse(&source)
        .with_context(|| format!("Failed to parse session script: {}", args.script))?;

    let mut session = CartSession::new(&ctx.config)
        .with_context(|| format!("Invalid store config: {}", ctx.config_source()))?;

    ctx.output.debug(&format!(
        "Replaying {} operation(s) against {}",
        ops.len(),
        ctx.config_source()
    ));

    let total = ops.len();
    let mut steps = Vec::with_capacity(total);
    for (idx, op) in ops.into_iter().enumerate() {
        let result = op.apply(&mut session);
        report_step(ctx, idx + 1, total, &op, &result, &session, args.steps);

        steps.push(StepReport {
            op,
            result,
            snapshot: args.steps.then(|| session.snapshot()),
        });
    }

    if ctx.output.is_json() {
        ctx.output.json(&RunReport {
            steps,
            cart: session.snapshot(),
        });
        return Ok(());
    }

    print_summary(ctx, &session);
    Ok(())
}

fn read_script(path: &str) -> Result<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read session script from stdin")?;
        return Ok(source);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read session script: {}", path))
}

fn report_step(
    ctx: &Context,
    num: usize,
    total: usize,
    op: &Op,
    result: &OpResult,
    session: &CartSession,
    show_cart: bool,
) {
    if let Change::Skipped(reason) = result.change() {
        ctx.output
            .warn(&format!("{} skipped ({})", op, reason.as_str()));
    } else {
        ctx.output.debug(&format!("{} applied", op));
    }

    if let OpResult::Cart(update) = result {
        match update.gift {
            GiftTransition::Granted => {
                ctx.output
                    .debug(&format!("{} added to cart", session.engine().gift().name));
            }
            GiftTransition::Revoked => {
                ctx.output
                    .debug(&format!("{} removed from cart", session.engine().gift().name));
            }
            GiftTransition::Unchanged => {}
        }
    }

    if show_cart {
        ctx.output.step(num, total, &op.to_string());
        print_summary(ctx, session);
    }
}

fn print_summary(ctx: &Context, session: &CartSession) {
    let pricing = session.pricing();
    let gift = session.engine().gift();

    ctx.output.header("Cart");
    if session.cart().is_empty() {
        ctx.output.info("Your cart is empty.");
    } else {
        let widths = [24, 10, 6, 10];
        ctx.output.table_row(&["ITEM", "PRICE", "QTY", "TOTAL"], &widths);
        for item in session.cart().items() {
            let total = if gift.is(&item.id) {
                "free".to_string()
            } else {
                item.total().to_string()
            };
            ctx.output.table_row(
                &[
                    &item.name,
                    &item.price.to_string(),
                    &item.quantity.to_string(),
                    &total,
                ],
                &widths,
            );
        }
    }

    ctx.output.kv("subtotal", &pricing.subtotal.to_string());
    if !pricing.eligible {
        ctx.output.info(&format!(
            "Add {} more to get a free {}!",
            pricing.remaining, gift.name
        ));
        ctx.output.progress(pricing.progress_percent());
    }
    if let Some(message) = session.gift_message() {
        ctx.output.success(message);
    }
}
