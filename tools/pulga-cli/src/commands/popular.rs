//! Most clicked products.

use anyhow::{anyhow, Result};
use chrono::Utc;
use pulga_catalog::prelude::PopularProduct;

use super::PopularArgs;
use crate::context::Context;

/// Run the popular command.
pub async fn run(args: PopularArgs, ctx: &Context) -> Result<()> {
    let api = ctx.api()?;
    let limit = args.limit.unwrap_or(api.config().popular_limit);

    let spinner = ctx.output.spinner("Loading popular products...");
    let result = api.fetch_popular(limit).await;
    spinner.finish_and_clear();

    let popular = result.map_err(|e| anyhow!(e.user_message("Failed to load popular products")))?;

    if ctx.output.is_json() {
        ctx.output.json(&popular);
        return Ok(());
    }

    print_popular(&popular, ctx);
    Ok(())
}

/// Print the ranking table.
pub fn print_popular(popular: &[PopularProduct], ctx: &Context) {
    ctx.output.header("Most viewed");

    if popular.is_empty() {
        ctx.output.info("No popular products yet.");
        return;
    }

    ctx.output
        .table_row(&["#", "NAME", "PRICE", "CLICKS", "LAST CLICK"], &[3, 36, 12, 10, 14]);
    for (rank, item) in popular.iter().enumerate() {
        let (name, price) = match &item.product {
            Some(product) => (product.display_name().to_string(), product.price_display()),
            None => (item.name.clone(), String::new()),
        };
        let last = item
            .last_click_at()
            .map(|at| format_ago(Utc::now().signed_duration_since(at).num_seconds()))
            .unwrap_or_default();
        ctx.output.table_row(
            &[
                &(rank + 1).to_string(),
                &name,
                &price,
                &item.clicks_label(),
                &last,
            ],
            &[3, 36, 12, 10, 14],
        );
    }
}

/// "42s ago", "5m ago", "3h ago", "2d ago".
fn format_ago(secs: i64) -> String {
    let secs = secs.max(0);
    if secs < 60 {
        format!("{}s ago", secs)
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86_400 {
        format!("{}h ago", secs / 3600)
    } else {
        format!("{}d ago", secs / 86_400)
    }
}
