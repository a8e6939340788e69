//! Category browsing.

use anyhow::Result;
use pulga_client::ViewEvent;
use serde_json::json;

use super::CategoriesArgs;
use super::popular::print_popular;
use crate::context::Context;

/// Run the categories command.
pub async fn run(args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let mut view = ctx.view()?;

    let spinner = ctx.output.spinner("Loading categories...");
    if args.no_popular {
        view.load_categories().await;
    } else {
        view.dispatch(ViewEvent::LoadBrowse).await;
    }
    spinner.finish_and_clear();

    if ctx.output.is_json() {
        if args.no_popular {
            ctx.output.json(&view.categories());
        } else {
            ctx.output.json(&json!({
                "categories": view.categories(),
                "popular": view.popular(),
            }));
        }
        return Ok(());
    }

    ctx.output.header("Categories");
    ctx.output.table_row(&["NAME", "PRODUCTS"], &[24, 10]);
    for category in view.categories() {
        let name = if category.is_featured() {
            format!("★ {}", category.name)
        } else {
            category.name.clone()
        };
        ctx.output
            .table_row(&[&name, &category.total_items.to_string()], &[24, 10]);
    }

    if !args.no_popular {
        print_popular(view.popular(), ctx);
    }

    Ok(())
}
