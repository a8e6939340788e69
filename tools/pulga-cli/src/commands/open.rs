//! Record a product click and hand over to the detail site.

use anyhow::Result;
use pulga_catalog::{catalog::UNNAMED_PRODUCT, ProductId};

use super::OpenArgs;
use crate::context::Context;

/// Run the open command.
pub async fn run(args: OpenArgs, ctx: &Context) -> Result<()> {
    let api = ctx.api()?;
    let product_id = ProductId::new(args.product_id);

    // A failed click never blocks navigation.
    if !api
        .record_click(&product_id, click_name(args.name.as_deref()))
        .await
    {
        ctx.output.warn("Click was not recorded");
    }

    let url = api.config().detail_page(&args.publication_id);
    ctx.output.link(&url);
    Ok(())
}

/// Name sent with the click; blank names fall back like a listing without one.
fn click_name(name: Option<&str>) -> &str {
    name.filter(|n| !n.trim().is_empty())
        .unwrap_or(UNNAMED_PRODUCT)
}
