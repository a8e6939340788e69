//! Product search and suggestions.

use anyhow::{bail, Context as _, Result};
use pulga_catalog::prelude::*;
use serde_json::json;

use super::{SearchArgs, SuggestArgs};
use crate::context::Context;

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let filters = build_filters(&args)?;
    ctx.output.debug(&format!("Filters: {:?}", filters));

    let mut view = ctx.view()?.showing_search().with_filters(filters);

    let spinner = ctx.output.spinner("Searching...");
    view.load_page(args.page).await;
    spinner.finish_and_clear();

    if let Some(error) = view.error() {
        bail!("{}", error);
    }

    let results = view.results();
    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "productos": results.items,
            "pagination": results.pagination,
        }));
        return Ok(());
    }

    ctx.output.header(&results.summary());
    if results.is_empty() {
        ctx.output.info("No products match these filters.");
        return Ok(());
    }

    ctx.output.products(&results.items);
    ctx.output.info("");
    ctx.output.page_block(&view.page_block());
    ctx.output.kv(
        "page",
        &format!(
            "{} of {} ({} products)",
            results.pagination.page, results.pagination.total_pages, results.pagination.total
        ),
    );

    Ok(())
}

/// Turn command line flags into a filter state.
fn build_filters(args: &SearchArgs) -> Result<FilterState> {
    let price = args
        .price
        .as_deref()
        .map(str::parse::<PriceBracket>)
        .transpose()
        .context("Invalid --price")?;
    let sort = args
        .sort
        .as_deref()
        .map(str::parse::<PriceSort>)
        .transpose()
        .context("Invalid --sort")?;

    Ok(FilterState::new()
        .with_search(args.text.clone().unwrap_or_default())
        .with_facet(FacetChange::Price(price))
        .with_facet(FacetChange::Category(args.category.clone()))
        .with_facet(FacetChange::Condition(
            args.condition.as_deref().map(Condition::parse),
        ))
        .with_facet(FacetChange::Sort(sort)))
}

/// Run the suggest command.
pub async fn suggest(args: SuggestArgs, ctx: &Context) -> Result<()> {
    let api = ctx.api()?;
    let suggestions = api.fetch_suggestions(&args.text).await;

    if ctx.output.is_json() {
        ctx.output.json(&suggestions);
        return Ok(());
    }

    if suggestions.is_empty() {
        ctx.output.info("No suggestions.");
        return Ok(());
    }

    ctx.output.header("Suggestions");
    for suggestion in &suggestions {
        match (&suggestion.kind, &suggestion.id) {
            (SuggestionKind::History, Some(id)) => ctx
                .output
                .list_item(&format!("🕘 {}  ({})", suggestion.text, id)),
            (SuggestionKind::History, None) => {
                ctx.output.list_item(&format!("🕘 {}", suggestion.text))
            }
            (SuggestionKind::TextMatch, _) => {
                ctx.output.list_item(&format!("🔍 {}", suggestion.text))
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> SearchArgs {
        SearchArgs {
            text: None,
            category: None,
            price: None,
            condition: None,
            sort: None,
            page: 1,
        }
    }

    #[test]
    fn test_no_flags_is_empty() {
        assert!(build_filters(&args()).unwrap().is_empty());
    }

    #[test]
    fn test_flags_become_facets() {
        let filters = build_filters(&SearchArgs {
            text: Some("lamp".into()),
            category: Some(EVERYTHING.into()),
            price: Some("entre 5000 - 10000".into()),
            condition: Some("usado".into()),
            sort: Some("precio-desc".into()),
            ..args()
        })
        .unwrap();

        assert_eq!(filters.search, "lamp");
        assert_eq!(filters.category, None);
        assert_eq!(filters.price, Some(PriceBracket::Between(5000, 10000)));
        assert_eq!(filters.condition, Some(Condition::Used));
        assert_eq!(filters.sort, Some(PriceSort::Descending));
    }

    #[test]
    fn test_bad_price_is_rejected() {
        let err = build_filters(&SearchArgs {
            price: Some("cheap".into()),
            ..args()
        })
        .unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid --price"));
    }
}
