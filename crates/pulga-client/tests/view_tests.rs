mod common;

use common::*;
use pulga_catalog::prelude::*;
use pulga_client::view::{HISTORY_DELETE_FAILED, SEARCH_FAILED};
use pulga_client::{ApiError, Endpoints, ViewEvent, ViewMode};
use pulga_fetch::{FetchError, Method};
use serde_json::json;

fn history_list() -> serde_json::Value {
    json!([
        {"texto": "zapatos", "tipo": "historial", "id": "h1"},
        {"texto": "zapatillas", "tipo": "coincidencia"},
        {"texto": "zapato rojo", "tipo": "historial", "id": "h2",
         "filtros": {"categoria": "CALZADO", "ordenPrecio": "precio-desc"}}
    ])
}

#[tokio::test]
async fn test_starts_on_category_grid() {
    let h = Harness::new();
    let view = h.view();
    assert_eq!(view.mode(), ViewMode::CategoryBrowse);
    assert!(view.filters().is_empty());

    assert_eq!(h.view().showing_search().mode(), ViewMode::FilteredList);
}

#[tokio::test]
async fn test_select_category_switches_and_searches() {
    let h = Harness::new();
    h.mock
        .respond_json(Method::Get, Endpoints::SEARCH, envelope(2, 2, 1));
    let mut view = h.view();

    view.dispatch(ViewEvent::SelectCategory("HOGAR".into())).await;

    assert_eq!(view.mode(), ViewMode::FilteredList);
    assert_eq!(view.results().len(), 2);
    assert_eq!(
        h.mock.last_request().unwrap().query_string(),
        Some("page=1&pageSize=20&categoria=HOGAR")
    );
}

#[tokio::test]
async fn test_select_everything_clears_category() {
    let h = Harness::new();
    h.mock.respond_json(Method::Get, Endpoints::SEARCH, json!([]));
    let mut view = h.view();

    view.select_category("HOGAR").await;
    view.select_category(EVERYTHING).await;

    assert_eq!(view.filters().category, None);
    assert_eq!(
        h.mock.last_request().unwrap().query_string(),
        Some("page=1&pageSize=20")
    );
}

#[tokio::test]
async fn test_facet_change_searches_only_in_filtered_list() {
    let h = Harness::new();
    h.mock.respond_json(Method::Get, Endpoints::SEARCH, json!([]));
    let mut view = h.view();

    view.set_facet(FacetChange::Sort(Some(PriceSort::Ascending)))
        .await;
    assert!(h.mock.requests().is_empty());
    assert_eq!(view.filters().sort, Some(PriceSort::Ascending));

    let mut view = h.view().showing_search();
    view.set_facet(FacetChange::Price(Some(PriceBracket::UpTo(50000))))
        .await;
    assert_eq!(
        h.mock.last_request().unwrap().query_string(),
        Some("page=1&pageSize=20&precio=hasta+50000")
    );
}

#[tokio::test]
async fn test_typing_fetches_suggestions_without_searching() {
    let h = Harness::new();
    h.mock
        .respond_json(Method::Get, Endpoints::SUGGESTIONS, history_list());
    let mut view = h.view().showing_search();

    view.set_search_text("zap").await;
    assert_eq!(view.suggestions().len(), 3);
    assert!(h.mock.requests_to(Method::Get, Endpoints::SEARCH).is_empty());

    view.set_search_text("   ").await;
    assert!(view.suggestions().is_empty());
}

#[tokio::test]
async fn test_focus_only_fetches_when_list_is_empty() {
    let h = Harness::new();
    h.mock
        .respond_json(Method::Get, Endpoints::SUGGESTIONS, history_list());
    let mut view = h.view().showing_search();

    view.focus_search().await;
    view.focus_search().await;
    assert_eq!(h.mock.requests_to(Method::Get, Endpoints::SUGGESTIONS).len(), 1);
    assert_eq!(
        h.mock.last_request().unwrap().query_string(),
        Some("texto=")
    );
}

#[tokio::test]
async fn test_history_suggestion_reapplies_facets() {
    let h = Harness::new();
    h.mock
        .respond_json(Method::Get, Endpoints::SUGGESTIONS, history_list())
        .respond_json(Method::Get, Endpoints::SEARCH, json!([]));
    let mut view = h.view().showing_search();

    view.set_search_text("zap").await;
    let picked = view.suggestions().as_slice()[2].clone();
    view.dispatch(ViewEvent::SelectSuggestion(picked)).await;

    assert!(view.suggestions().is_empty());
    assert_eq!(view.filters().search, "zapato rojo");
    assert_eq!(view.filters().category.as_deref(), Some("CALZADO"));
    assert_eq!(
        h.mock.last_request().unwrap().query_string(),
        Some("page=1&pageSize=20&busqueda=zapato+rojo&categoria=CALZADO&ordenar=precio-desc")
    );
}

#[tokio::test]
async fn test_page_navigation() {
    let h = Harness::new();
    h.mock
        .respond_json(Method::Get, Endpoints::SEARCH, envelope(20, 940, 47));
    let mut view = h.view().showing_search();
    view.submit_search().await;

    assert!(!view.go_to_page(0).await);
    assert!(!view.go_to_page(48).await);
    assert_eq!(h.navigator.scrolls(), 0);

    assert!(view.go_to_page(23).await);
    assert_eq!(h.navigator.scrolls(), 1);
    assert_eq!(view.results().pagination.page, 23);

    let block = view.page_block();
    assert_eq!(block.pages(), 21..=30);
    assert!(block.first().enabled);
    assert!(block.next_block().enabled);
}

#[tokio::test]
async fn test_failed_click_still_navigates() {
    let h = Harness::new();
    h.mock.fail(
        Method::Post,
        Endpoints::CLICK,
        FetchError::RequestError("timeout".into()),
    );
    let mut view = h.view();
    let listing: Product = serde_json::from_value(product(3)).unwrap();

    let url = view.activate_product(&listing).await;

    assert_eq!(url, "http://detail.test/publicaciones/pub-3");
    assert_eq!(h.navigator.visited(), [url]);
    assert_eq!(h.mock.requests_to(Method::Post, Endpoints::CLICK).len(), 1);
}

#[tokio::test]
async fn test_delete_history_item_removes_only_that_entry() {
    let h = Harness::new();
    h.mock
        .respond_json(Method::Get, Endpoints::SUGGESTIONS, history_list())
        .respond_json(Method::Delete, "/api/search/history/h1", json!({}));
    let mut view = h.view().showing_search();
    view.set_search_text("zap").await;

    assert!(view.delete_history_item(&HistoryId::new("h1")).await);

    let texts: Vec<_> = view.suggestions().iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, ["zapatillas", "zapato rojo"]);
}

#[tokio::test]
async fn test_clear_history_keeps_text_matches() {
    let h = Harness::new();
    h.mock
        .respond_json(Method::Get, Endpoints::SUGGESTIONS, history_list())
        .respond_json(Method::Delete, Endpoints::HISTORY, json!({}));
    let mut view = h.view().showing_search();
    view.set_search_text("zap").await;

    view.dispatch(ViewEvent::ClearAllHistory).await;

    assert_eq!(view.suggestions().len(), 1);
    assert_eq!(view.suggestions().as_slice()[0].kind, SuggestionKind::TextMatch);
}

#[tokio::test]
async fn test_failed_history_delete_leaves_list_intact() {
    let h = Harness::new();
    h.mock
        .respond_json(Method::Get, Endpoints::SUGGESTIONS, history_list());
    let mut view = h.view().showing_search();
    view.set_search_text("zap").await;

    // No route registered for the delete: the mock answers 404.
    assert!(!view.delete_history_item(&HistoryId::new("h2")).await);

    assert_eq!(view.suggestions().len(), 3);
    assert_eq!(view.error(), Some(HISTORY_DELETE_FAILED));
}

#[tokio::test]
async fn test_stale_search_is_discarded() {
    let h = Harness::new();
    let mut view = h.view().showing_search();
    let older: ProductPage = serde_json::from_value::<SearchPayload>(envelope(1, 1, 1))
        .unwrap()
        .into_page(1, 20);
    let newer: ProductPage = serde_json::from_value::<SearchPayload>(envelope(3, 3, 1))
        .unwrap()
        .into_page(1, 20);

    let first = view.prepare_search();
    let second = view.prepare_search();
    assert!(first < second);

    assert!(view.complete_search(second, Ok(newer), SEARCH_FAILED));
    assert!(!view.complete_search(first, Ok(older), SEARCH_FAILED));
    assert_eq!(view.results().len(), 3);
    assert!(!view.is_loading());
}

#[tokio::test]
async fn test_search_error_is_one_message() {
    let h = Harness::new();
    let mut view = h.view().showing_search();

    let ticket = view.prepare_search();
    view.complete_search(
        ticket,
        Err(ApiError::Transport("connection refused".into())),
        SEARCH_FAILED,
    );
    assert_eq!(view.error(), Some(SEARCH_FAILED));

    view.prepare_search();
    assert_eq!(view.error(), None);
}

#[tokio::test]
async fn test_reset_to_categories_clears_everything() {
    let h = Harness::new();
    h.mock
        .respond_json(Method::Get, Endpoints::SEARCH, envelope(2, 2, 1));
    let mut view = h.view();
    view.select_category("HOGAR").await;
    view.set_facet(FacetChange::Condition(Some(Condition::New)))
        .await;

    view.dispatch(ViewEvent::ResetToCategories).await;

    assert_eq!(view.mode(), ViewMode::CategoryBrowse);
    assert!(view.filters().is_empty());
    assert_eq!(
        h.mock.last_request().unwrap().query_string(),
        Some("page=1&pageSize=20")
    );
}

#[tokio::test]
async fn test_load_browse_fetches_both_sections() {
    let h = Harness::new();
    h.mock
        .respond_json(
            Method::Get,
            Endpoints::CATEGORIES,
            json!([{"nombre": "HOGAR", "totalProductos": 1}]),
        )
        .respond_json(
            Method::Get,
            Endpoints::TOP_PRODUCTS,
            json!({"productos": [
                {"id_producto": "p-1", "clickCount": 2, "nombre": "A", "producto": product(1)}
            ]}),
        );
    let mut view = h.view();

    view.dispatch(ViewEvent::LoadBrowse).await;

    assert_eq!(view.categories().len(), 3);
    assert_eq!(view.popular().len(), 1);
}

#[tokio::test]
async fn test_load_categories_skips_top_products() {
    let h = Harness::new();
    h.mock.respond_json(
        Method::Get,
        Endpoints::CATEGORIES,
        json!([{"nombre": "HOGAR", "totalProductos": 1}]),
    );
    let mut view = h.view();

    view.load_categories().await;

    assert_eq!(view.categories().len(), 3);
    assert!(view.popular().is_empty());
    assert_eq!(h.mock.requests_to(Method::Get, Endpoints::CATEGORIES).len(), 1);
    assert!(h.mock.requests_to(Method::Get, Endpoints::TOP_PRODUCTS).is_empty());
}
