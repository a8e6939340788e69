mod common;

use common::*;
use pulga_catalog::prelude::*;
use pulga_client::{ApiError, Endpoints, SESSION_HEADER};
use pulga_fetch::{FetchError, Method, Response};
use serde_json::json;

#[tokio::test]
async fn test_empty_filters_request_unfiltered_first_page() {
    let h = Harness::new();
    h.mock
        .respond_json(Method::Get, Endpoints::SEARCH, envelope(20, 45, 3));

    let page = h.api.search(&FilterState::new(), 1, 20).await.unwrap();

    let request = h.mock.last_request().unwrap();
    assert_eq!(request.query_string(), Some("page=1&pageSize=20"));
    assert_eq!(page.len(), 20);
    assert_eq!(page.pagination.total, 45);
    assert_eq!(page.pagination.total_pages, 3);
}

#[tokio::test]
async fn test_blank_fields_are_not_sent() {
    let h = Harness::new();
    h.mock.respond_json(Method::Get, Endpoints::SEARCH, json!([]));

    let filters = FilterState::new()
        .with_search("  lamp  ")
        .with_facet(FacetChange::Condition(Some(Condition::Used)));
    h.api.search(&filters, 2, 20).await.unwrap();

    assert_eq!(
        h.mock.last_request().unwrap().query_string(),
        Some("page=2&pageSize=20&busqueda=lamp&condicion=USADO")
    );
}

#[tokio::test]
async fn test_surprise_me_fetches_random_sample() {
    let h = Harness::new();
    h.mock.respond_json(
        Method::Get,
        Endpoints::RANDOM_PRODUCTS,
        json!({ "productos": products(20) }),
    );

    let filters =
        FilterState::new().with_facet(FacetChange::Category(Some(SURPRISE_ME.to_string())));
    let page = h.api.search(&filters, 4, 20).await.unwrap();

    let request = h.mock.last_request().unwrap();
    assert_eq!(request.path(), Endpoints::RANDOM_PRODUCTS);
    assert_eq!(request.query_string(), Some("limit=20"));
    assert_eq!(page.len(), 20);
    assert_eq!(page.pagination.total_pages, 1);
    assert_eq!(page.pagination.page, 1);
    assert!(h.mock.requests_to(Method::Get, Endpoints::SEARCH).is_empty());
}

#[tokio::test]
async fn test_everything_category_is_not_sent() {
    let h = Harness::new();
    h.mock.respond_json(Method::Get, Endpoints::SEARCH, json!([]));

    let filters =
        FilterState::new().with_facet(FacetChange::Category(Some(EVERYTHING.to_string())));
    assert_eq!(filters.category, None);
    h.api.search(&filters, 1, 20).await.unwrap();

    let query = h.mock.last_request().unwrap().query_string().unwrap().to_string();
    assert!(!query.contains("categoria"), "query was {query}");
}

#[tokio::test]
async fn test_bare_list_response_is_one_page() {
    let h = Harness::new();
    h.mock
        .respond_json(Method::Get, Endpoints::SEARCH, json!(products(3)));

    let page = h.api.fetch_all(1).await.unwrap();
    assert_eq!(page.len(), 3);
    assert_eq!(page.pagination.total, 3);
    assert_eq!(page.pagination.total_pages, 1);
}

#[tokio::test]
async fn test_server_error_message_reaches_user() {
    let h = Harness::new();
    h.mock.respond(
        Method::Get,
        Endpoints::SEARCH,
        Response::json_body(400, &json!({"error": "Filtro de precio inválido"})),
    );

    let err = h.api.fetch_all(1).await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.user_message("Failed"), "Filtro de precio inválido");
}

#[tokio::test]
async fn test_malformed_payload_is_decode_error() {
    let h = Harness::new();
    h.mock
        .respond_json(Method::Get, Endpoints::SEARCH, json!({"unexpected": true}));

    let err = h.api.fetch_all(1).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(err.user_message("Failed"), "Failed");
}

#[tokio::test]
async fn test_suggestions_degrade_to_empty() {
    let h = Harness::new();
    h.mock.fail(
        Method::Get,
        Endpoints::SUGGESTIONS,
        FetchError::RequestError("connection refused".into()),
    );

    assert!(h.api.fetch_suggestions("zap").await.is_empty());
}

#[tokio::test]
async fn test_suggestion_text_is_trimmed() {
    let h = Harness::new();
    h.mock.respond_json(
        Method::Get,
        Endpoints::SUGGESTIONS,
        json!([{"texto": "zapatos", "tipo": "coincidencia"}]),
    );

    let list = h.api.fetch_suggestions("  zap ").await;
    assert_eq!(list.len(), 1);
    assert_eq!(
        h.mock.last_request().unwrap().query_string(),
        Some("texto=zap")
    );
}

#[tokio::test]
async fn test_categories_get_specials_with_summed_counts() {
    let h = Harness::new();
    h.mock.respond_json(
        Method::Get,
        Endpoints::CATEGORIES,
        json!([
            {"nombre": "HOGAR", "imagen": "/api/images/categories/hogar.svg", "totalProductos": 4},
            {"nombre": "ROPA", "imagen": null, "totalProductos": 6}
        ]),
    );

    let categories = h.api.fetch_categories().await;
    let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, [SURPRISE_ME, EVERYTHING, "HOGAR", "ROPA"]);
    assert_eq!(categories[0].total_items, 10);
    assert_eq!(categories[1].total_items, 10);
    assert_eq!(
        categories[2].image.as_deref(),
        Some("http://api.test/api/images/categories/hogar.svg")
    );
}

#[tokio::test]
async fn test_categories_fall_back_on_error() {
    let h = Harness::new();

    let categories = h.api.fetch_categories().await;
    assert_eq!(categories.len(), 15);
    assert!(categories.iter().all(|c| c.total_items == 0));
}

#[tokio::test]
async fn test_popular_products_skip_missing_listings() {
    let h = Harness::new();
    h.mock.respond_json(
        Method::Get,
        Endpoints::TOP_PRODUCTS,
        json!({"productos": [
            {"id_producto": "p-1", "clickCount": 9, "lastClick": "2024-05-01T10:00:00Z",
             "nombre": "Lamp", "producto": product(1)},
            {"id_producto": "p-2", "clickCount": 3, "lastClick": null,
             "nombre": "Gone", "producto": null}
        ]}),
    );

    let popular = h.api.fetch_popular(6).await.unwrap();
    assert_eq!(popular.len(), 1);
    assert_eq!(popular[0].click_count, 9);
    assert_eq!(h.mock.last_request().unwrap().query_string(), Some("limit=6"));
}

#[tokio::test]
async fn test_click_body() {
    let h = Harness::new();
    h.mock
        .respond(Method::Post, Endpoints::CLICK, Response::json_body(201, &json!({})));

    assert!(h.api.record_click(&ProductId::new("p-1"), "Lamp").await);
    let body: serde_json::Value =
        serde_json::from_slice(h.mock.last_request().unwrap().body().unwrap()).unwrap();
    assert_eq!(body, json!({"id_producto": "p-1", "nombre": "Lamp"}));
}

#[tokio::test]
async fn test_history_deletes() {
    let h = Harness::new();
    h.mock
        .respond_json(Method::Delete, "/api/search/history/h-7", json!({}))
        .respond_json(Method::Delete, Endpoints::HISTORY, json!({}));

    h.api.delete_history_item(&HistoryId::new("h-7")).await.unwrap();
    h.api.clear_history().await.unwrap();
    assert_eq!(h.mock.requests().len(), 2);
}

#[tokio::test]
async fn test_session_token_round_trip() {
    let h = Harness::new();
    h.mock.respond(
        Method::Get,
        Endpoints::SEARCH,
        Response::json_body(200, &json!({"productos": [], "sessionId": "s-body"}))
            .with_header(SESSION_HEADER, "s-header"),
    );
    h.session.set_auth_token("tok");

    h.api.fetch_all(1).await.unwrap();
    let first = h.mock.last_request().unwrap();
    assert_eq!(first.header_value(SESSION_HEADER), None);
    assert_eq!(first.header_value("Authorization"), Some("Bearer tok"));
    assert_eq!(h.session.session_id().as_deref(), Some("s-body"));

    h.api.fetch_all(1).await.unwrap();
    assert_eq!(
        h.mock.last_request().unwrap().header_value(SESSION_HEADER),
        Some("s-body")
    );
}

#[tokio::test]
async fn test_detail_url_prefers_publication_id() {
    let h = Harness::new();
    let mut listing: Product = serde_json::from_value(product(5)).unwrap();
    assert_eq!(h.api.detail_url(&listing), "http://detail.test/publicaciones/pub-5");

    listing.id = None;
    assert_eq!(h.api.detail_url(&listing), "http://detail.test/publicaciones/p-5");
}
