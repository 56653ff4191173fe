//! End-to-end tests against a mock API server

use stockbook::{
    Credentials, Expand, FilterQuery, HttpClientConfig, Product, QuerySpec, Stockbook,
};
use serde_json::json;
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sklad(uri: &str, credentials: Credentials) -> Stockbook {
    let config = HttpClientConfig::builder()
        .base_url(uri)
        .no_rate_limit()
        .max_retries(0)
        .build();
    Stockbook::with_config(config, credentials)
}

fn product_page(total: u64, first: usize, count: usize) -> serde_json::Value {
    let rows: Vec<_> = (first..first + count)
        .map(|i| {
            json!({
                "meta": { "type": "product" },
                "id": format!("prod-{i}"),
                "name": format!("Product {i}"),
                "article": format!("A-{i:04}"),
                "updated": "2026-08-01 10:00:00.000"
            })
        })
        .collect();
    json!({
        "meta": { "type": "product", "size": total, "limit": 100, "offset": first },
        "rows": rows
    })
}

#[tokio::test]
async fn fetches_typed_products_across_pages() {
    let server = MockServer::start().await;

    for (offset, count) in [(0usize, 100), (100, 100), (200, 50)] {
        Mock::given(method("GET"))
            .and(path("/entity/product"))
            .and(query_param("offset", offset.to_string()))
            .and(query_param("limit", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(product_page(250, offset, count)))
            .expect(1)
            .mount(&server)
            .await;
    }

    let sklad = sklad(&server.uri(), Credentials::Anonymous);
    let spec = QuerySpec::new().with_limit(100);
    let products = sklad.query::<Product>().get(Some(spec)).await.unwrap();

    assert_eq!(products.len(), 250);
    assert_eq!(products.meta().size, 250);
    assert_eq!(products.rows()[0].id.as_deref(), Some("prod-0"));
    assert_eq!(products.rows()[249].id.as_deref(), Some("prod-249"));
    assert!(products.rows()[0].updated.is_some());
}

#[tokio::test]
async fn credentials_sent_with_every_page() {
    let server = MockServer::start().await;

    for (offset, count) in [(0usize, 100), (100, 20)] {
        Mock::given(method("GET"))
            .and(path("/entity/product"))
            .and(query_param("offset", offset.to_string()))
            .and(header_exists("authorization"))
            .respond_with(ResponseTemplate::new(200).set_body_json(product_page(120, offset, count)))
            .expect(1)
            .mount(&server)
            .await;
    }

    let sklad = sklad(&server.uri(), Credentials::basic("admin@acme", "secret"));
    let spec = QuerySpec::new().with_limit(100);
    let products = sklad.query::<Product>().get(Some(spec)).await.unwrap();

    assert_eq!(products.len(), 120);
}

#[tokio::test]
async fn filtered_search_with_expand_and_cap() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/entity/product"))
        .and(query_param("filter", "archived=false"))
        .and(query_param("expand", "supplier"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_page(500, 0, 100)))
        .expect(1)
        .mount(&server)
        .await;

    let sklad = sklad(&server.uri(), Credentials::token("tok_123"));
    let filter = FilterQuery::new().eq("archived", "false");
    let spec = QuerySpec::new().with_limit(100).with_max_results(100);

    let products = sklad
        .query::<Product>()
        .with_expand(Expand::from("supplier"))
        .filter(Some(&filter), Some(spec))
        .await
        .unwrap();

    // max_results=100 stops after the first request (100 <= 1 * 100)
    assert_eq!(products.len(), 100);
    assert_eq!(products.meta().size, 500);
}

#[tokio::test]
async fn unauthorized_error_propagates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/entity/product"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let sklad = sklad(&server.uri(), Credentials::Anonymous);
    let err = sklad.query::<Product>().get(None).await.unwrap_err();

    assert!(matches!(
        err,
        stockbook::Error::HttpStatus { status: 401, .. }
    ));
}
