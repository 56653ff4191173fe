//! Tests for the entity model

use super::*;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;

// ============================================================================
// Metadata Tests
// ============================================================================

#[test]
fn test_meta_deserialize() {
    let meta: Meta = serde_json::from_value(json!({
        "href": "https://api.stockbook.io/api/v2/entity/product/abc",
        "type": "product",
        "mediaType": "application/json"
    }))
    .unwrap();

    assert_eq!(meta.kind.as_deref(), Some("product"));
    assert_eq!(meta.media_type.as_deref(), Some("application/json"));
}

#[test]
fn test_list_meta_deserialize() {
    let meta: ListMeta = serde_json::from_value(json!({
        "href": "https://api.stockbook.io/api/v2/entity/product",
        "type": "product",
        "size": 250,
        "limit": 100,
        "offset": 0
    }))
    .unwrap();

    assert_eq!(meta.size, 250);
    assert_eq!(meta.limit, Some(100));
    assert_eq!(meta.offset, Some(0));
}

#[test]
fn test_list_meta_missing_fields_default() {
    let meta: ListMeta = serde_json::from_value(json!({})).unwrap();
    assert_eq!(meta.size, 0);
    assert!(meta.href.is_none());
    assert!(meta.limit.is_none());
}

#[test]
fn test_page_response_deserialize() {
    let page: PageResponse = serde_json::from_value(json!({
        "meta": { "size": 2 },
        "rows": [{ "name": "a" }, { "name": "b" }]
    }))
    .unwrap();

    assert_eq!(page.meta.size, 2);
    assert_eq!(page.rows.len(), 2);
}

#[test]
fn test_page_response_rows_default_empty() {
    let page: PageResponse = serde_json::from_value(json!({
        "meta": { "size": 0 }
    }))
    .unwrap();

    assert!(page.rows.is_empty());
}

// ============================================================================
// Row Conversion Tests
// ============================================================================

#[test]
fn test_rows_into_entities() {
    let rows = vec![
        json!({ "id": "p1", "name": "Widget" }),
        json!({ "id": "p2", "name": "Gadget", "archived": true }),
    ];

    let products: Vec<Product> = rows_into_entities(rows).unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].name.as_deref(), Some("Widget"));
    assert_eq!(products[1].archived, Some(true));
}

#[test]
fn test_rows_into_entities_bad_row_names_entity() {
    let rows = vec![json!({ "archived": "not-a-bool" })];

    let err = rows_into_entities::<Product>(rows).unwrap_err();
    assert!(matches!(
        err,
        crate::Error::Decode { ref entity, .. } if entity == "product"
    ));
}

// ============================================================================
// EntityList Tests
// ============================================================================

#[test]
fn test_entity_list_accessors() {
    let meta = ListMeta {
        size: 10,
        ..ListMeta::default()
    };
    let list = EntityList::new(vec![1, 2, 3], meta);

    assert_eq!(list.len(), 3);
    assert!(!list.is_empty());
    assert_eq!(list.rows(), &[1, 2, 3]);
    assert_eq!(list.meta().size, 10);
}

#[test]
fn test_entity_list_merge_preserves_order_and_meta() {
    let first_meta = ListMeta {
        size: 5,
        offset: Some(0),
        ..ListMeta::default()
    };
    let later_meta = ListMeta {
        size: 5,
        offset: Some(100),
        ..ListMeta::default()
    };

    let mut list = EntityList::new(vec!["a", "b"], first_meta);
    list.merge(EntityList::new(vec!["c", "d", "e"], later_meta));

    assert_eq!(list.rows(), &["a", "b", "c", "d", "e"]);
    // First page's metadata wins
    assert_eq!(list.meta().offset, Some(0));
}

#[test]
fn test_entity_list_iteration() {
    let list = EntityList::new(vec![10, 20], ListMeta::default());

    let by_ref: Vec<i32> = (&list).into_iter().copied().collect();
    assert_eq!(by_ref, vec![10, 20]);

    let owned: Vec<i32> = list.into_iter().collect();
    assert_eq!(owned, vec![10, 20]);
}

// ============================================================================
// Model Tests
// ============================================================================

#[test]
fn test_product_deserialize_with_moment() {
    let product: Product = serde_json::from_value(json!({
        "meta": { "type": "product" },
        "id": "p1",
        "name": "Widget",
        "article": "W-100",
        "updated": "2026-03-05 12:30:45.123"
    }))
    .unwrap();

    let expected = NaiveDate::from_ymd_opt(2026, 3, 5)
        .unwrap()
        .and_hms_milli_opt(12, 30, 45, 123)
        .unwrap();
    assert_eq!(product.updated, Some(expected));
    assert_eq!(product.article.as_deref(), Some("W-100"));
}

#[test]
fn test_moment_without_millis() {
    let product: Product = serde_json::from_value(json!({
        "updated": "2026-03-05 12:30:45"
    }))
    .unwrap();

    let expected = NaiveDate::from_ymd_opt(2026, 3, 5)
        .unwrap()
        .and_hms_opt(12, 30, 45)
        .unwrap();
    assert_eq!(product.updated, Some(expected));
}

#[test]
fn test_counterparty_deserialize() {
    let agent: Counterparty = serde_json::from_value(json!({
        "id": "c1",
        "name": "Acme LLC",
        "legalTitle": "Acme Limited Liability Company",
        "email": "sales@acme.example"
    }))
    .unwrap();

    assert_eq!(agent.legal_title.as_deref(), Some("Acme Limited Liability Company"));
    assert!(agent.created.is_none());
}

#[test]
fn test_customer_order_deserialize() {
    let order: CustomerOrder = serde_json::from_value(json!({
        "name": "00042",
        "sum": 125_000,
        "moment": "2026-08-01 09:15:00.000",
        "applicable": true
    }))
    .unwrap();

    assert_eq!(order.sum, Some(125_000));
    assert!(order.moment.is_some());
}

#[test]
fn test_entity_names() {
    assert_eq!(Product::NAME, "product");
    assert_eq!(Counterparty::NAME, "counterparty");
    assert_eq!(Store::NAME, "store");
    assert_eq!(CustomerOrder::NAME, "customerorder");
}
