//! Built-in entity models
//!
//! A representative subset of the platform's entity set. Fields are
//! optional throughout: list responses omit anything unset, and expand
//! directives change which relations arrive inline. Define your own
//! types and implement [`Entity`] for endpoints not covered here.

use super::types::{moment, Entity, Meta};
use chrono::NaiveDateTime;
use serde::Deserialize;

/// A product in the catalog
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub meta: Option<Meta>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    /// Vendor article number
    #[serde(default)]
    pub article: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub archived: Option<bool>,
    #[serde(default, deserialize_with = "moment::deserialize")]
    pub updated: Option<NaiveDateTime>,
}

impl Entity for Product {
    const NAME: &'static str = "product";
}

/// A counterparty: customer or supplier
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counterparty {
    #[serde(default)]
    pub meta: Option<Meta>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Registered legal name, when distinct from the display name
    #[serde(default)]
    pub legal_title: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub archived: Option<bool>,
    #[serde(default, deserialize_with = "moment::deserialize")]
    pub created: Option<NaiveDateTime>,
}

impl Entity for Counterparty {
    const NAME: &'static str = "counterparty";
}

/// A warehouse
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    #[serde(default)]
    pub meta: Option<Meta>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    /// Slash-joined path of parent store groups
    #[serde(default)]
    pub path_name: Option<String>,
}

impl Entity for Store {
    const NAME: &'static str = "store";
}

/// A customer order
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerOrder {
    #[serde(default)]
    pub meta: Option<Meta>,
    #[serde(default)]
    pub id: Option<String>,
    /// Order number
    #[serde(default)]
    pub name: Option<String>,
    /// Order total in minor currency units
    #[serde(default)]
    pub sum: Option<i64>,
    /// When the order was placed
    #[serde(default, deserialize_with = "moment::deserialize")]
    pub moment: Option<NaiveDateTime>,
    #[serde(default)]
    pub applicable: Option<bool>,
}

impl Entity for CustomerOrder {
    const NAME: &'static str = "customerorder";
}
