//! Product records as they live in the persistent file.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::fmt;
use utoipa::ToSchema;

/// Store-assigned product identifier.
pub type ProductId = u64;

/// Price as it was supplied: either a JSON number or numeric-like text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Price {
    Number(serde_json::Number),
    Text(String),
}

impl Price {
    fn is_present(&self) -> bool {
        match self {
            Price::Number(n) => !is_zero(n),
            Price::Text(s) => !s.is_empty(),
        }
    }
}

impl From<&str> for Price {
    fn from(s: &str) -> Self {
        Price::Text(s.to_string())
    }
}

impl From<u64> for Price {
    fn from(n: u64) -> Self {
        Price::Number(n.into())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Number(n) => write!(f, "{}", n),
            Price::Text(s) => f.write_str(s),
        }
    }
}

/// Units in stock: an integer, or integer-like text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Stock {
    Count(i64),
    Text(String),
}

impl Stock {
    fn is_present(&self) -> bool {
        match self {
            Stock::Count(n) => *n != 0,
            Stock::Text(s) => !s.is_empty(),
        }
    }
}

impl From<i64> for Stock {
    fn from(n: i64) -> Self {
        Stock::Count(n)
    }
}

impl From<&str> for Stock {
    fn from(s: &str) -> Self {
        Stock::Text(s.to_string())
    }
}

fn is_zero(n: &serde_json::Number) -> bool {
    n.as_f64().map(|v| v == 0.0).unwrap_or(false)
}

/// A product body without an id: what callers hand to `create` and `update`.
///
/// Text fields default to empty when absent from the JSON input, which the
/// presence check treats the same as an empty value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, ToSchema)]
pub struct NewProduct {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub price: Option<Price>,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub stock: Option<Stock>,
    /// Keys beyond the six known fields, kept so rewriting the file preserves them.
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, JsonValue>,
}

impl NewProduct {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<Price>,
        thumbnail: impl Into<String>,
        code: impl Into<String>,
        stock: impl Into<Stock>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            price: Some(price.into()),
            thumbnail: thumbnail.into(),
            code: code.into(),
            stock: Some(stock.into()),
            extra: Map::new(),
        }
    }

    /// Names of required fields that are missing or empty, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let checks = [
            ("title", !self.title.is_empty()),
            ("description", !self.description.is_empty()),
            ("price", self.price.as_ref().is_some_and(Price::is_present)),
            ("thumbnail", !self.thumbnail.is_empty()),
            ("code", !self.code.is_empty()),
            ("stock", self.stock.as_ref().is_some_and(Stock::is_present)),
        ];
        checks
            .into_iter()
            .filter(|(_, present)| !present)
            .map(|(name, _)| name)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// A stored product. Serialized with `id` first, followed by the body fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub price: Option<Price>,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub stock: Option<Stock>,
    /// Keys beyond the six known fields, kept so rewriting the file preserves them.
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, JsonValue>,
}

impl Product {
    /// Builds a stored record from a body. Any id the body came with is dropped.
    pub fn with_id(id: ProductId, mut body: NewProduct) -> Self {
        body.extra.remove("id");
        Self {
            id,
            title: body.title,
            description: body.description,
            price: body.price,
            thumbnail: body.thumbnail,
            code: body.code,
            stock: body.stock,
            extra: body.extra,
        }
    }

    pub fn body(&self) -> NewProduct {
        NewProduct {
            title: self.title.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
            thumbnail: self.thumbnail.clone(),
            code: self.code.clone(),
            stock: self.stock.clone(),
            extra: self.extra.clone(),
        }
    }
}
