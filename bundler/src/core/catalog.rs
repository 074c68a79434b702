//! Catalog shaping: the single boundary where raw catalog payloads become products
//!
//! Catalog services disagree on field names and on how the product list is
//! wrapped. Everything variable about the outside world is absorbed here so
//! the resolver only ever sees normalized [`Product`]s.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use shared::{Product, ProductId};
use crate::core::normalizer::normalize;

/// Object keys that may wrap the product array, checked in order
const WRAPPER_KEYS: [&str; 3] = ["products", "data", "items"];

/// Raw product record as sent by the catalog service
#[derive(Debug, Default, Deserialize)]
struct RawProduct {
    #[serde(default)]
    id: Option<RawId>,
    #[serde(default)]
    name: Option<RawText>,
    #[serde(default)]
    category: Option<RawCategory>,
    #[serde(default)]
    category_name: Option<RawText>,
    #[serde(default, rename = "categoryName")]
    category_name_camel: Option<RawText>,
    #[serde(default)]
    price: Option<RawPrice>,
    #[serde(default)]
    current_price: Option<RawPrice>,
    #[serde(default, rename = "salePrice")]
    sale_price: Option<RawPrice>,
    #[serde(default)]
    image_url: Option<RawText>,
    #[serde(default, rename = "imageUrl")]
    image_url_camel: Option<RawText>,
    #[serde(default)]
    image: Option<RawText>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawId {
    Id(ProductId),
    Other(Value),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawText {
    Text(String),
    Other(Value),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCategory {
    Label(String),
    Object {
        #[serde(default)]
        name: Option<RawText>,
        #[serde(default)]
        slug: Option<RawText>,
    },
    Other(Value),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawPrice {
    Number(f64),
    Text(String),
    Other(Value),
}

impl RawText {
    pub(crate) fn text(&self) -> Option<&str> {
        match self {
            RawText::Text(text) => Some(text),
            RawText::Other(_) => None,
        }
    }
}

impl RawCategory {
    fn label(&self) -> Option<&str> {
        match self {
            RawCategory::Label(label) => Some(label),
            RawCategory::Object { name, slug } => Some(
                name.as_ref()
                    .and_then(RawText::text)
                    .or_else(|| slug.as_ref().and_then(RawText::text))
                    .unwrap_or(""),
            ),
            RawCategory::Other(_) => None,
        }
    }
}

impl RawPrice {
    pub(crate) fn amount(&self) -> Option<f64> {
        let amount = match self {
            RawPrice::Number(n) => Some(*n),
            RawPrice::Text(text) => text.trim().parse::<f64>().ok(),
            RawPrice::Other(_) => None,
        };
        amount.filter(|n| n.is_finite())
    }
}

impl RawProduct {
    fn into_product(self) -> Option<Product> {
        let id = match self.id {
            Some(RawId::Id(id)) if !id.is_empty() => id,
            _ => return None,
        };

        let raw_category = self
            .category
            .as_ref()
            .and_then(RawCategory::label)
            .or_else(|| self.category_name.as_ref().and_then(RawText::text))
            .or_else(|| self.category_name_camel.as_ref().and_then(RawText::text))
            .unwrap_or("");

        let price = [&self.price, &self.current_price, &self.sale_price]
            .into_iter()
            .find_map(|candidate| candidate.as_ref().and_then(RawPrice::amount))
            .unwrap_or(0.0)
            .max(0.0);

        let image_url = [&self.image_url, &self.image_url_camel, &self.image]
            .into_iter()
            .find_map(|candidate| candidate.as_ref().and_then(RawText::text))
            .unwrap_or("")
            .to_string();

        let name = self
            .name
            .as_ref()
            .and_then(RawText::text)
            .unwrap_or("")
            .to_string();

        Some(Product {
            id,
            name,
            category: normalize(raw_category),
            price,
            image_url,
        })
    }
}

/// Locate the product array inside a catalog payload
///
/// Accepts a bare array, or an object carrying the array under `products`,
/// `data` or `items`, checked in that order.
pub fn extract_records(payload: &Value) -> &[Value] {
    match payload {
        Value::Array(records) => records.as_slice(),
        Value::Object(map) => WRAPPER_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_array))
            .map(Vec::as_slice)
            .unwrap_or(&[]),
        _ => &[],
    }
}

/// Shape a single raw record; `None` when it cannot identify a product
pub fn shape_product(record: &Value) -> Option<Product> {
    if !record.is_object() {
        return None;
    }
    RawProduct::deserialize(record).ok()?.into_product()
}

/// Shape a raw catalog payload into normalized products, preserving catalog order
pub fn shape_catalog(payload: &Value) -> Vec<Product> {
    let records = extract_records(payload);
    let products: Vec<Product> = records.iter().filter_map(shape_product).collect();

    if products.len() < records.len() {
        debug!(
            "Skipped {} catalog records without a usable id",
            records.len() - products.len()
        );
    }

    products
}
