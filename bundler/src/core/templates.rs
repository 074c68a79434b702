//! Template shaping: raw bundle-service records into [`BundleTemplate`]s
//!
//! A record only has to carry an id to become a template. Fields of the
//! wrong type are treated as absent instead of rejecting the whole list.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use shared::{BundleTemplate, Requirement};
use crate::core::catalog::{RawId, RawPrice, RawText};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTemplate {
    #[serde(default)]
    id: Option<RawId>,
    #[serde(default)]
    slug: Option<RawId>,
    #[serde(default)]
    name: Option<RawText>,
    #[serde(default)]
    description: Option<RawText>,
    #[serde(default)]
    discount_percent: Option<RawPrice>,
    #[serde(default)]
    fixed_price: Option<RawPrice>,
    #[serde(default)]
    image_url: Option<RawText>,
    #[serde(default)]
    items: Option<RawItems>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawItems {
    List(Vec<Value>),
    Other(Value),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRequirement {
    #[serde(default)]
    product_id: Option<RawId>,
    #[serde(default)]
    category: Option<RawText>,
    #[serde(default)]
    keyword: Option<RawText>,
}

fn usable_id(raw: Option<&RawId>) -> Option<String> {
    match raw {
        Some(RawId::Id(id)) if !id.is_empty() => Some(id.to_string()),
        _ => None,
    }
}

fn text(raw: &Option<RawText>) -> Option<String> {
    raw.as_ref().and_then(RawText::text).map(str::to_string)
}

/// Shape one slot. A slot that is not an object keeps its place with no constraints.
fn shape_requirement(item: &Value) -> Requirement {
    let raw = RawRequirement::deserialize(item).unwrap_or_default();

    Requirement {
        product_id: match raw.product_id {
            Some(RawId::Id(id)) => Some(id),
            _ => None,
        },
        category: text(&raw.category),
        keyword: text(&raw.keyword),
    }
}

impl RawTemplate {
    fn into_template(self) -> Option<BundleTemplate> {
        let id = usable_id(self.id.as_ref()).or_else(|| usable_id(self.slug.as_ref()))?;

        let discount_percent = self
            .discount_percent
            .as_ref()
            .and_then(RawPrice::amount)
            .unwrap_or(0.0);

        // Only a JSON number sets a fixed price
        let fixed_price = match self.fixed_price {
            Some(RawPrice::Number(amount)) if amount.is_finite() => Some(amount),
            _ => None,
        };

        let items = match &self.items {
            Some(RawItems::List(items)) => items.iter().map(shape_requirement).collect(),
            _ => Vec::new(),
        };

        Some(BundleTemplate {
            id,
            name: text(&self.name).unwrap_or_default(),
            description: text(&self.description).unwrap_or_default(),
            discount_percent,
            fixed_price,
            image_url: text(&self.image_url).filter(|url| !url.is_empty()),
            items,
        })
    }
}

/// Shape a single raw record; `None` when it is not an object or has no id
pub fn shape_template(record: &Value) -> Option<BundleTemplate> {
    if !record.is_object() {
        return None;
    }
    RawTemplate::deserialize(record).ok()?.into_template()
}

/// Shape a template list, keeping the records that identify a template
pub fn shape_templates(records: &[Value]) -> Vec<BundleTemplate> {
    let templates: Vec<BundleTemplate> = records.iter().filter_map(shape_template).collect();

    if templates.len() < records.len() {
        debug!(
            "Skipped {} bundle records without a usable id",
            records.len() - templates.len()
        );
    }

    templates
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::ProductId;

    #[test]
    fn test_well_formed_record() {
        let record = json!({
            "id": "summer",
            "name": "Summer Shred",
            "description": "Cut season",
            "discountPercent": 20,
            "fixedPrice": 49.9,
            "imageUrl": "summer.png",
            "items": [{"productId": 3}, {"keyword": "bcaa", "category": "Recovery"}]
        });

        let template = shape_template(&record).unwrap();

        assert_eq!(template.id, "summer");
        assert_eq!(template.name, "Summer Shred");
        assert_eq!(template.description, "Cut season");
        assert_eq!(template.discount_percent, 20.0);
        assert_eq!(template.fixed_price, Some(49.9));
        assert_eq!(template.image_url.as_deref(), Some("summer.png"));
        assert_eq!(template.items[0].exact_id(), Some(&ProductId::from("3")));
        assert_eq!(template.items[1].keyword(), Some("bcaa"));
        assert_eq!(template.items[1].category(), Some("Recovery"));
    }

    #[test]
    fn test_odd_field_types_are_absent() {
        let record = json!({
            "id": 12,
            "name": ["not", "text"],
            "discountPercent": "15",
            "fixedPrice": "49.9",
            "imageUrl": 5,
            "items": {"productId": 1}
        });

        let template = shape_template(&record).unwrap();

        assert_eq!(template.id, "12");
        assert_eq!(template.name, "");
        assert_eq!(template.discount_percent, 15.0);
        assert_eq!(template.fixed_price, None);
        assert_eq!(template.image_url, None);
        assert!(template.items.is_empty());
    }

    #[test]
    fn test_unparsable_discount_is_zero() {
        let record = json!({"id": "x", "discountPercent": "lots", "fixedPrice": null});
        let template = shape_template(&record).unwrap();
        assert_eq!(template.discount_percent, 0.0);
        assert_eq!(template.fixed_price, None);
    }

    #[test]
    fn test_slug_stands_in_for_missing_id() {
        let template = shape_template(&json!({"slug": "from-slug", "name": "S"})).unwrap();
        assert_eq!(template.id, "from-slug");
    }

    #[test]
    fn test_odd_slots_keep_their_place() {
        let record = json!({
            "id": "x",
            "items": ["whey", {"keyword": 7, "category": "Protein"}, null]
        });

        let template = shape_template(&record).unwrap();

        assert_eq!(template.items.len(), 3);
        assert_eq!(template.items[0], Requirement::default());
        assert_eq!(template.items[1].keyword(), None);
        assert_eq!(template.items[1].category(), Some("Protein"));
        assert_eq!(template.items[2], Requirement::default());
    }

    #[test]
    fn test_list_keeps_good_records() {
        let records = vec![
            json!({"id": "good", "name": "Good", "discountPercent": 10}),
            json!({"id": "odd", "discountPercent": "15", "fixedPrice": "49.9"}),
            json!({"name": "No id"}),
            json!({"id": ""}),
            json!("not a record"),
        ];

        let templates = shape_templates(&records);
        let ids: Vec<&str> = templates.iter().map(|t| t.id.as_str()).collect();

        assert_eq!(ids, vec!["good", "odd"]);
    }
}
