//! Product records returned by the catalog API

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single catalog product. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(deserialize_with = "lenient_text")]
    pub description: String,
    /// Absolute URL or a path relative to the API base
    #[serde(deserialize_with = "lenient_text")]
    pub image: String,
    #[serde(deserialize_with = "lenient_stars")]
    pub stars: u32,
    /// Display text; numbers keep their JSON spelling
    #[serde(deserialize_with = "lenient_text")]
    pub price: String,
}

/// Extract the product list from a response body.
///
/// Anything other than an object with a `products` array yields no products.
pub fn parse_products(body: Value) -> Vec<Product> {
    let items = match body {
        Value::Object(mut map) => match map.remove("products") {
            Some(Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    items
        .into_iter()
        .map(|item| {
            serde_json::from_value(item).unwrap_or_else(|e| {
                tracing::debug!("Malformed product entry, using blank card: {}", e);
                Product::default()
            })
        })
        .collect()
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn lenient_stars<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => number_to_stars(&n),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(clamp_stars)
            .unwrap_or(0),
        _ => 0,
    })
}

fn number_to_stars(n: &serde_json::Number) -> u32 {
    if let Some(u) = n.as_u64() {
        u32::try_from(u).unwrap_or(u32::MAX)
    } else {
        n.as_f64().map(clamp_stars).unwrap_or(0)
    }
}

fn clamp_stars(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.trunc().min(u32::MAX as f64) as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_full_record() {
        let products = parse_products(json!({
            "products": [{
                "title": "Cordless Drill",
                "description": "18V with two batteries",
                "image": "/img/drill.png",
                "stars": 4,
                "price": "£89.99",
                "sku": "ignored"
            }]
        }));

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].title, "Cordless Drill");
        assert_eq!(products[0].image, "/img/drill.png");
        assert_eq!(products[0].stars, 4);
        assert_eq!(products[0].price, "£89.99");
    }

    #[test]
    fn test_missing_or_wrong_products_field_is_empty() {
        assert!(parse_products(json!({})).is_empty());
        assert!(parse_products(json!({ "products": null })).is_empty());
        assert!(parse_products(json!({ "products": "drill" })).is_empty());
        assert!(parse_products(json!([{ "title": "x" }])).is_empty());
        assert!(parse_products(json!(null)).is_empty());
    }

    #[test]
    fn test_lenient_fields() {
        let products = parse_products(json!({
            "products": [
                { "title": "a", "price": 12.5, "stars": "3" },
                { "title": "b", "price": null, "stars": 2.9 },
                { "title": "c", "stars": -4 },
                { "stars": "many" }
            ]
        }));

        assert_eq!(products[0].price, "12.5");
        assert_eq!(products[0].stars, 3);
        assert_eq!(products[1].price, "");
        assert_eq!(products[1].stars, 2);
        assert_eq!(products[2].stars, 0);
        assert_eq!(products[3].stars, 0);
        assert_eq!(products[3].title, "");
    }

    #[test]
    fn test_non_object_entry_keeps_count() {
        let products = parse_products(json!({ "products": [{ "title": "a" }, 7, "x"] }));
        assert_eq!(products.len(), 3);
        assert_eq!(products[1], Product::default());
    }
}
