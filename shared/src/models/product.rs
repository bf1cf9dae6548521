//! Product Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Product identifier
///
/// Local entries carry a sequential integer; products resolved by the
/// remote database and not stored locally are identified by their barcode.
/// Serialized untagged, as a JSON number or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Local(i64),
    Barcode(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(id) => write!(f, "{}", id),
            Self::Barcode(code) => f.write_str(code),
        }
    }
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    /// Lookup key, never empty for stored products
    pub barcode: String,
    pub name: String,
    pub brand: String,
    /// Raw category key as supplied by the source
    pub category: String,
    /// Display label resolved through [`super::CategoryKey`]
    pub category_name: String,
    /// Free text: remote products carry a placeholder instead of a price
    pub price: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    pub in_stock: bool,
}

/// Registration form payload
///
/// Required fields are `name`, `brand` and `price`; the rest fall back to
/// defaults when blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRegistration {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ProductRegistration {
    /// Names of required fields that are empty after trimming
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("brand", &self.brand),
            ("price", &self.price),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: ProductId::Local(1),
            barcode: "7891000055123".to_string(),
            name: "Arroz Tio João Tipo 1".to_string(),
            brand: "Tio João".to_string(),
            category: "graos".to_string(),
            category_name: "Grains & Cereals".to_string(),
            price: "8.99".to_string(),
            description: "Arroz branco tipo 1".to_string(),
            image: None,
            in_stock: true,
        }
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["categoryName"], "Grains & Cereals");
        assert_eq!(json["inStock"], true);
        assert!(json["image"].is_null());
    }

    #[test]
    fn test_product_id_untagged() {
        let local: ProductId = serde_json::from_str("6").unwrap();
        assert_eq!(local, ProductId::Local(6));

        let remote: ProductId = serde_json::from_str("\"3017620429484\"").unwrap();
        assert_eq!(remote, ProductId::Barcode("3017620429484".to_string()));
        assert_eq!(remote.to_string(), "3017620429484");
    }

    #[test]
    fn test_registration_missing_fields() {
        let form = ProductRegistration {
            name: "Tapioca".to_string(),
            brand: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(form.missing_fields(), vec!["brand", "price"]);

        let complete = ProductRegistration {
            name: "Tapioca".to_string(),
            brand: "Lisa".to_string(),
            price: "45.90".to_string(),
            ..Default::default()
        };
        assert!(complete.missing_fields().is_empty());
    }

    #[test]
    fn test_registration_deserialize_partial() {
        let json = r#"{"name":"X","brand":"Y","price":"1.00","imageUrl":"https://img/x.png"}"#;
        let form: ProductRegistration = serde_json::from_str(json).unwrap();
        assert_eq!(form.image_url.as_deref(), Some("https://img/x.png"));
        assert!(form.description.is_none());
        assert_eq!(form.category, "");
    }
}
