//! Open Food Facts wire types and normalization into [`Product`]

use serde::Deserialize;
use shared::models::{CategoryKey, Product, ProductId};

pub const UNNAMED_PRODUCT: &str = "Unnamed food product";
pub const UNKNOWN_BRAND: &str = "Unknown brand";
pub const PRICE_PLACEHOLDER: &str = "Consult store";
pub const NO_NUTRITION_INFO: &str = "Nutrition information unavailable";

/// `status` value meaning the barcode is known
pub const STATUS_FOUND: i64 = 1;

/// Response of `GET /api/v0/product/{barcode}.json`
#[derive(Debug, Clone, Deserialize)]
pub struct ProductResponse {
    #[serde(default)]
    pub status: i64,
    #[serde(default)]
    pub status_verbose: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub product: Option<RemoteProduct>,
}

impl ProductResponse {
    /// Normalized product, or `None` when the database does not know it
    pub fn into_product(self, barcode: &str) -> Option<Product> {
        if self.status != STATUS_FOUND {
            return None;
        }
        self.product.map(|p| p.into_product(barcode))
    }
}

/// Product record as the remote database returns it
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteProduct {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub brands: Option<String>,
    #[serde(default)]
    pub generic_name: Option<String>,
    #[serde(default)]
    pub ingredients_text: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_front_url: Option<String>,
}

impl RemoteProduct {
    /// Map to the internal shape.
    ///
    /// The remote taxonomy has no counterpart locally, so every remote
    /// product lands in the general foods bucket. Blank strings count as
    /// missing.
    pub fn into_product(self, barcode: &str) -> Product {
        let category = CategoryKey::GeneralFoods;
        Product {
            id: ProductId::Barcode(barcode.to_string()),
            barcode: barcode.to_string(),
            name: non_blank(self.product_name).unwrap_or_else(|| UNNAMED_PRODUCT.to_string()),
            brand: non_blank(self.brands).unwrap_or_else(|| UNKNOWN_BRAND.to_string()),
            category: category.key().to_string(),
            category_name: category.display_name().to_string(),
            price: PRICE_PLACEHOLDER.to_string(),
            description: non_blank(self.generic_name)
                .or_else(|| non_blank(self.ingredients_text))
                .unwrap_or_else(|| NO_NUTRITION_INFO.to_string()),
            image: non_blank(self.image_url).or_else(|| non_blank(self.image_front_url)),
            in_stock: true,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_record() {
        let json = r#"{
            "status": 1,
            "code": "3017620429484",
            "product": {
                "product_name": "Nutella",
                "brands": "Ferrero",
                "generic_name": "Hazelnut spread",
                "ingredients_text": "Sugar, palm oil",
                "image_url": "https://images/front.jpg",
                "image_front_url": "https://images/front_small.jpg"
            }
        }"#;
        let response: ProductResponse = serde_json::from_str(json).unwrap();
        let product = response.into_product("3017620429484").unwrap();

        assert_eq!(product.id, ProductId::Barcode("3017620429484".to_string()));
        assert_eq!(product.name, "Nutella");
        assert_eq!(product.brand, "Ferrero");
        assert_eq!(product.category, "alimentos");
        assert_eq!(product.category_name, "General Foods");
        assert_eq!(product.price, PRICE_PLACEHOLDER);
        assert_eq!(product.description, "Hazelnut spread");
        assert_eq!(product.image.as_deref(), Some("https://images/front.jpg"));
        assert!(product.in_stock);
    }

    #[test]
    fn test_placeholders_for_missing_fields() {
        let product = RemoteProduct::default().into_product("123");
        assert_eq!(product.name, UNNAMED_PRODUCT);
        assert_eq!(product.brand, UNKNOWN_BRAND);
        assert_eq!(product.description, NO_NUTRITION_INFO);
        assert!(product.image.is_none());
    }

    #[test]
    fn test_description_falls_back_to_ingredients() {
        let product = RemoteProduct {
            generic_name: Some("   ".to_string()),
            ingredients_text: Some("Water, salt".to_string()),
            image_front_url: Some("https://images/front_small.jpg".to_string()),
            ..Default::default()
        }
        .into_product("123");
        assert_eq!(product.description, "Water, salt");
        assert_eq!(
            product.image.as_deref(),
            Some("https://images/front_small.jpg")
        );
    }

    #[test]
    fn test_empty_name_is_placeholder() {
        let product = RemoteProduct {
            product_name: Some(String::new()),
            brands: Some(String::new()),
            ..Default::default()
        }
        .into_product("123");
        assert_eq!(product.name, UNNAMED_PRODUCT);
        assert_eq!(product.brand, UNKNOWN_BRAND);
    }

    #[test]
    fn test_status_zero_is_not_found() {
        let json = r#"{"status": 0, "status_verbose": "product not found", "code": "000"}"#;
        let response: ProductResponse = serde_json::from_str(json).unwrap();
        assert!(response.into_product("000").is_none());
    }

    #[test]
    fn test_found_without_record_is_not_found() {
        let json = r#"{"status": 1}"#;
        let response: ProductResponse = serde_json::from_str(json).unwrap();
        assert!(response.into_product("000").is_none());
    }
}
