//! Registration Service
//!
//! Turns a submitted form into a stored product under the scanned barcode.

use std::sync::Arc;

use shared::models::{CategoryKey, Product, ProductId, ProductRegistration};

use crate::catalog::ProductStore;
use crate::utils::{AppError, AppResult};

/// Description stored when the form leaves it blank
pub const DEFAULT_DESCRIPTION: &str = "No description";

#[derive(Debug, Clone)]
pub struct RegistrationService {
    store: Arc<ProductStore>,
}

impl RegistrationService {
    pub fn new(store: Arc<ProductStore>) -> Self {
        Self { store }
    }

    /// Validate and append a product.
    ///
    /// Fails with a validation error naming every missing field; the store
    /// is untouched in that case. Duplicate barcodes are accepted, the
    /// earlier entry keeps answering store lookups.
    pub async fn register(&self, barcode: &str, form: ProductRegistration) -> AppResult<Product> {
        let barcode = barcode.trim();
        if barcode.is_empty() {
            return Err(AppError::invalid_barcode());
        }

        let missing = form.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::missing_fields(&missing));
        }

        let raw_category = form.category.trim();
        let key = CategoryKey::parse(raw_category);
        // Recognized keys and aliases are stored canonically; unknown keys
        // are kept as typed
        let category = if key != CategoryKey::Other || raw_category.is_empty() {
            key.key().to_string()
        } else {
            raw_category.to_string()
        };

        let product = self.store.append_with(|id| Product {
            id: ProductId::Local(id),
            barcode: barcode.to_string(),
            name: form.name.trim().to_string(),
            brand: form.brand.trim().to_string(),
            category,
            category_name: key.display_name().to_string(),
            price: form.price.trim().to_string(),
            description: non_blank(form.description)
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            image: non_blank(form.image_url),
            in_stock: true,
        });

        tracing::info!(barcode, id = %product.id, name = %product.name, "Product registered");
        Ok(product)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;
    use shared::ErrorCode;

    fn service() -> (RegistrationService, Arc<ProductStore>) {
        let store = Arc::new(ProductStore::with_products(seed::products()));
        (RegistrationService::new(store.clone()), store)
    }

    fn form(name: &str, brand: &str, price: &str, category: &str) -> ProductRegistration {
        ProductRegistration {
            name: name.to_string(),
            brand: brand.to_string(),
            price: price.to_string(),
            category: category.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_register_then_find() {
        let (service, store) = service();
        let product = service
            .register("7899999999999", form("X", "Y", "1.00", "outros"))
            .await
            .unwrap();

        assert_eq!(product.id, ProductId::Local(6));
        let found = store.find_by_barcode("7899999999999").unwrap();
        assert_eq!(found.name, "X");
        assert_eq!(found, product);
    }

    #[tokio::test]
    async fn test_register_maps_category_alias() {
        let (service, _) = service();
        let product = service
            .register("0000000000000", form("Tapioca", "Lisa", "45.90", "grãos"))
            .await
            .unwrap();

        assert_eq!(product.category, "graos");
        assert_eq!(product.category_name, "Grains & Cereals");
        assert!(product.in_stock);
        assert_eq!(product.description, DEFAULT_DESCRIPTION);
        assert!(product.image.is_none());
    }

    #[tokio::test]
    async fn test_unknown_category_is_other() {
        let (service, _) = service();
        let product = service
            .register("123", form("Camarão", "Mar", "30.00", "frutos do mar"))
            .await
            .unwrap();
        assert_eq!(product.category, "frutos do mar");
        assert_eq!(product.category_name, "Other");
    }

    #[tokio::test]
    async fn test_blank_category_is_stored_as_other() {
        let (service, _) = service();
        let product = service
            .register("123", form("Sal", "Cisne", "2.50", "  "))
            .await
            .unwrap();
        assert_eq!(product.category, "outros");
        assert_eq!(product.category_name, "Other");
    }

    #[tokio::test]
    async fn test_optional_fields_are_trimmed() {
        let (service, _) = service();
        let mut registration = form("  Açúcar  ", "União", "4.10", "alimentos");
        registration.description = Some("  Refinado ".to_string());
        registration.image_url = Some("   ".to_string());

        let product = service.register(" 789 ", registration).await.unwrap();
        assert_eq!(product.barcode, "789");
        assert_eq!(product.name, "Açúcar");
        assert_eq!(product.description, "Refinado");
        assert!(product.image.is_none());
        assert_eq!(product.category_name, "General Foods");
    }

    #[tokio::test]
    async fn test_empty_name_is_rejected_without_mutation() {
        let (service, store) = service();
        let err = service
            .register("7899999999999", form("", "Y", "1.00", "outros"))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::RequiredField);
        assert!(err.is_validation());
        assert_eq!(store.len(), 5);
        assert!(store.find_by_barcode("7899999999999").is_none());
    }

    #[tokio::test]
    async fn test_every_missing_field_is_named() {
        let (service, _) = service();
        let err = service
            .register("1", form("  ", "", "\t", ""))
            .await
            .unwrap_err();

        let missing = err.details.unwrap()["missing"].clone();
        assert_eq!(missing, serde_json::json!(["name", "brand", "price"]));
    }

    #[tokio::test]
    async fn test_blank_barcode_is_rejected() {
        let (service, store) = service();
        let err = service
            .register("  ", form("X", "Y", "1.00", "outros"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::BarcodeInvalid);
        assert_eq!(store.len(), 5);
    }

    #[tokio::test]
    async fn test_duplicate_barcode_is_accepted() {
        let (service, store) = service();
        let product = service
            .register("7891000055123", form("Other Rice", "Z", "7.00", "graos"))
            .await
            .unwrap();

        assert_eq!(product.id, ProductId::Local(6));
        assert_eq!(store.len(), 6);
        assert_eq!(
            store.find_by_barcode("7891000055123").unwrap().name,
            "Arroz Tio João Tipo 1"
        );
    }
}
