//! Product Store
//!
//! Ordered in-memory sequence of products. Seeded at startup, grows only
//! through registration; entries are never mutated or removed.

use parking_lot::RwLock;
use shared::models::Product;

#[derive(Default)]
pub struct ProductStore {
    products: RwLock<Vec<Product>>,
}

impl std::fmt::Debug for ProductStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductStore")
            .field("products", &self.products.read().len())
            .finish()
    }
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    /// Exact barcode match; the first inserted entry wins
    pub fn find_by_barcode(&self, barcode: &str) -> Option<Product> {
        self.products
            .read()
            .iter()
            .find(|p| p.barcode == barcode)
            .cloned()
    }

    /// Products whose `category` equals `category`, in insertion order
    pub fn list_by_category(&self, category: &str) -> Vec<Product> {
        self.products
            .read()
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }

    /// Append at the end. Barcodes are not checked for uniqueness.
    pub fn append(&self, product: Product) {
        debug_assert!(!product.barcode.is_empty(), "stored products need a barcode");
        self.products.write().push(product);
    }

    /// Build the next product from `len + 1` and append it.
    ///
    /// Id assignment and append happen under a single write lock, so two
    /// concurrent registrations never observe the same size.
    pub fn append_with<F>(&self, build: F) -> Product
    where
        F: FnOnce(i64) -> Product,
    {
        let mut products = self.products.write();
        let product = build(products.len() as i64 + 1);
        debug_assert!(!product.barcode.is_empty(), "stored products need a barcode");
        products.push(product.clone());
        product
    }

    pub fn len(&self) -> usize {
        self.products.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.read().is_empty()
    }

    /// All products in insertion order
    pub fn snapshot(&self) -> Vec<Product> {
        self.products.read().clone()
    }
}
