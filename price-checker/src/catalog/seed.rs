//! Initial catalog content loaded at process start

use shared::models::{Category, CategoryKey, Product, ProductId};

fn seeded(
    id: i64,
    barcode: &str,
    name: &str,
    brand: &str,
    category: CategoryKey,
    price: &str,
    description: &str,
) -> Product {
    Product {
        id: ProductId::Local(id),
        barcode: barcode.to_string(),
        name: name.to_string(),
        brand: brand.to_string(),
        category: category.key().to_string(),
        category_name: category.display_name().to_string(),
        price: price.to_string(),
        description: description.to_string(),
        image: None,
        in_stock: true,
    }
}

/// The five products every station starts with
pub fn products() -> Vec<Product> {
    vec![
        seeded(
            1,
            "7891000055123",
            "Arroz Tio João Tipo 1",
            "Tio João",
            CategoryKey::Grains,
            "8.99",
            "Arroz branco tipo 1, grãos selecionados e soltinhos.",
        ),
        seeded(
            2,
            "7894900011517",
            "Feijão Carioca Kicaldo",
            "Kicaldo",
            CategoryKey::Grains,
            "9.50",
            "Feijão carioca tipo 1, ideal para o dia a dia.",
        ),
        seeded(
            3,
            "7896004001005",
            "Café Maratá Tradicional 250g",
            "Maratá",
            CategoryKey::Beverages,
            "12.90",
            "Café torrado e moído com aroma intenso e sabor marcante.",
        ),
        seeded(
            4,
            "7898215150154",
            "Leite Integral Italac 1L",
            "Italac",
            CategoryKey::Dairy,
            "5.49",
            "Leite UHT integral pronto para consumo.",
        ),
        seeded(
            5,
            "7891098046363",
            "Biscoito Recheado Bono Chocolate",
            "Nestlé",
            CategoryKey::Snacks,
            "4.29",
            "Biscoito crocante recheado com sabor chocolate.",
        ),
    ]
}

/// Directory entries, in display order.
///
/// Counts describe the seed set only; registrations do not update them.
pub fn categories() -> Vec<Category> {
    vec![
        Category::new(CategoryKey::Grains, "Rice, beans, corn and other grains", 2),
        Category::new(CategoryKey::Dairy, "Milk, cheese and derivatives", 1),
        Category::new(CategoryKey::Snacks, "Sweet and savory cookies", 1),
        Category::new(CategoryKey::Beverages, "Coffee, juice and soft drinks", 1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_barcodes_unique_and_ids_sequential() {
        let products = products();
        let barcodes: HashSet<_> = products.iter().map(|p| p.barcode.as_str()).collect();
        assert_eq!(barcodes.len(), products.len());

        for (index, product) in products.iter().enumerate() {
            assert_eq!(product.id, ProductId::Local(index as i64 + 1));
            assert!(product.in_stock);
        }
    }

    #[test]
    fn test_seed_counts_match_seed_products() {
        let products = products();
        for category in categories() {
            let actual = products.iter().filter(|p| p.category == category.id).count();
            assert_eq!(actual as u32, category.product_count, "{}", category.id);
        }
    }
}
