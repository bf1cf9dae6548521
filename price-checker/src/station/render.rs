//! Plain-text views for the terminal

use std::fmt::Write;

use shared::models::{Category, Product};

use crate::pipeline::ResolutionSource;

const RULE: &str = "+------------------------------------------------------------+";

/// Numeric prices get the currency prefix, placeholders print as-is
pub fn format_price(price: &str) -> String {
    if price.trim().parse::<f64>().is_ok() {
        format!("R$ {}", price.trim())
    } else {
        price.to_string()
    }
}

pub fn product_card(product: &Product, source: Option<ResolutionSource>) -> String {
    let mut card = String::new();
    let _ = writeln!(card, "{}", RULE);
    let _ = writeln!(card, "  {}", product.category_name);
    let _ = writeln!(card, "  {}", product.name);
    let _ = writeln!(card, "  {}", product.brand);
    let _ = writeln!(card);
    let _ = writeln!(card, "  Price:       {}", format_price(&product.price));
    let _ = writeln!(card, "  Barcode:     {}", product.barcode);
    let _ = writeln!(card, "  Description: {}", product.description);
    if let Some(image) = &product.image {
        let _ = writeln!(card, "  Image:       {}", image);
    }
    let _ = writeln!(
        card,
        "  {}",
        if product.in_stock { "In stock" } else { "Out of stock" }
    );
    if let Some(source) = source {
        let label = match source {
            ResolutionSource::Remote => "product database",
            ResolutionSource::Local => "store catalog",
        };
        let _ = writeln!(card, "  Source:      {}", label);
    }
    let _ = writeln!(card, "{}", RULE);
    card
}

pub fn category_list(categories: &[Category]) -> String {
    let mut out = String::new();
    for category in categories {
        let _ = writeln!(
            out,
            "  {:<12} {:<18} {} product(s)  {}",
            category.id, category.name, category.product_count, category.description
        );
    }
    out
}

pub fn product_list(products: &[Product]) -> String {
    let mut out = String::new();
    for product in products {
        let _ = writeln!(
            out,
            "  {:<14} {:<36} {}",
            product.barcode,
            product.name,
            format_price(&product.price)
        );
    }
    out
}
