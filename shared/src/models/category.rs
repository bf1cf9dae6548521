//! Category Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category entity
///
/// Directory records are seeded once and never change for the lifetime of
/// the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category key, e.g. "graos"
    pub id: String,
    pub name: String,
    pub description: String,
    /// Seed-time snapshot, not recomputed when products are registered
    pub product_count: u32,
}

impl Category {
    pub fn new(
        key: CategoryKey,
        description: impl Into<String>,
        product_count: u32,
    ) -> Self {
        Self {
            id: key.key().to_string(),
            name: key.display_name().to_string(),
            description: description.into(),
            product_count,
        }
    }
}

/// Closed set of category keys understood by the station.
///
/// Any key outside the set resolves to [`CategoryKey::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum CategoryKey {
    /// Grains and cereals (rice, beans, corn)
    Grains,
    /// Milk, cheese and derivatives
    Dairy,
    /// Sweet and savory cookies
    Snacks,
    /// Coffee, juice, soft drinks
    Beverages,
    /// Generic bucket for products resolved by the remote database
    GeneralFoods,
    #[default]
    Other,
}

impl CategoryKey {
    pub const ALL: [CategoryKey; 6] = [
        CategoryKey::Grains,
        CategoryKey::Dairy,
        CategoryKey::Snacks,
        CategoryKey::Beverages,
        CategoryKey::GeneralFoods,
        CategoryKey::Other,
    ];

    /// Resolve a raw key (canonical or alias, case-insensitive).
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "graos" | "grãos" | "grain" | "grains" => Self::Grains,
            "laticinios" | "laticínios" | "dairy" => Self::Dairy,
            "biscoitos" | "snack" | "snacks" => Self::Snacks,
            "bebidas" | "bebida" | "beverages" => Self::Beverages,
            "alimentos" | "general" => Self::GeneralFoods,
            _ => Self::Other,
        }
    }

    /// Canonical key stored on products
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Grains => "graos",
            Self::Dairy => "laticinios",
            Self::Snacks => "biscoitos",
            Self::Beverages => "bebidas",
            Self::GeneralFoods => "alimentos",
            Self::Other => "outros",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Grains => "Grains & Cereals",
            Self::Dairy => "Dairy",
            Self::Snacks => "Cookies & Snacks",
            Self::Beverages => "Beverages",
            Self::GeneralFoods => "General Foods",
            Self::Other => "Other",
        }
    }
}

impl From<&str> for CategoryKey {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for CategoryKey {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<CategoryKey> for String {
    fn from(key: CategoryKey) -> Self {
        key.key().to_string()
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
