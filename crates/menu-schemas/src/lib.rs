//! menu-schemas
//!
//! Shapes shared across crates: the catalog definition file (`food_menu.json`)
//! and the `(item, quantity)` order line that flows from the form into history.
//! Definition types mirror the JSON exactly; validation and defaults live in
//! menu-catalog.

use serde::{Deserialize, Deserializer};

/// One entry of the top-level array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryDef {
    pub category: String,
    /// Ordering limit for the whole category. `None` means the loader default.
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemDef {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Display string, never parsed. A JSON number is kept as its text.
    #[serde(default, deserialize_with = "price_text")]
    pub price: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// One selected item with a non-zero quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub item: String,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(item: impl Into<String>, quantity: u32) -> Self {
        Self {
            item: item.into(),
            quantity,
        }
    }
}

fn price_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Price {
        Text(String),
        Whole(i64),
        Decimal(f64),
    }

    Ok(match Option::<Price>::deserialize(d)? {
        Some(Price::Text(s)) => s,
        Some(Price::Whole(n)) => n.to_string(),
        Some(Price::Decimal(x)) => x.to_string(),
        None => String::new(),
    })
}
