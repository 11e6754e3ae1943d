//! Catalog items and the read-only questions that can be asked about the whole catalog.

use crate::validation::{finite, Patch, ValidationError, Violations};
use resource_framework::SequentialId;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Type-safe identifier for catalog items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl SequentialId for ItemId {
    fn first() -> Self {
        ItemId(1)
    }

    fn successor(self) -> Self {
        ItemId(self.0 + 1)
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
}

impl Item {
    /// Case-insensitive substring match on the name. An empty needle matches everything.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// Raw item payload as decoded from a request body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemDraft {
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub price: Patch<f64>,
}

impl ItemDraft {
    /// Both fields are required; there are no defaults.
    pub fn into_create(self) -> Result<ItemCreate, ValidationError> {
        let mut violations = Violations::new();
        let name = violations.check("name", self.name.required());
        let price = violations.check("price", self.price.required().and_then(finite));

        match (name, price) {
            (Some(name), Some(price)) if violations.is_empty() => Ok(ItemCreate { name, price }),
            _ => Err(violations.into_error()),
        }
    }

    pub fn into_patch(self) -> Result<ItemPatch, ValidationError> {
        let mut violations = Violations::new();
        let name = violations.check("name", self.name.optional());
        let price = violations.check(
            "price",
            self.price
                .optional()
                .and_then(|p| p.map(finite).transpose()),
        );

        match (name, price) {
            (Some(name), Some(price)) if violations.is_empty() => Ok(ItemPatch { name, price }),
            _ => Err(violations.into_error()),
        }
    }
}

/// A validated full item payload (create and replace).
#[derive(Debug, Clone, PartialEq)]
pub struct ItemCreate {
    pub(crate) name: String,
    pub(crate) price: f64,
}

impl ItemCreate {
    pub fn new(name: impl Into<String>, price: f64) -> Result<Self, ValidationError> {
        ItemDraft {
            name: Patch::Value(name.into()),
            price: Patch::Value(price),
        }
        .into_create()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

/// A validated partial item payload (merge).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub(crate) name: Option<String>,
    pub(crate) price: Option<f64>,
}

impl ItemPatch {
    pub fn with_price(price: f64) -> Result<Self, ValidationError> {
        ItemDraft {
            price: Patch::Value(price),
            ..Default::default()
        }
        .into_patch()
    }

    pub fn with_name(name: impl Into<String>) -> Result<Self, ValidationError> {
        ItemDraft {
            name: Patch::Value(name.into()),
            ..Default::default()
        }
        .into_patch()
    }
}

/// A read-only question about the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogQuery {
    /// Items whose name contains the needle, ignoring case.
    Search(String),
    /// Sum of all prices.
    Total,
    /// Count and average price.
    Stats,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogAnswer {
    Matches(Vec<Item>),
    Total(f64),
    Stats(CatalogStats),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogStats {
    pub count: usize,
    /// Rounded to two decimals, ties to even; `0` for an empty catalog.
    pub average_price: f64,
}

impl CatalogStats {
    pub fn of(items: &[Item]) -> Self {
        let count = items.len();
        let average_price = if count == 0 {
            0.0
        } else {
            round2(total_price(items) / count as f64)
        };
        Self {
            count,
            average_price,
        }
    }
}

pub fn total_price(items: &[Item]) -> f64 {
    items.iter().map(|item| item.price).sum()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
