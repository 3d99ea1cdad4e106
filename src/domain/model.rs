use serde::{Deserialize, Serialize};
use std::fmt;

/// Money amount in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub u32);

impl Price {
    pub fn from_cents(cents: u32) -> Self {
        Self(cents)
    }

    pub fn cents(self) -> u32 {
        self.0
    }

    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// One row of a catalog table: a stable id plus the name shown to customers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogOption {
    pub id: String,
    pub name: String,
}

impl CatalogOption {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A filled combo slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pick {
    pub item_type_id: String,
    pub protein_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickField {
    ItemType,
    Protein,
}

/// How many distinct picks a combo of the given size needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboTier {
    pub size: String,
    pub required_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Empty,
    Partial,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub protein: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub spice_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub base_price: Price,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

/// Attributes the customer has chosen so far; `None` matches any variant value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSelection {
    pub protein: Option<String>,
    pub size: Option<String>,
}

impl VariantSelection {
    pub fn with_protein(mut self, protein: impl Into<String>) -> Self {
        self.protein = Some(protein.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedCartLine {
    pub item_id: String,
    pub item_name: String,
    pub unit_price: Price,
    pub quantity: u32,
    pub description: String,
    pub location_tag: Option<String>,
}

impl ResolvedCartLine {
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}
