pub mod catalog;
pub mod engine;
pub mod formatter;
pub mod hours;
pub mod pricing;
pub mod selection;

pub use crate::domain::model::{
    CatalogOption, ComboTier, MenuItem, Pick, PickField, Price, ResolvedCartLine, SelectionState,
    Variant, VariantSelection,
};
pub use crate::domain::ports::CartSink;
pub use crate::utils::error::Result;
