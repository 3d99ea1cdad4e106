pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::memory::MemoryCart;
pub use config::{cli::LocalCartFile, toml_config::StorefrontConfig};
pub use self::core::{
    catalog::OptionCatalog,
    engine::ComboOrderEngine,
    formatter::CartLineFormatter,
    hours::OrderHours,
    pricing::{resolve_price, resolve_variant},
    selection::ComboSelection,
};
pub use domain::model::{
    CatalogOption, ComboTier, MenuItem, Pick, PickField, Price, ResolvedCartLine, SelectionState,
    Variant, VariantSelection,
};
pub use domain::ports::CartSink;
pub use utils::error::{ComboError, Result};
