use crate::core::catalog::OptionCatalog;
use crate::core::formatter::CartLineFormatter;
use crate::core::hours::OrderHours;
use crate::core::selection::ComboSelection;
use crate::domain::model::{ComboTier, MenuItem, ResolvedCartLine, VariantSelection};
use crate::domain::ports::CartSink;
use crate::utils::error::{ComboError, Result};
use chrono::NaiveDateTime;
use std::sync::Arc;

/// Default tiers: medium combos take two picks, large ones three.
pub fn default_tiers() -> Vec<ComboTier> {
    vec![
        ComboTier {
            size: "medium".to_string(),
            required_count: 2,
        },
        ComboTier {
            size: "large".to_string(),
            required_count: 3,
        },
    ]
}

pub struct ComboOrderEngine<S: CartSink> {
    catalog: Arc<OptionCatalog>,
    tiers: Vec<ComboTier>,
    formatter: CartLineFormatter,
    hours: Option<OrderHours>,
    sink: S,
}

impl<S: CartSink> ComboOrderEngine<S> {
    pub fn new(catalog: Arc<OptionCatalog>, sink: S) -> Self {
        Self {
            catalog,
            tiers: default_tiers(),
            formatter: CartLineFormatter::default(),
            hours: None,
            sink,
        }
    }

    pub fn with_tiers(mut self, tiers: Vec<ComboTier>) -> Self {
        self.tiers = tiers;
        self
    }

    pub fn with_formatter(mut self, formatter: CartLineFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Without hours the engine accepts orders at any time.
    pub fn with_hours(mut self, hours: OrderHours) -> Self {
        self.hours = Some(hours);
        self
    }

    pub fn catalog(&self) -> &Arc<OptionCatalog> {
        &self.catalog
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn tier(&self, size: &str) -> Option<&ComboTier> {
        self.tiers.iter().find(|tier| tier.size == size)
    }

    /// 依照套餐大小建立新的空白選擇
    pub fn start_combo(&self, size: &str) -> Result<ComboSelection> {
        let tier = self
            .tier(size)
            .ok_or_else(|| ComboError::InvalidConfigValueError {
                field: "size".to_string(),
                value: size.to_string(),
                reason: format!(
                    "No combo tier for this size. Known sizes: {}",
                    self.tiers
                        .iter()
                        .map(|t| t.size.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            })?;

        tracing::debug!("Starting {} combo with {} picks", tier.size, tier.required_count);
        ComboSelection::new(self.catalog.clone(), tier.required_count)
    }

    /// Checks order hours, prices and formats the combo, hands the line to the cart and
    /// clears the selection. On any error the selection is left as it was.
    pub async fn add_to_cart(
        &self,
        selection: &mut ComboSelection,
        item: &MenuItem,
        choice: &VariantSelection,
        quantity: u32,
        location_tag: Option<String>,
        at: NaiveDateTime,
    ) -> Result<ResolvedCartLine> {
        if let Some(hours) = &self.hours {
            hours.ensure_open(at)?;
        }

        let line = self
            .formatter
            .format(selection, item, choice, quantity, location_tag)?;
        self.sink.push_line(&line).await?;
        selection.reset();

        tracing::info!(
            "Added {} x{} at {} to cart",
            line.item_name,
            line.quantity,
            line.unit_price
        );
        Ok(line)
    }
}
