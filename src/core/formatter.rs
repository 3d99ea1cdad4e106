use crate::core::pricing::resolve_price;
use crate::core::selection::ComboSelection;
use crate::domain::model::{MenuItem, ResolvedCartLine, VariantSelection};
use crate::utils::error::{ComboError, OptionKind, Result};
use crate::utils::validation::validate_positive_number;

pub const DEFAULT_TRAILER: &str = "Served with rice and beans.";

/// Turns a finished combo into a priced cart line.
#[derive(Debug, Clone)]
pub struct CartLineFormatter {
    trailer: String,
}

impl Default for CartLineFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_TRAILER)
    }
}

impl CartLineFormatter {
    pub fn new(trailer: impl Into<String>) -> Self {
        Self {
            trailer: trailer.into(),
        }
    }

    pub fn trailer(&self) -> &str {
        &self.trailer
    }

    /// 每個選項一行 "1. Taco (Beef)"，最後加上固定的附餐說明
    pub fn describe(&self, selection: &ComboSelection) -> String {
        let catalog = selection.catalog();
        let mut lines: Vec<String> = selection
            .picks()
            .iter()
            .enumerate()
            .map(|(i, pick)| {
                let item_type = display_or_raw(
                    catalog.display_name(OptionKind::ItemType, &pick.item_type_id),
                    &pick.item_type_id,
                );
                let protein = display_or_raw(
                    catalog.display_name(OptionKind::Protein, &pick.protein_id),
                    &pick.protein_id,
                );
                format!("{}. {} ({})", i + 1, item_type, protein)
            })
            .collect();
        lines.push(self.trailer.clone());
        lines.join("\n")
    }

    /// Builds the cart line for a complete selection. The selection is not modified.
    ///
    /// The price comes from the combo item itself; individual picks never change it.
    pub fn format(
        &self,
        selection: &ComboSelection,
        item: &MenuItem,
        choice: &VariantSelection,
        quantity: u32,
        location_tag: Option<String>,
    ) -> Result<ResolvedCartLine> {
        if !selection.is_complete() {
            return Err(ComboError::IncompleteSelection {
                picks: selection.len(),
                required: selection.required_count(),
            });
        }
        validate_positive_number("quantity", quantity as usize, 1)?;

        Ok(ResolvedCartLine {
            item_id: item.id.clone(),
            item_name: item.name.clone(),
            unit_price: resolve_price(item, choice),
            quantity,
            description: self.describe(selection),
            location_tag,
        })
    }

    /// Same as [`format`](Self::format), then clears the selection for the next combo.
    pub fn take_line(
        &self,
        selection: &mut ComboSelection,
        item: &MenuItem,
        choice: &VariantSelection,
        quantity: u32,
        location_tag: Option<String>,
    ) -> Result<ResolvedCartLine> {
        let line = self.format(selection, item, choice, quantity, location_tag)?;
        selection.reset();
        Ok(line)
    }
}

fn display_or_raw<'a>(name: Option<&'a str>, id: &'a str) -> &'a str {
    name.unwrap_or_else(|| {
        tracing::warn!("No display name for '{}', rendering the raw id", id);
        id
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::OptionCatalog;
    use crate::domain::model::{Price, Variant};
    use std::sync::Arc;

    fn combo_plate() -> MenuItem {
        MenuItem {
            id: "combo-plate".to_string(),
            name: "Combo Plate".to_string(),
            base_price: Price::from_cents(1299),
            variants: vec![Variant {
                name: "Large".to_string(),
                price: Price::from_cents(1599),
                protein: None,
                size: Some("large".to_string()),
                spice_level: None,
            }],
        }
    }

    fn large_selection() -> ComboSelection {
        let mut selection = ComboSelection::new(Arc::new(OptionCatalog::default()), 3).unwrap();
        selection.add_pick(Some("taco"), Some("beef")).unwrap();
        selection.add_pick(Some("enchilada"), Some("chicken")).unwrap();
        selection.add_pick(Some("burrito"), Some("bean")).unwrap();
        selection
    }

    #[test]
    fn test_description_lists_picks_and_trailer() {
        let formatter = CartLineFormatter::default();
        let line = formatter
            .format(
                &large_selection(),
                &combo_plate(),
                &VariantSelection::default().with_size("large"),
                1,
                Some("downtown".to_string()),
            )
            .unwrap();

        assert_eq!(
            line.description,
            "1. Taco (Beef)\n2. Enchilada (Chicken)\n3. Burrito (Bean)\nServed with rice and beans."
        );
        assert_eq!(line.unit_price, Price::from_cents(1599));
        assert_eq!(line.location_tag.as_deref(), Some("downtown"));
        assert_eq!(line.item_id, "combo-plate");
    }

    #[test]
    fn test_incomplete_selection_is_rejected_and_untouched() {
        let mut selection = ComboSelection::new(Arc::new(OptionCatalog::default()), 3).unwrap();
        selection.add_pick(Some("tamale"), None).unwrap();
        let before = selection.picks().to_vec();

        let formatter = CartLineFormatter::default();
        let err = formatter
            .take_line(&mut selection, &combo_plate(), &VariantSelection::default(), 1, None)
            .unwrap_err();

        assert!(matches!(
            err,
            ComboError::IncompleteSelection {
                picks: 1,
                required: 3
            }
        ));
        assert_eq!(selection.picks(), before.as_slice());
    }

    #[test]
    fn test_take_line_resets_selection() {
        let mut selection = large_selection();
        let formatter = CartLineFormatter::new("Served with rice.");
        let line = formatter
            .take_line(&mut selection, &combo_plate(), &VariantSelection::default(), 2, None)
            .unwrap();

        assert!(line.description.ends_with("\nServed with rice."));
        assert_eq!(line.line_total(), Price::from_cents(3198));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let formatter = CartLineFormatter::default();
        let result = formatter.format(
            &large_selection(),
            &combo_plate(),
            &VariantSelection::default(),
            0,
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_display_or_raw_falls_back_to_id() {
        assert_eq!(display_or_raw(None, "pozole"), "pozole");
        assert_eq!(display_or_raw(Some("Pozole"), "pozole"), "Pozole");
    }
}
