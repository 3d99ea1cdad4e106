use crate::domain::model::{MenuItem, Price, Variant, VariantSelection};

fn attribute_matches(wanted: Option<&str>, declared: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(value) => declared == Some(value),
    }
}

/// First variant, in declaration order, agreeing with every attribute the customer has
/// chosen. Unchosen attributes match anything.
pub fn resolve_variant<'a>(item: &'a MenuItem, selection: &VariantSelection) -> Option<&'a Variant> {
    item.variants.iter().find(|variant| {
        attribute_matches(selection.protein.as_deref(), variant.protein.as_deref())
            && attribute_matches(selection.size.as_deref(), variant.size.as_deref())
    })
}

/// Unit price for `item` given a possibly partial selection. Never fails: without a
/// matching variant the base price applies.
pub fn resolve_price(item: &MenuItem, selection: &VariantSelection) -> Price {
    if item.variants.is_empty() {
        return item.base_price;
    }

    match resolve_variant(item, selection) {
        Some(variant) => {
            tracing::debug!("{}: variant '{}' at {}", item.id, variant.name, variant.price);
            variant.price
        }
        None => {
            tracing::debug!(
                "{}: no variant matches {:?}, using base price {}",
                item.id,
                selection,
                item.base_price
            );
            item.base_price
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(name: &str, cents: u32, protein: Option<&str>, size: Option<&str>) -> Variant {
        Variant {
            name: name.to_string(),
            price: Price::from_cents(cents),
            protein: protein.map(str::to_string),
            size: size.map(str::to_string),
            spice_level: None,
        }
    }

    fn burrito() -> MenuItem {
        MenuItem {
            id: "burrito".to_string(),
            name: "Burrito".to_string(),
            base_price: Price::from_cents(999),
            variants: vec![
                variant("Small - Chicken", 1049, Some("chicken"), Some("small")),
                variant("Large - Beef", 1399, Some("beef"), Some("large")),
                variant("Small - Beef", 1099, Some("beef"), Some("small")),
                variant("Bean", 899, Some("bean"), None),
            ],
        }
    }

    #[test]
    fn test_item_without_variants_uses_base_price() {
        let item = MenuItem {
            id: "horchata".to_string(),
            name: "Horchata".to_string(),
            base_price: Price::from_cents(350),
            variants: vec![],
        };
        let selection = VariantSelection::default().with_size("large");
        assert_eq!(resolve_price(&item, &selection), Price::from_cents(350));
    }

    #[test]
    fn test_unspecified_size_matches_first_protein_variant() {
        let selection = VariantSelection::default().with_protein("beef");
        assert_eq!(resolve_price(&burrito(), &selection), Price::from_cents(1399));
    }

    #[test]
    fn test_full_selection_matches_exact_variant() {
        let selection = VariantSelection::default()
            .with_protein("beef")
            .with_size("small");
        assert_eq!(resolve_price(&burrito(), &selection), Price::from_cents(1099));
    }

    #[test]
    fn test_empty_selection_picks_first_variant() {
        let selection = VariantSelection::default();
        assert_eq!(resolve_price(&burrito(), &selection), Price::from_cents(1049));
    }

    #[test]
    fn test_undeclared_attribute_does_not_match_a_chosen_value() {
        // "Bean" declares no size, so asking for a size skips it
        let selection = VariantSelection::default()
            .with_protein("bean")
            .with_size("large");
        assert_eq!(resolve_price(&burrito(), &selection), Price::from_cents(999));
    }

    #[test]
    fn test_no_match_falls_back_to_base_price() {
        let selection = VariantSelection::default().with_protein("tofu");
        let item = burrito();
        assert_eq!(resolve_price(&item, &selection), item.base_price);
        assert_eq!(resolve_price(&item, &selection), resolve_price(&item, &selection));
    }
}
