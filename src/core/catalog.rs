use crate::domain::model::CatalogOption;
use crate::utils::error::{OptionKind, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_option_id, validate_positive_number, validate_unique_ids,
};
use std::collections::HashMap;

/// An ordered option list with an id index.
#[derive(Debug, Clone)]
struct OptionTable {
    entries: Vec<CatalogOption>,
    index: HashMap<String, usize>,
}

impl OptionTable {
    fn from_entries(entries: Vec<CatalogOption>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(position, option)| (option.id.clone(), position))
            .collect();
        Self { entries, index }
    }

    fn validated(field_name: &str, entries: Vec<CatalogOption>) -> Result<Self> {
        validate_positive_number(field_name, entries.len(), 1)?;
        for option in &entries {
            validate_option_id(field_name, &option.id)?;
            validate_non_empty_string(field_name, &option.name)?;
        }
        validate_unique_ids(field_name, entries.iter().map(|o| o.id.as_str()))?;
        Ok(Self::from_entries(entries))
    }

    fn get(&self, id: &str) -> Option<&CatalogOption> {
        self.index.get(id).map(|&position| &self.entries[position])
    }
}

/// Item-type slots and protein choices a combo may be built from.
///
/// Lookups are by id. Display names are only used for rendering.
#[derive(Debug, Clone)]
pub struct OptionCatalog {
    item_types: OptionTable,
    proteins: OptionTable,
}

impl OptionCatalog {
    /// 建立自訂目錄，會檢查 id 格式與重複
    pub fn new(item_types: Vec<CatalogOption>, proteins: Vec<CatalogOption>) -> Result<Self> {
        Ok(Self {
            item_types: OptionTable::validated("catalog.item_types", item_types)?,
            proteins: OptionTable::validated("catalog.proteins", proteins)?,
        })
    }

    pub fn item_types(&self) -> &[CatalogOption] {
        &self.item_types.entries
    }

    pub fn proteins(&self) -> &[CatalogOption] {
        &self.proteins.entries
    }

    pub fn options(&self, kind: OptionKind) -> &[CatalogOption] {
        match kind {
            OptionKind::ItemType => self.item_types(),
            OptionKind::Protein => self.proteins(),
        }
    }

    pub fn get(&self, kind: OptionKind, id: &str) -> Option<&CatalogOption> {
        match kind {
            OptionKind::ItemType => self.item_types.get(id),
            OptionKind::Protein => self.proteins.get(id),
        }
    }

    pub fn contains(&self, kind: OptionKind, id: &str) -> bool {
        self.get(kind, id).is_some()
    }

    pub fn display_name(&self, kind: OptionKind, id: &str) -> Option<&str> {
        self.get(kind, id).map(|option| option.name.as_str())
    }

    pub fn first_protein(&self) -> Option<&CatalogOption> {
        self.proteins.entries.first()
    }
}

impl Default for OptionCatalog {
    fn default() -> Self {
        let item_types = [
            ("taco", "Taco"),
            ("enchilada", "Enchilada"),
            ("tamale", "Tamale"),
            ("tostada", "Tostada"),
            ("chile_relleno", "Chile Relleno"),
            ("burrito", "Burrito"),
        ];
        let proteins = [
            ("beef", "Beef"),
            ("chicken", "Chicken"),
            ("bean", "Bean"),
            ("cheese", "Cheese"),
        ];

        let to_options = |rows: &[(&str, &str)]| {
            rows.iter()
                .map(|(id, name)| CatalogOption::new(*id, *name))
                .collect::<Vec<_>>()
        };

        Self {
            item_types: OptionTable::from_entries(to_options(&item_types)),
            proteins: OptionTable::from_entries(to_options(&proteins)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_lookup() {
        let catalog = OptionCatalog::default();
        assert_eq!(catalog.item_types().len(), 6);
        assert_eq!(catalog.proteins().len(), 4);
        assert_eq!(
            catalog.display_name(OptionKind::ItemType, "chile_relleno"),
            Some("Chile Relleno")
        );
        assert_eq!(catalog.display_name(OptionKind::Protein, "bean"), Some("Bean"));
        assert_eq!(catalog.first_protein().map(|p| p.id.as_str()), Some("beef"));
    }

    #[test]
    fn test_lookup_is_by_id_not_display_name() {
        let catalog = OptionCatalog::default();
        assert!(catalog.contains(OptionKind::ItemType, "taco"));
        assert!(!catalog.contains(OptionKind::ItemType, "Taco"));
        assert!(!catalog.contains(OptionKind::Protein, "taco"));
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let result = OptionCatalog::new(
            vec![
                CatalogOption::new("taco", "Taco"),
                CatalogOption::new("taco", "Soft Taco"),
            ],
            vec![CatalogOption::new("beef", "Beef")],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_empty_table() {
        let result = OptionCatalog::new(vec![CatalogOption::new("taco", "Taco")], vec![]);
        assert!(result.is_err());
    }
}
