use crate::core::catalog::OptionCatalog;
use crate::domain::model::{Pick, PickField, SelectionState};
use crate::utils::error::{ComboError, OptionKind, Result};
use crate::utils::validation::{validate_positive_number, validate_range};
use std::sync::Arc;

/// A combo meal being assembled by one customer.
///
/// Holds at most `required_count` picks, never two with the same item type, and every id
/// refers to the catalog. Each mutating call either applies fully or returns an error and
/// leaves the picks untouched.
#[derive(Debug, Clone)]
pub struct ComboSelection {
    catalog: Arc<OptionCatalog>,
    required_count: usize,
    picks: Vec<Pick>,
}

impl ComboSelection {
    pub fn new(catalog: Arc<OptionCatalog>, required_count: usize) -> Result<Self> {
        validate_positive_number("required_count", required_count, 1)?;
        // 不可重複，所以需要的數量不能超過品項種類數
        validate_range(
            "required_count",
            required_count,
            1,
            catalog.item_types().len(),
        )?;

        Ok(Self {
            catalog,
            required_count,
            picks: Vec::with_capacity(required_count),
        })
    }

    pub fn catalog(&self) -> &OptionCatalog {
        &self.catalog
    }

    pub fn required_count(&self) -> usize {
        self.required_count
    }

    pub fn picks(&self) -> &[Pick] {
        &self.picks
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.picks.len() == self.required_count
    }

    pub fn state(&self) -> SelectionState {
        if self.picks.is_empty() {
            SelectionState::Empty
        } else if self.is_complete() {
            SelectionState::Complete
        } else {
            SelectionState::Partial
        }
    }

    /// Item types not yet used by any pick, in catalog order.
    pub fn available_item_types(&self) -> impl Iterator<Item = &str> + '_ {
        self.catalog
            .item_types()
            .iter()
            .map(|option| option.id.as_str())
            .filter(move |id| !self.uses_item_type(id, None))
    }

    /// Appends a pick. An omitted item type becomes the first one not already picked;
    /// an omitted protein becomes the catalog's first protein.
    pub fn add_pick(&mut self, item_type_id: Option<&str>, protein_id: Option<&str>) -> Result<()> {
        if self.picks.len() >= self.required_count {
            return Err(ComboError::CapacityExceeded {
                required: self.required_count,
            });
        }

        let item_type_id = match item_type_id {
            Some(id) => {
                self.ensure_known(OptionKind::ItemType, id)?;
                if self.uses_item_type(id, None) {
                    return Err(ComboError::DuplicateItemType {
                        item_type: id.to_string(),
                    });
                }
                id.to_string()
            }
            None => self
                .available_item_types()
                .next()
                .map(str::to_string)
                .ok_or(ComboError::CapacityExceeded {
                    required: self.required_count,
                })?,
        };

        let protein_id = match protein_id {
            Some(id) => {
                self.ensure_known(OptionKind::Protein, id)?;
                id.to_string()
            }
            None => self
                .catalog
                .first_protein()
                .map(|option| option.id.clone())
                .ok_or_else(|| ComboError::MissingConfigError {
                    field: "catalog.proteins".to_string(),
                })?,
        };

        tracing::debug!(
            "Adding pick {} ({}) at slot {}",
            item_type_id,
            protein_id,
            self.picks.len()
        );
        self.picks.push(Pick {
            item_type_id,
            protein_id,
        });
        Ok(())
    }

    pub fn update_pick(&mut self, index: usize, field: PickField, value: &str) -> Result<()> {
        self.ensure_index(index)?;

        match field {
            PickField::ItemType => {
                self.ensure_known(OptionKind::ItemType, value)?;
                if self.uses_item_type(value, Some(index)) {
                    return Err(ComboError::DuplicateItemType {
                        item_type: value.to_string(),
                    });
                }
                self.picks[index].item_type_id = value.to_string();
            }
            PickField::Protein => {
                self.ensure_known(OptionKind::Protein, value)?;
                self.picks[index].protein_id = value.to_string();
            }
        }

        tracing::debug!("Updated pick {} {:?} to {}", index, field, value);
        Ok(())
    }

    /// Removes the pick at `index`; later picks shift down by one.
    pub fn remove_pick(&mut self, index: usize) -> Result<Pick> {
        self.ensure_index(index)?;
        let removed = self.picks.remove(index);
        tracing::debug!("Removed pick {} ({})", index, removed.item_type_id);
        Ok(removed)
    }

    pub fn reset(&mut self) {
        self.picks.clear();
    }

    fn ensure_index(&self, index: usize) -> Result<()> {
        if index >= self.picks.len() {
            return Err(ComboError::IndexOutOfRange {
                index,
                len: self.picks.len(),
            });
        }
        Ok(())
    }

    fn ensure_known(&self, kind: OptionKind, id: &str) -> Result<()> {
        if !self.catalog.contains(kind, id) {
            return Err(ComboError::UnknownOption {
                kind,
                id: id.to_string(),
            });
        }
        Ok(())
    }

    fn uses_item_type(&self, item_type_id: &str, except: Option<usize>) -> bool {
        self.picks
            .iter()
            .enumerate()
            .any(|(i, pick)| Some(i) != except && pick.item_type_id == item_type_id)
    }
}
