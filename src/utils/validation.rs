use crate::utils::error::{ComboError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn option_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z0-9_-]+$").expect("static regex is valid"))
}

/// 檢查 id 格式：小寫英數字、底線、連字號
pub fn validate_option_id(field_name: &str, id: &str) -> Result<()> {
    if !option_id_pattern().is_match(id) {
        return Err(ComboError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: id.to_string(),
            reason: "Ids may only contain lowercase letters, digits, '_' and '-'".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_ids<'a, I>(field_name: &str, ids: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ComboError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: id.to_string(),
                reason: "Duplicate id".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ComboError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ComboError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(ComboError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ComboError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ComboError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_option_id() {
        assert!(validate_option_id("catalog.item_types", "chile_relleno").is_ok());
        assert!(validate_option_id("catalog.item_types", "combo-plate").is_ok());
        assert!(validate_option_id("catalog.item_types", "Chile Relleno").is_err());
        assert!(validate_option_id("catalog.item_types", "").is_err());
    }

    #[test]
    fn test_validate_unique_ids() {
        assert!(validate_unique_ids("catalog.proteins", ["beef", "chicken"]).is_ok());
        assert!(validate_unique_ids("catalog.proteins", ["beef", "beef"]).is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("quantity", 2, 1).is_ok());
        assert!(validate_positive_number("quantity", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("hours.last_order_minutes", 15, 0, 240).is_ok());
        assert!(validate_range("hours.last_order_minutes", 300, 0, 240).is_err());
    }
}
