use crate::core::catalog::OptionCatalog;
use crate::core::engine::default_tiers;
use crate::core::formatter::{CartLineFormatter, DEFAULT_TRAILER};
use crate::core::hours::OrderHours;
use crate::domain::model::{CatalogOption, ComboTier, MenuItem, Price, Variant};
use crate::utils::error::{ComboError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_option_id, validate_range, validate_unique_ids, Validate,
};
use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub combo: ComboConfig,
    #[serde(default)]
    pub menu: Vec<MenuItem>,
    pub hours: Option<HoursConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub item_types: Vec<CatalogOption>,
    pub proteins: Vec<CatalogOption>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComboConfig {
    pub trailer: Option<String>,
    pub tiers: Option<Vec<ComboTier>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoursConfig {
    pub last_order_minutes: Option<u32>,
    #[serde(default)]
    pub days: Vec<DayHoursConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayHoursConfig {
    pub weekday: String,
    pub open: String,
    pub close: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        let catalog = OptionCatalog::default();
        let size_variant = |name: &str, size: &str, cents: u32| Variant {
            name: name.to_string(),
            price: Price::from_cents(cents),
            protein: None,
            size: Some(size.to_string()),
            spice_level: None,
        };

        Self {
            catalog: CatalogConfig {
                item_types: catalog.item_types().to_vec(),
                proteins: catalog.proteins().to_vec(),
            },
            combo: ComboConfig::default(),
            menu: vec![MenuItem {
                id: "combo-plate".to_string(),
                name: "Combo Plate".to_string(),
                base_price: Price::from_cents(1299),
                variants: vec![
                    size_variant("Medium", "medium", 1299),
                    size_variant("Large", "large", 1599),
                ],
            }],
            hours: None,
        }
    }
}

impl StorefrontConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ComboError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ComboError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${STORE_TRAILER})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ComboError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn build_catalog(&self) -> Result<OptionCatalog> {
        OptionCatalog::new(
            self.catalog.item_types.clone(),
            self.catalog.proteins.clone(),
        )
    }

    pub fn tiers(&self) -> Vec<ComboTier> {
        self.combo.tiers.clone().unwrap_or_else(default_tiers)
    }

    pub fn formatter(&self) -> CartLineFormatter {
        CartLineFormatter::new(self.combo.trailer.as_deref().unwrap_or(DEFAULT_TRAILER))
    }

    pub fn menu_item(&self, id: &str) -> Option<&MenuItem> {
        self.menu.iter().find(|item| item.id == id)
    }

    /// `None` when no `[hours]` table is configured.
    pub fn order_hours(&self) -> Result<Option<OrderHours>> {
        let Some(config) = &self.hours else {
            return Ok(None);
        };

        let last_order_minutes = config.last_order_minutes.unwrap_or(0);
        validate_range("hours.last_order_minutes", last_order_minutes, 0, 240)?;

        // "mon" 和 "Monday" 是同一天，要比對解析後的值
        let weekdays = config
            .days
            .iter()
            .map(|day| parse_weekday(&day.weekday))
            .collect::<Result<Vec<_>>>()?;
        let weekday_names: Vec<String> = weekdays.iter().map(|w| w.to_string()).collect();
        validate_unique_ids("hours.days", weekday_names.iter().map(String::as_str))?;

        let mut hours = OrderHours::new(last_order_minutes);
        for (day, weekday) in config.days.iter().zip(weekdays) {
            let open = parse_time(&format!("hours.{}.open", day.weekday), &day.open)?;
            let close = parse_time(&format!("hours.{}.close", day.weekday), &day.close)?;
            hours.set_day(weekday, open, close)?;
        }

        Ok(Some(hours))
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        let catalog = self.build_catalog()?;

        let tiers = self.tiers();
        validate_unique_ids("combo.tiers", tiers.iter().map(|tier| tier.size.as_str()))?;
        for tier in &tiers {
            validate_non_empty_string("combo.tiers.size", &tier.size)?;
            validate_range(
                &format!("combo.tiers.{}.required_count", tier.size),
                tier.required_count,
                1,
                catalog.item_types().len(),
            )?;
        }

        if let Some(trailer) = &self.combo.trailer {
            validate_non_empty_string("combo.trailer", trailer)?;
        }

        validate_unique_ids("menu", self.menu.iter().map(|item| item.id.as_str()))?;
        for item in &self.menu {
            validate_option_id("menu.id", &item.id)?;
            validate_non_empty_string(&format!("menu.{}.name", item.id), &item.name)?;
            for variant in &item.variants {
                validate_non_empty_string(&format!("menu.{}.variants.name", item.id), &variant.name)?;
            }
        }

        self.order_hours()?;
        Ok(())
    }
}

impl Validate for StorefrontConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

fn parse_weekday(value: &str) -> Result<Weekday> {
    value
        .parse::<Weekday>()
        .map_err(|_| ComboError::InvalidConfigValueError {
            field: "hours.days.weekday".to_string(),
            value: value.to_string(),
            reason: "Expected a weekday such as 'mon' or 'monday'".to_string(),
        })
}

fn parse_time(field_name: &str, value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|e| ComboError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Expected HH:MM ({})", e),
    })
}
