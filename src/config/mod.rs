pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_args::CliConfig;

#[cfg(feature = "cli")]
mod cli_args {
    use crate::utils::error::{ComboError, Result};
    use crate::utils::validation::{
        validate_non_empty_string, validate_path, validate_positive_number, Validate,
    };
    use chrono::NaiveDateTime;
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "combo-order")]
    #[command(about = "Build a combo meal and add it to the cart")]
    pub struct CliConfig {
        #[arg(long, help = "Storefront TOML file (built-in menu when omitted)")]
        pub config: Option<String>,

        #[arg(long, default_value = "combo-plate")]
        pub combo: String,

        #[arg(long, default_value = "large")]
        pub size: String,

        #[arg(long = "pick", help = "item_type[:protein], repeat once per slot")]
        pub picks: Vec<String>,

        #[arg(long, default_value = "1")]
        pub quantity: u32,

        #[arg(long)]
        pub location: Option<String>,

        #[arg(long, default_value = "./cart")]
        pub output_path: String,

        #[arg(long, help = "Print the cart line without writing it")]
        pub dry_run: bool,

        #[arg(long, help = "Order time as YYYY-MM-DDTHH:MM (defaults to now)")]
        pub at: Option<String>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub log_json: bool,
    }

    impl CliConfig {
        /// 解析 `--pick taco:beef`，蛋白質可省略
        pub fn parsed_picks(&self) -> Result<Vec<(String, Option<String>)>> {
            self.picks
                .iter()
                .map(|raw| {
                    let (item_type, protein) = match raw.split_once(':') {
                        Some((item_type, protein)) => (item_type, Some(protein)),
                        None => (raw.as_str(), None),
                    };
                    validate_non_empty_string("pick", item_type)?;
                    if let Some(protein) = protein {
                        validate_non_empty_string("pick", protein)?;
                    }
                    Ok((item_type.to_string(), protein.map(str::to_string)))
                })
                .collect()
        }

        pub fn order_time(&self) -> Result<NaiveDateTime> {
            match &self.at {
                Some(raw) => NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M").map_err(|e| {
                    ComboError::InvalidConfigValueError {
                        field: "at".to_string(),
                        value: raw.clone(),
                        reason: format!("Expected YYYY-MM-DDTHH:MM ({})", e),
                    }
                }),
                None => Ok(chrono::Local::now().naive_local()),
            }
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("output_path", &self.output_path)?;
            validate_positive_number("quantity", self.quantity as usize, 1)?;
            validate_non_empty_string("size", &self.size)?;
            self.parsed_picks()?;
            self.order_time()?;
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn parse(args: &[&str]) -> CliConfig {
            CliConfig::parse_from(std::iter::once("combo-order").chain(args.iter().copied()))
        }

        #[test]
        fn test_parse_picks() {
            let config = parse(&["--pick", "taco:beef", "--pick", "burrito"]);
            assert_eq!(
                config.parsed_picks().unwrap(),
                vec![
                    ("taco".to_string(), Some("beef".to_string())),
                    ("burrito".to_string(), None),
                ]
            );
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_rejects_empty_pick_parts() {
            let config = parse(&["--pick", ":beef"]);
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_order_time() {
            let config = parse(&["--at", "2026-10-19T12:30"]);
            assert_eq!(
                config.order_time().unwrap().format("%a %H:%M").to_string(),
                "Mon 12:30"
            );
            assert!(parse(&["--at", "noon"]).validate().is_err());
        }

        #[test]
        fn test_zero_quantity_fails_validation() {
            assert!(parse(&["--quantity", "0"]).validate().is_err());
        }
    }
}
