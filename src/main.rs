use clap::Parser;
use combo_order::utils::error::{ComboError, ErrorSeverity};
use combo_order::utils::{logger, validation::Validate};
use combo_order::{
    CartSink, CliConfig, ComboOrderEngine, LocalCartFile, MemoryCart, ResolvedCartLine,
    StorefrontConfig, VariantSelection,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting combo-order CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match run(&config).await {
        Ok(line) => {
            println!("{} x{} @ {}", line.item_name, line.quantity, line.unit_price);
            println!("{}", line.description);
            println!("Line total: {}", line.line_total());
            if !config.dry_run {
                println!("📁 Cart saved under: {}", config.output_path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Could not add combo to cart: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 2,
                ErrorSeverity::Medium => 4,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(config: &CliConfig) -> Result<ResolvedCartLine, ComboError> {
    let storefront = match &config.config {
        Some(path) => StorefrontConfig::from_file(path)?,
        None => StorefrontConfig::default(),
    };
    storefront.validate()?;

    let item = storefront
        .menu_item(&config.combo)
        .cloned()
        .ok_or_else(|| ComboError::MissingConfigError {
            field: format!("menu.{}", config.combo),
        })?;

    let sink: Box<dyn CartSink> = if config.dry_run {
        Box::new(MemoryCart::new())
    } else {
        Box::new(LocalCartFile::new(config.output_path.clone()))
    };

    let mut engine = ComboOrderEngine::new(Arc::new(storefront.build_catalog()?), sink)
        .with_tiers(storefront.tiers())
        .with_formatter(storefront.formatter());
    if let Some(hours) = storefront.order_hours()? {
        engine = engine.with_hours(hours);
    }

    let mut selection = engine.start_combo(&config.size)?;
    for (item_type, protein) in config.parsed_picks()? {
        selection.add_pick(Some(item_type.as_str()), protein.as_deref())?;
    }

    let choice = VariantSelection::default().with_size(config.size.clone());
    engine
        .add_to_cart(
            &mut selection,
            &item,
            &choice,
            config.quantity,
            config.location.clone(),
            config.order_time()?,
        )
        .await
}
