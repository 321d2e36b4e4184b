use clap::Parser;
use small_calc::config::toml_config::{TomlConfig, MAX_PRECISION};
use small_calc::utils::validation::validate_range;
use small_calc::utils::{error::Result, logger};
use small_calc::{Calculator, CliConfig, Evaluation, OutputFormat};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-calc CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 可選的 TOML 設定檔，僅影響顯示設定
    let file_config = match &config.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(file_config) => Some(file_config),
            Err(e) => {
                tracing::error!("❌ Configuration validation failed: {}", e);
                tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
        },
        None => None,
    };

    // CLI 覆蓋設定檔，設定檔覆蓋預設值
    let precision = config
        .precision
        .or_else(|| file_config.as_ref().and_then(|c| c.precision()));
    let format = config
        .format
        .or_else(|| file_config.as_ref().and_then(|c| c.format()))
        .unwrap_or(OutputFormat::Text);

    if let Some(precision) = precision {
        if let Err(e) = validate_range("precision", precision, 0, MAX_PRECISION) {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    let calculator = Calculator::new();
    let (operation, operands) = config.operation.clone().into_parts();
    tracing::debug!("Evaluating {} over {:?}", operation, operands);

    match calculator.evaluate(operation, &operands) {
        Ok(evaluation) => {
            tracing::info!("✅ {} = {}", operation, evaluation.result);
            println!("{}", render_evaluation(&evaluation, format, precision)?);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                small_calc::utils::error::ErrorSeverity::Low => 0,
                small_calc::utils::error::ErrorSeverity::Medium => 2,
                small_calc::utils::error::ErrorSeverity::High => 1,
                small_calc::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn render_evaluation(
    evaluation: &Evaluation,
    format: OutputFormat,
    precision: Option<usize>,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(match precision {
            Some(precision) => format!("{:.*}", precision, evaluation.result),
            None => format!("{}", evaluation.result),
        }),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(evaluation)?),
    }
}
