use clap::Parser;
use small_calc::config::toml_config::TomlConfig;
use small_calc::utils::logger;
use small_calc::utils::validation::Validate;
use small_calc::{ConsoleSink, GreeterSession, GreetingSettings, SessionEngine, SystemClock};

#[derive(Parser)]
#[command(name = "greeter")]
#[command(about = "Prints a greeting, the current local time, and a farewell")]
struct Args {
    /// Name used in the greeting line
    #[arg(long)]
    name: Option<String>,

    /// Name used in the farewell line
    #[arg(long)]
    farewell_name: Option<String>,

    /// chrono format string for the time line
    #[arg(long)]
    time_format: Option<String>,

    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting greeter session");

    // 載入 TOML 配置
    let mut settings = match &args.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config.greeting_settings(),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => GreetingSettings::default(),
    };

    // 應用命令列覆蓋設定
    if let Some(name) = args.name {
        settings.greet_name = name;
    }
    if let Some(name) = args.farewell_name {
        settings.farewell_name = name;
    }
    if let Some(format) = args.time_format {
        settings.time_format = format;
    }

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let session = GreeterSession::new(settings, SystemClock::new(), ConsoleSink::new());
    let mut engine = SessionEngine::new(session);

    match engine.run() {
        Ok(timestamp) => {
            tracing::info!("✅ Session finished at {}", timestamp);
        }
        Err(e) => {
            tracing::error!(
                "❌ Session failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

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
