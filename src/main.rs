use callable_contracts::utils::logger;
use callable_contracts::{CliConfig, LinePrinter, Showcase};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting callable-demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let printer = LinePrinter::stdout();
    let result = Showcase::new(settings).run(&printer).and_then(|report| {
        if config.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Ok(report)
    });

    if let Err(e) = result {
        tracing::error!(
            "❌ Showcase failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}
