use clap::Parser;
use recipe_book::utils::{logger, validation::Validate};
use recipe_book::{CliConfig, ExportEngine, ExportPipeline, LocalStorage};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting recipe-book");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let pipeline = ExportPipeline::new(LocalStorage::current_dir(), config);
    let engine = ExportEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("Export completed: {}", output_path);
        }
        Err(e) => {
            tracing::error!("Export failed: {} (severity {:?})", e, e.severity());
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
