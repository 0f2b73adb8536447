use anyhow::Context;
use clap::Parser;
use recipe_book::utils::{logger, validation::Validate};
use recipe_book::{ExportEngine, ExportPipeline, LocalStorage, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-export")]
#[command(about = "Dish export driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "recipe-book.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the bundle name from config
    #[arg(long)]
    bundle: Option<String>,

    /// Decode the input and report what would be written
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("failed to load config file '{}'", args.config))?;

    let level = if args.verbose { "debug" } else { config.log_level() };
    logger::init_with_level(level, config.json_logs());

    tracing::info!("Loaded configuration '{}' from {}", config.export_name(), args.config);
    if let Some(description) = config.description() {
        tracing::info!("{}", description);
    }

    if let Some(bundle) = args.bundle {
        tracing::info!("Bundle overridden to: {}", bundle);
        config.load.bundle = Some(bundle);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let pipeline = ExportPipeline::new(LocalStorage::current_dir(), config);

    if args.dry_run {
        tracing::info!("Dry run, nothing will be written");
        let preview = pipeline.preview().await.context("dry run failed")?;
        print!("{}", preview);
        return Ok(());
    }

    let output_path = ExportEngine::new(pipeline)
        .run()
        .await
        .context("dish export failed")?;

    println!("Export completed: {}", output_path);
    Ok(())
}
