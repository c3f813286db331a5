use clap::Parser;
use pallet_report::utils::logger::{self, LogFormat};
use pallet_report::utils::validation::Validate;
use pallet_report::{CliConfig, InventorySource, ReportEngine, SampleInventory, TomlInventory};

fn run_with<S: InventorySource>(source: S, config: &CliConfig) -> pallet_report::Result<String> {
    ReportEngine::new(source, config.render_options()).run()
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let log_format = if config.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(config.verbose, log_format);

    tracing::info!("Starting pallet-report");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let result = match &config.inventory {
        Some(path) => {
            tracing::info!("Loading inventory from: {}", path);
            TomlInventory::from_file(path).and_then(|inventory| run_with(inventory, &config))
        }
        None => {
            tracing::info!("No inventory file given, using the sample inventory");
            run_with(SampleInventory, &config)
        }
    };

    match result {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Report failed: {}", e);
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
            Err(e.into())
        }
    }
}
