use clap::Parser;
use txn_triage::utils::{logger, validation::Validate};
use txn_triage::{CliConfig, CsvPipeline, LocalStorage, TriageEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting txn-triage");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration could not be resolved: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = CsvPipeline::new(storage, config);
    let engine = TriageEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => {
            println!("✅ Triage run completed");
            println!("📁 Result tables saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("Triage run failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
