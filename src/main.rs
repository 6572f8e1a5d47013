use clap::Parser;
use safer_batch::utils::{logger, monitor::SystemMonitor, validation::Validate};
use safer_batch::{
    BatchRunner, CliConfig, CsvRecordSource, CsvResultSink, FileProgressStore, SaferLookupClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting safer-batch");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let mut monitor = SystemMonitor::new(config.monitor);

    // Sinks and the ledger open for append up front, so an unwritable store
    // fails before the first lookup.
    let source = CsvRecordSource::open(&config.input)?;
    let progress = FileProgressStore::open(&config.progress_file)?;
    let sink = CsvResultSink::open(&config.output, &config.inactive_file)?;
    let client = SaferLookupClient::new(config.endpoint.clone());

    let mut runner = BatchRunner::new(source, progress, sink, client, config.retry_policy());

    match runner.run().await {
        Ok(summary) => {
            tracing::info!(
                "batch complete: {} found, {} inactive, {} already done, {} left for the next run",
                summary.found,
                summary.inactive,
                summary.skipped,
                summary.abandoned
            );
            println!("✅ Batch complete!");
            println!(
                "📁 {} rows appended to {}, {} identifiers marked inactive",
                summary.found,
                config.output.display(),
                summary.inactive
            );
            monitor.log_final_stats();
            Ok(())
        }
        Err(e) => {
            tracing::error!("Batch failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
