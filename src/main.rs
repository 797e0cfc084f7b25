use clap::Parser;
use clinic_site::core::ConfigProvider;
use clinic_site::utils::error::ErrorSeverity;
use clinic_site::utils::{logger, validation::Validate};
use clinic_site::{CliConfig, HttpClinicBackend};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, None);

    tracing::info!("Starting clinic-site");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());

        let exit_code = match e.severity() {
            ErrorSeverity::Low | ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    let backend = HttpClinicBackend::new(&config);
    tracing::info!(
        "Using clinic backend at {} (feedback: {})",
        backend.base_url(),
        config.feedback_endpoint()
    );

    clinic_site::serve(&config, Arc::new(backend)).await
}
