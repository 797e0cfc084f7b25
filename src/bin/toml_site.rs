use clap::Parser;
use clinic_site::core::ConfigProvider;
use clinic_site::utils::{logger, validation::Validate};
use clinic_site::{HttpClinicBackend, TomlConfig};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "toml-site")]
#[command(about = "Clinic site server driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "clinic-site.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the bind address from the config
    #[arg(long)]
    bind: Option<String>,

    /// Validate and print the configuration without serving
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if config.json_logs() && !args.verbose {
        logger::init_json_logger(config.log_level());
    } else {
        logger::init_cli_logger(args.verbose, config.log_level());
    }

    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Some(bind) = args.bind {
        tracing::info!("🔧 Bind address overridden to: {}", bind);
        config.server.bind = bind;
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - not starting the server");
        return Ok(());
    }

    let backend = HttpClinicBackend::new(&config);
    clinic_site::serve(&config, Arc::new(backend)).await
}

fn display_config_summary(config: &TomlConfig) {
    let clinic = config.clinic_info();

    tracing::info!("📋 Configuration Summary:");
    tracing::info!("  🌐 Bind: {}", config.bind_address());
    tracing::info!("  🔗 Backend: {}", config.api_base_url());
    tracing::info!("  ✉️  Feedback endpoint: {}", config.feedback_endpoint());
    tracing::info!(
        "  ⏱️  Timeout: {:?}, retries: {} every {:?}",
        config.request_timeout(),
        config.retry_attempts(),
        config.retry_delay()
    );
    tracing::info!("  🏥 Clinic: {} ({})", clinic.name, clinic.location);
    for hours in &clinic.operating_hours {
        tracing::info!("    {}: {}", hours.days, hours.hours);
    }
}
