use clap::Parser;
use park_previewer::adapters::server;
use park_previewer::core::ConfigProvider;
use park_previewer::utils::error::ErrorSeverity;
use park_previewer::utils::logger::{self, LogFormat};
use park_previewer::utils::validation::Validate;
use park_previewer::{FsParkStore, ServerArgs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServerArgs::parse();

    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_logger(LogFormat::from_json_flag(config.json_logs), config.verbose);

    tracing::info!("Starting parks-server");
    tracing::debug!("Server config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!(
        "📁 Serving states from {} and parks from {}",
        config.states_dir().display(),
        config.parks_dir().display()
    );

    let store = FsParkStore::from_config(&config);

    if let Err(e) = server::run_server(&config, store).await {
        tracing::error!(
            "❌ Server stopped: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
