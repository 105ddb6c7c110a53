use clap::Parser;
use park_previewer::config::cli::BrowseCommand;
use park_previewer::config::{DEFAULT_PARKS_DIR, DEFAULT_STATES_DIR};
use park_previewer::core::ParkSource;
use park_previewer::utils::logger::{self, LogFormat};
use park_previewer::utils::validation::Validate;
use park_previewer::{ClientArgs, FsParkStore, HttpParkClient, LookupService, ParkBrowser, UiEvent};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ClientArgs::parse();

    logger::init_logger(LogFormat::Compact, args.verbose);
    tracing::debug!("Browser args: {:?}", args);

    if let Err(e) = args.validate() {
        tracing::error!("❌ Invalid arguments: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    match &args.data_dir {
        Some(dir) => {
            tracing::info!("📁 Reading park files from {}", dir.display());
            let store = FsParkStore::new(dir.join(DEFAULT_STATES_DIR), dir.join(DEFAULT_PARKS_DIR));
            run(ParkBrowser::new(LookupService::new(store)), &args.command).await
        }
        None => {
            let client = HttpParkClient::new(&args.endpoint)?;
            tracing::info!("🌐 Using lookup service at {}", client.endpoint());
            run(ParkBrowser::new(client), &args.command).await
        }
    }
}

/// Replays the command as UI events, then prints the final screen.
async fn run<P: ParkSource>(mut browser: ParkBrowser<P>, command: &BrowseCommand) -> anyhow::Result<()> {
    let events = match command {
        BrowseCommand::State { code, park } => {
            let mut events = vec![UiEvent::StateChanged(code.clone())];
            if let Some(park) = park {
                events.push(UiEvent::ParkChanged(park.clone()));
            }
            events
        }
        BrowseCommand::Search { name } => {
            vec![UiEvent::SearchTyped(name.clone()), UiEvent::SearchClicked]
        }
    };

    for event in events {
        browser.dispatch(event).await;
        for alert in browser.take_alerts() {
            eprintln!("⚠️  {}", alert);
        }
    }

    print!("{}", browser.screen());
    Ok(())
}
