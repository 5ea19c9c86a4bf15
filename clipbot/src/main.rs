use dotenv::dotenv;
use std::sync::Arc;

mod channels;
mod commands;
mod config;
mod daily_pick;
mod error;
mod pending;
mod registry;

use commands::ClipRouter;
use config::Config;
use daily_pick::DailyPickCache;
use pending::PendingRegistrations;
use registry::ClipRegistry;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = std::fs::create_dir_all(&config.audio_dir) {
        log::error!(
            "Failed to create audio directory {}: {}",
            config.audio_dir.display(),
            e
        );
        std::process::exit(1);
    }

    log::info!("Loading clip registry from {}", config.db_file.display());
    let registry = match ClipRegistry::load(&config.db_file) {
        Ok(registry) => Arc::new(registry),
        Err(e) => {
            // Refuse to start rather than overwrite a registry we couldn't read
            log::error!("Failed to load clip registry: {}", e);
            std::process::exit(1);
        }
    };

    if registry.is_empty() {
        log::info!("No clips registered yet; they will be saved to {}", registry.path().display());
    } else {
        log::info!("{} clips available", registry.len());
    }

    let router = Arc::new(ClipRouter::new(
        registry,
        Arc::new(PendingRegistrations::new()),
        Arc::new(DailyPickCache::new()),
    ));

    log::info!("Starting clip bot");
    channels::telegram::start_telegram_listener(&config.bot_token, router).await;
}
