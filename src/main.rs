// Sonu's Cat Shop - terminal storefront for a cat adoption shop
//
// Architecture:
// - Catalog: static inventory with search and breed filtering
// - Session + Cart: who is signed in, which cats they want to adopt
// - Assistant: PurrBot chat backed by a remote text generator
// - Shop: controller that owns the stores and routes visitor intents
// - TUI (ratatui): renders the Shop and turns key presses into intents
// - Storage: small JSON key/value file so the session survives restarts

mod assistant;
mod cart;
mod catalog;
mod cli;
mod config;
mod logging;
mod session;
mod shop;
mod startup;
mod storage;
mod tui;

use anyhow::Result;
use assistant::gemini::GeminiClient;
use assistant::{ChatAssistant, TextGenerator};
use config::Config;
use logging::LogBuffer;
use session::SessionStore;
use shop::Shop;
use std::sync::Arc;
use storage::{FileStore, LocalStore, MemoryStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config, catalog)
    // If a command was handled, exit early
    if cli::handle_cli().await {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // In TUI mode logs are captured to a buffer so they don't garble the display.
    // The guard must be kept alive for the duration of the program to ensure logs flush
    let log_buffer = LogBuffer::new();
    let _file_guard = logging::init(&config.logging, Some(log_buffer.clone()));

    let store = open_store(&config);
    let session = SessionStore::restore(store);
    let assistant = ChatAssistant::new(build_generator(&config), config.assistant.settings());
    let shop = Shop::new(session, assistant);

    startup::print_startup(&config, &shop);
    startup::log_startup(&config, &shop);

    tracing::info!("Starting TUI");
    if let Err(e) = tui::run_tui(shop, log_buffer, config).await {
        tracing::error!("TUI error: {:?}", e);
        return Err(e);
    }

    tracing::info!("Shutting down...");
    Ok(())
}

/// Open the local store, falling back to memory so the shop still runs
fn open_store(config: &Config) -> Box<dyn LocalStore> {
    match FileStore::open_or_reset(&config.storage_path) {
        Ok(store) => {
            tracing::debug!("Local store at {}", store.path().display());
            Box::new(store)
        }
        Err(e) => {
            tracing::warn!(
                "Local store {} unavailable ({}), session will not persist",
                config.storage_path.display(),
                e
            );
            Box::new(MemoryStore::new())
        }
    }
}

/// Remote generator when a credential is configured
pub(crate) fn build_generator(config: &Config) -> Option<Arc<dyn TextGenerator>> {
    let key = config.assistant.api_key.as_deref()?;
    match GeminiClient::new(&config.assistant.api_base, key) {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            tracing::error!("Failed to build assistant client: {}", e);
            None
        }
    }
}
