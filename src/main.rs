//! Ledger Gate entry point
//!
//! Wiring is explicit: config -> pool -> store -> services -> gateway.
//! No ambient container; every dependency is passed by hand.

use std::sync::Arc;

use ledger_gate::account::AccountStore;
use ledger_gate::auth::AuthService;
use ledger_gate::config::AppConfig;
use ledger_gate::db::Database;
use ledger_gate::gateway::{self, state::AppState};
use ledger_gate::logging::init_logging;
use ledger_gate::transfer::TransferEngine;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env);
    config.validate()?;

    let _guard = init_logging(&config);
    tracing::info!("Starting ledger_gate (env: {})", env);

    let db = Arc::new(
        Database::connect(&config.database.url, config.database.max_connections).await?,
    );
    let store = AccountStore::new(db.pool().clone());
    store.init_schema().await?;

    let auth = Arc::new(AuthService::new(
        store.clone(),
        config.jwt.secret.clone(),
        config.jwt.token_ttl_secs,
    ));
    let engine = Arc::new(TransferEngine::new(store.clone()));

    let state = Arc::new(AppState::new(db, store, auth, engine));

    gateway::run_server(&config.gateway.host, config.gateway.port, state).await;
    Ok(())
}
