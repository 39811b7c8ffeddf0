use std::sync::Arc;

use crate::account::AccountStore;
use crate::auth::AuthService;
use crate::db::Database;
use crate::transfer::TransferEngine;

/// Shared gateway state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub store: AccountStore,
    pub auth: Arc<AuthService>,
    pub engine: Arc<TransferEngine>,
}

impl AppState {
    pub fn new(
        db: Arc<Database>,
        store: AccountStore,
        auth: Arc<AuthService>,
        engine: Arc<TransferEngine>,
    ) -> Self {
        Self {
            db,
            store,
            auth,
            engine,
        }
    }
}
