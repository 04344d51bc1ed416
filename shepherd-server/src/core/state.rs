use std::sync::Arc;

use crate::core::Config;
use crate::db::Database;

/// Cloneable handle shared by every request handler
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub db: Database,
}

impl ServerState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            db: Database::new(),
        }
    }
}
