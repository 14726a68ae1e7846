//! Shared application state.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::repository::{SeaOrmSheetRepository, SheetRepository};

#[derive(Clone)]
pub struct AppState {
    /// The sheet behind the scripting endpoint.
    pub sheet: Arc<dyn SheetRepository>,
}

impl AppState {
    pub fn new(sheet: Arc<dyn SheetRepository>) -> Self {
        Self { sheet }
    }

    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmSheetRepository::new(db)))
    }
}
