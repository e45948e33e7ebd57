use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::store::ListStore;

pub struct AppState {
    pub config: AppConfig,
    store: RwLock<ListStore>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Arc<Self> {
        Arc::new(Self {
            config,
            store: RwLock::new(ListStore::new()),
        })
    }

    pub fn store(&self) -> Result<RwLockReadGuard<'_, ListStore>, AppError> {
        self.store
            .read()
            .map_err(|_| AppError::internal("list store lock poisoned"))
    }

    pub fn store_mut(&self) -> Result<RwLockWriteGuard<'_, ListStore>, AppError> {
        self.store
            .write()
            .map_err(|_| AppError::internal("list store lock poisoned"))
    }
}
