use anyhow::{Context, Result};

use crate::catalog::RecordStore;
use crate::config::Config;

/// Everything a page render reads. Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub store: RecordStore,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let store = RecordStore::seeded().context("Failed to seed record store")?;
        Ok(Self { config, store })
    }
}
