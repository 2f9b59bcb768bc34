use std::sync::Arc;

use crate::{config::Config, error::AppResult, infrastructure::FileStore, services::DataService};

#[derive(Clone)]
pub struct AppState {
    pub data: Arc<DataService>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        // Initialize storage
        let store = Arc::new(FileStore::new(&config.storage.data_dir)?);

        // Initialize the data service and seed the collections
        let data = Arc::new(DataService::new(store));
        data.init()?;

        Ok(Self { data, config })
    }
}
