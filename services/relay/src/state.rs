use crate::config::AppConfig;
use crate::provider::ChatProvider;
use datactx::{Dataset, QueryClassifier, Transcript};
use std::sync::Arc;
use tokio::sync::RwLock;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub cfg: AppConfig,
    pub provider: Box<dyn ChatProvider>,
    pub classifier: QueryClassifier,
    pub dataset: RwLock<Dataset>,
    pub transcript: RwLock<Transcript>,
}

impl AppState {
    pub fn new(cfg: AppConfig, provider: Box<dyn ChatProvider>) -> Self {
        Self {
            cfg,
            provider,
            classifier: QueryClassifier::default(),
            dataset: RwLock::new(Dataset::new()),
            transcript: RwLock::new(Transcript::new()),
        }
    }

    /// Wholesale dataset replacement; consumers only ever observe the old
    /// snapshot or the new one.
    pub async fn replace_dataset(&self, dataset: Dataset) {
        *self.dataset.write().await = dataset;
    }
}
