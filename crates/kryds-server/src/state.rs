use std::sync::Arc;

use kryds_config::Config;
use kryds_config::helper::HelperConfig;
use kryds_core::LookupService;
use kryds_helper::{Helper, HelperError};
use kryds_lang_danish::DanishHelper;

use crate::storage::Storage;

pub struct AppState {
    pub config: Config,
    pub service: LookupService,
    pub storage: Storage,
}

impl AppState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let service = LookupService::new(helpers(&config.helper)?);
        let storage = Storage::open(&config.storage).await?;

        Ok(Self::from_parts(config, service, storage))
    }

    pub fn from_parts(config: Config, service: LookupService, storage: Storage) -> Self {
        Self {
            config,
            service,
            storage,
        }
    }
}

/// Every supported help language
fn helpers(config: &HelperConfig) -> Result<Vec<Arc<dyn Helper>>, HelperError> {
    let danish = DanishHelper::with_base_url(&config.danish_url, config.timeout())?;
    tracing::info!("Danish help via {}", danish.metadata().host);

    Ok(vec![Arc::new(danish)])
}
