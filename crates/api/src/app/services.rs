use std::sync::Arc;
use std::time::Duration;

use storefront_assistant::Assistant;
use storefront_catalog::{seed, CatalogError, CatalogSource, HttpCatalogSource, StaticCatalogSource};

use crate::config::Config;

/// Everything the handlers share.
#[derive(Debug, Clone)]
pub struct AppServices {
    assistant: Arc<Assistant>,
    typing_delay: Duration,
}

impl AppServices {
    pub fn new(assistant: Arc<Assistant>, typing_delay: Duration) -> Self {
        Self {
            assistant,
            typing_delay,
        }
    }

    pub fn assistant(&self) -> &Assistant {
        &self.assistant
    }

    pub fn typing_delay(&self) -> Duration {
        self.typing_delay
    }
}

/// Pick the catalog source from config: the remote product service when a URL is
/// configured, otherwise the built-in seed catalog.
pub fn catalog_source(config: &Config) -> Result<Arc<dyn CatalogSource>, CatalogError> {
    match &config.catalog_url {
        Some(url) => {
            let source = HttpCatalogSource::with_timeout(url, config.catalog_timeout)?;
            tracing::info!(url = source.url(), "using remote catalog");
            Ok(Arc::new(source))
        }
        None => {
            tracing::info!("using built-in seed catalog");
            Ok(Arc::new(StaticCatalogSource::new(seed::products())))
        }
    }
}

pub fn build_services(config: &Config) -> Result<AppServices, CatalogError> {
    let assistant = Assistant::new(catalog_source(config)?);
    Ok(AppServices::new(Arc::new(assistant), config.typing_delay))
}
