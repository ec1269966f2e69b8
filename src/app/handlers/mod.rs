//! logic handler stuff
mod catalog;

use {
    crate::{catalog::Catalog, error::Result, serve::StorefrontServer},
    std::sync::Arc,
};

/// logic handlers
pub struct Handlers {
    /// the loaded catalog
    pub(crate) catalog: Arc<Catalog>,
}

impl Handlers {
    /// make a new set of handlers
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// run the storefront server until it shuts down
    pub async fn serve(&self) -> Result<()> {
        StorefrontServer::from_config(self.catalog.clone())?
            .serve()
            .await
    }
}
