//! App Context

use std::sync::Arc;

use thiserror::Error;

use itinera::rates::RateCatalog;

use crate::{
    database::{self, Db},
    domain::{
        carts::{CartsService, SessionCartsService},
        vouchers::{PgVouchersService, VouchersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub rates: Arc<RateCatalog>,
    pub carts: Arc<dyn CartsService>,
    pub vouchers: Arc<dyn VouchersService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// Carts are session-scoped and live in process memory; only vouchers
    /// reach the database. The rate catalog is the bundled sample sheet
    /// until rate-sheet ingestion exists.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url).await.map_err(AppInitError::Database)?;

        let db = Db::new(pool);
        let rates = Arc::new(RateCatalog::bundled_sample());

        Ok(Self {
            carts: Arc::new(SessionCartsService::new(Arc::clone(&rates))),
            vouchers: Arc::new(PgVouchersService::new(db)),
            rates,
        })
    }
}
