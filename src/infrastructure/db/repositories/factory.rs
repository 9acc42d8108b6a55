use std::sync::Arc;

use crate::infrastructure::db::database::{Database, DatabaseError};
use crate::infrastructure::db::memory::BeerStoreMemory;
use crate::infrastructure::db::postgres::PostgresDatabase;
use crate::infrastructure::db::postgres::beer_store_postgres::BeerStorePostgres;
use crate::infrastructure::db::repositories::beer_repository::BeerRepository;

#[derive(Clone)]
pub struct Repositories {
    pub db: Option<Arc<PostgresDatabase>>,
    pub beer: Arc<BeerRepository>,
}

impl Repositories {
    /// Build all repositories backed by Postgres stores.
    pub fn postgres(db: Arc<PostgresDatabase>) -> Self {
        let beer_store = Arc::new(BeerStorePostgres::new(db.clone()));

        Self {
            db: Some(db),
            beer: Arc::new(BeerRepository::new(beer_store)),
        }
    }

    /// Build repositories over process-local stores. Nothing survives a restart.
    pub fn in_memory() -> Self {
        Self {
            db: None,
            beer: Arc::new(BeerRepository::new(Arc::new(BeerStoreMemory::new()))),
        }
    }

    /// Check that the backing store answers. In-memory stores are always ready.
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        match self.db.as_ref() {
            Some(db) => db.ping().await,
            None => Ok(()),
        }
    }
}
