use crate::domain::entities::beer::{Beer, NewBeer};
use crate::domain::value_objects::ids::BeerId;
use crate::infrastructure::db::dto::{BeerRow, NewBeerRow};
use crate::infrastructure::db::stores::beer_store::{BeerRepositoryError, BeerStore};
use std::sync::Arc;
use tracing::warn;

pub struct BeerRepository {
    store: Arc<dyn BeerStore>,
}

fn to_beer(row: BeerRow) -> Result<Beer, BeerRepositoryError> {
    let id = row.id;
    row.into_beer().ok_or_else(|| {
        warn!(beer_id = id, "beer_row_has_unknown_type");
        BeerRepositoryError::InvalidInput
    })
}

impl BeerRepository {
    /// Build a repository that uses the given store implementation.
    pub fn new(store: Arc<dyn BeerStore>) -> Self {
        Self { store }
    }

    /// Fetch every beer.
    pub async fn list(&self) -> Result<Vec<Beer>, BeerRepositoryError> {
        let rows = self.store.list().await?;
        rows.into_iter().map(to_beer).collect()
    }

    /// Fetch a beer by its ID. Returns `None` if it doesn't exist.
    pub async fn get(&self, id: BeerId) -> Result<Option<Beer>, BeerRepositoryError> {
        self.store.get(id.0).await?.map(to_beer).transpose()
    }

    /// Fetch a beer by its name. Returns `None` if it doesn't exist.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Beer>, BeerRepositoryError> {
        self.store.get_by_name(name).await?.map(to_beer).transpose()
    }

    pub async fn exists(&self, id: BeerId) -> Result<bool, BeerRepositoryError> {
        self.store.exists(id.0).await
    }

    /// Store a new beer and return it with the identifier the store assigned.
    pub async fn insert(&self, beer: &NewBeer) -> Result<Beer, BeerRepositoryError> {
        let stored = self.store.insert(&NewBeerRow::from_new_beer(beer)).await?;
        to_beer(stored)
    }

    /// Overwrite every field of an existing beer.
    pub async fn update(&self, beer: &Beer) -> Result<Beer, BeerRepositoryError> {
        let stored = self.store.update(&BeerRow::from_beer(beer)).await?;
        to_beer(stored)
    }

    /// Delete a beer by its ID. Missing IDs are ignored; callers check existence first.
    pub async fn delete(&self, id: BeerId) -> Result<(), BeerRepositoryError> {
        self.store.delete(id.0).await
    }

    /// Atomically move the quantity from `expected` to `new`.
    ///
    /// Returns `None` when another writer changed the quantity first or the beer is gone.
    pub async fn compare_and_set_quantity(
        &self,
        id: BeerId,
        expected: i32,
        new: i32,
    ) -> Result<Option<Beer>, BeerRepositoryError> {
        self.store
            .compare_and_set_quantity(id.0, expected, new)
            .await?
            .map(to_beer)
            .transpose()
    }
}
