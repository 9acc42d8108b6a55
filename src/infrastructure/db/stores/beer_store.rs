use crate::infrastructure::db::database::DatabaseError;
use crate::infrastructure::db::dto::{BeerRow, NewBeerRow};
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeerRepositoryError {
    NotFound,
    Conflict,
    InvalidInput,
    StorageUnavailable,
}

impl From<DatabaseError> for BeerRepositoryError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::UniqueViolation(_) => BeerRepositoryError::Conflict,
            _ => BeerRepositoryError::StorageUnavailable,
        }
    }
}

#[async_trait]
pub trait BeerStore: Send + Sync {
    /// Fetch every beer, ordered by ID.
    async fn list(&self) -> Result<Vec<BeerRow>, BeerRepositoryError>;
    /// Fetch a beer by its ID. Returns `None` if it doesn't exist.
    async fn get(&self, id: i64) -> Result<Option<BeerRow>, BeerRepositoryError>;
    /// Fetch a beer by its unique name. Returns `None` if it doesn't exist.
    async fn get_by_name(&self, name: &str) -> Result<Option<BeerRow>, BeerRepositoryError>;
    async fn exists(&self, id: i64) -> Result<bool, BeerRepositoryError>;
    /// Create a beer and return exactly what was stored, including the assigned ID.
    /// Returns `Conflict` when the name is already taken.
    async fn insert(&self, row: &NewBeerRow) -> Result<BeerRow, BeerRepositoryError>;
    /// Overwrite every column of an existing beer.
    async fn update(&self, row: &BeerRow) -> Result<BeerRow, BeerRepositoryError>;
    /// Delete a beer by its ID. Deleting a missing ID is a no-op.
    async fn delete(&self, id: i64) -> Result<(), BeerRepositoryError>;
    /// Write `new` only if the stored quantity still equals `expected`.
    ///
    /// Returns `None` when the row is gone or the quantity moved.
    async fn compare_and_set_quantity(
        &self,
        id: i64,
        expected: i32,
        new: i32,
    ) -> Result<Option<BeerRow>, BeerRepositoryError>;
}
