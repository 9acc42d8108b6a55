use crate::domain::value_objects::ids::BeerId;
use crate::domain::workflows::stock_adjustment::StockExceeded;
use crate::infrastructure::db::stores::beer_store::BeerRepositoryError;
use thiserror::Error;

/// Failures reported by the beer use cases.
#[derive(Debug, Error)]
pub enum BeerServiceError {
    #[error("Beer with name '{name}' already exist in the system.")]
    AlreadyExists { name: String },

    #[error("Beer with id '{id}' not found.")]
    NotFound { id: BeerId },

    #[error(transparent)]
    StockExceeded(#[from] StockExceeded),

    #[error("Stock of beer with id '{id}' is changing too fast, try again.")]
    Contended { id: BeerId },

    #[error("storage unavailable: {0}")]
    Storage(String),
}

impl From<BeerRepositoryError> for BeerServiceError {
    fn from(err: BeerRepositoryError) -> Self {
        BeerServiceError::Storage(format!("{err:?}"))
    }
}
