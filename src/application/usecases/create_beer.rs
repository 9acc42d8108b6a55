// Use case: create_beer.

use crate::application::context::AppContext;
use crate::application::shared::beer_errors::BeerServiceError;
use crate::domain::entities::beer::{Beer, NewBeer};
use crate::infrastructure::db::stores::beer_store::BeerRepositoryError;
use metrics::counter;
use tracing::{info, instrument};

/// Registers a new beer. Names are unique across the whole stock.
pub struct CreateBeerUseCase;

impl CreateBeerUseCase {
    #[instrument(skip(ctx, beer), fields(name = %beer.name))]
    pub async fn execute(ctx: &AppContext, beer: NewBeer) -> Result<Beer, BeerServiceError> {
        // Step 1: Refuse duplicate names before writing anything.
        if ctx.repos.beer.get_by_name(&beer.name).await?.is_some() {
            return Err(BeerServiceError::AlreadyExists { name: beer.name });
        }

        // Step 2: Persist; a concurrent insert of the same name surfaces as a conflict.
        let stored = ctx.repos.beer.insert(&beer).await.map_err(|e| match e {
            BeerRepositoryError::Conflict => BeerServiceError::AlreadyExists {
                name: beer.name.clone(),
            },
            other => BeerServiceError::from(other),
        })?;

        counter!("beers_created_total").increment(1);
        info!(beer_id = stored.id.0, "beer_created");

        Ok(stored)
    }
}
