// Use case: get_beer.

use crate::application::context::AppContext;
use crate::application::shared::beer_errors::BeerServiceError;
use crate::domain::entities::beer::Beer;
use crate::domain::value_objects::ids::BeerId;
use tracing::instrument;

/// Looks up a single beer. Absence is a normal outcome, not an error.
pub struct GetBeerUseCase;

impl GetBeerUseCase {
    #[instrument(skip(ctx))]
    pub async fn by_id(ctx: &AppContext, id: BeerId) -> Result<Option<Beer>, BeerServiceError> {
        Ok(ctx.repos.beer.get(id).await?)
    }

    #[instrument(skip(ctx))]
    pub async fn by_name(ctx: &AppContext, name: &str) -> Result<Option<Beer>, BeerServiceError> {
        Ok(ctx.repos.beer.get_by_name(name).await?)
    }
}
