// Use case: list_beers.

use crate::application::context::AppContext;
use crate::application::shared::beer_errors::BeerServiceError;
use crate::domain::entities::beer::Beer;
use tracing::instrument;

/// Returns every beer in stock. No filtering, no pagination.
pub struct ListBeersUseCase;

impl ListBeersUseCase {
    #[instrument(skip(ctx))]
    pub async fn execute(ctx: &AppContext) -> Result<Vec<Beer>, BeerServiceError> {
        Ok(ctx.repos.beer.list().await?)
    }
}
