// Use case: delete_beer.

use crate::application::context::AppContext;
use crate::application::shared::beer_errors::BeerServiceError;
use crate::domain::value_objects::ids::BeerId;
use metrics::counter;
use tracing::{info, instrument};

/// Removes a beer from stock.
pub struct DeleteBeerUseCase;

impl DeleteBeerUseCase {
    #[instrument(skip(ctx))]
    pub async fn execute(ctx: &AppContext, id: BeerId) -> Result<(), BeerServiceError> {
        // Step 1: The store ignores missing ids, so check first.
        if !ctx.repos.beer.exists(id).await? {
            return Err(BeerServiceError::NotFound { id });
        }

        // Step 2: Delete.
        ctx.repos.beer.delete(id).await?;

        counter!("beers_deleted_total").increment(1);
        info!(beer_id = id.0, "beer_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::DeleteBeerUseCase;
    use crate::application::context::test_support::{brahma, seed, test_context};
    use crate::application::shared::beer_errors::BeerServiceError;
    use crate::application::usecases::get_beer::GetBeerUseCase;
    use crate::application::usecases::list_beers::ListBeersUseCase;
    use crate::domain::value_objects::ids::BeerId;

    #[tokio::test]
    async fn given_existing_beer_when_execute_should_remove_it() {
        let ctx = test_context();
        let stored = seed(&ctx, brahma()).await;

        DeleteBeerUseCase::execute(&ctx, stored.id).await.unwrap();

        let found = GetBeerUseCase::by_id(&ctx, stored.id).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn given_missing_beer_when_execute_should_return_not_found_without_writing() {
        let ctx = test_context();
        seed(&ctx, brahma()).await;

        let result = DeleteBeerUseCase::execute(&ctx, BeerId(99)).await;

        assert!(matches!(
            result,
            Err(BeerServiceError::NotFound { id: BeerId(99) })
        ));
        assert_eq!(ListBeersUseCase::execute(&ctx).await.unwrap().len(), 1);
    }
}
