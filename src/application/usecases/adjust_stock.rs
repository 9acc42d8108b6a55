// Use case: adjust_stock.

use crate::application::context::AppContext;
use crate::application::shared::beer_errors::BeerServiceError;
use crate::domain::entities::beer::Beer;
use crate::domain::value_objects::ids::BeerId;
use crate::domain::workflows::stock_adjustment::StockAdjustment;
use metrics::counter;
use tracing::{debug, info, instrument, warn};

/// Increments or decrements a beer's stock within `[0, max]`.
///
/// The write is a compare-and-set on the quantity that was read, so two
/// concurrent adjustments of the same beer cannot overwrite each other. A
/// lost race re-reads the beer and re-checks the bounds before trying again.
pub struct AdjustStockUseCase;

#[derive(Debug, Clone, Copy)]
pub struct AdjustStockCommand {
    pub id: BeerId,
    pub adjustment: StockAdjustment,
}

impl AdjustStockUseCase {
    pub async fn increment(
        ctx: &AppContext,
        id: BeerId,
        delta: i32,
    ) -> Result<Beer, BeerServiceError> {
        Self::execute(
            ctx,
            AdjustStockCommand {
                id,
                adjustment: StockAdjustment::increment(delta),
            },
        )
        .await
    }

    pub async fn decrement(
        ctx: &AppContext,
        id: BeerId,
        delta: i32,
    ) -> Result<Beer, BeerServiceError> {
        Self::execute(
            ctx,
            AdjustStockCommand {
                id,
                adjustment: StockAdjustment::decrement(delta),
            },
        )
        .await
    }

    #[instrument(skip(ctx))]
    pub async fn execute(
        ctx: &AppContext,
        cmd: AdjustStockCommand,
    ) -> Result<Beer, BeerServiceError> {
        let direction = cmd.adjustment.direction.as_str();
        let attempts = ctx.stock.max_adjust_attempts.max(1);

        for attempt in 1..=attempts {
            // Step 1: Load the current stock.
            let Some(beer) = ctx.repos.beer.get(cmd.id).await? else {
                counter!("stock_adjustments_total", "direction" => direction, "outcome" => "not_found")
                    .increment(1);
                return Err(BeerServiceError::NotFound { id: cmd.id });
            };

            // Step 2: Check the bounds before touching the store.
            let target = match cmd.adjustment.apply(&beer) {
                Ok(quantity) => quantity,
                Err(exceeded) => {
                    counter!("stock_adjustments_total", "direction" => direction, "outcome" => "exceeded")
                        .increment(1);
                    return Err(exceeded.into());
                }
            };

            // Step 3: Write only if nobody moved the quantity since step 1.
            if let Some(updated) = ctx
                .repos
                .beer
                .compare_and_set_quantity(cmd.id, beer.quantity, target)
                .await?
            {
                counter!("stock_adjustments_total", "direction" => direction, "outcome" => "applied")
                    .increment(1);
                info!(
                    beer_id = cmd.id.0,
                    direction,
                    from = beer.quantity,
                    to = updated.quantity,
                    "stock_adjusted"
                );
                return Ok(updated);
            }

            debug!(beer_id = cmd.id.0, attempt, "stock_adjustment_raced");
        }

        counter!("stock_adjustments_total", "direction" => direction, "outcome" => "contended")
            .increment(1);
        warn!(beer_id = cmd.id.0, attempts, "stock_adjustment_contended");
        Err(BeerServiceError::Contended { id: cmd.id })
    }
}
