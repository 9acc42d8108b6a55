// HTTP routes: beer stock.

use crate::application::usecases::adjust_stock::AdjustStockUseCase;
use crate::application::usecases::create_beer::CreateBeerUseCase;
use crate::application::usecases::delete_beer::DeleteBeerUseCase;
use crate::application::usecases::get_beer::GetBeerUseCase;
use crate::application::usecases::list_beers::ListBeersUseCase;
use crate::domain::entities::beer::Beer;
use crate::domain::value_objects::ids::BeerId;
use crate::domain::workflows::stock_adjustment::StockDirection;
use crate::interface::http::dto::beer::{BeerRequest, BeerResponse, QuantityRequest};
use crate::interface::http::problem::{api_error, malformed_body, service_error, validation_failed};
use crate::interface::http::state::AppState;
use crate::interface::http::validation::{validate_beer, validate_quantity};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch};

const BASE: &str = "/api/v1/beers";

/// Builds the beer stock routes under `/api/v1/beers`.
pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route(BASE, get(list_beers).post(create_beer))
        .route(&format!("{BASE}/"), get(list_beers).post(create_beer))
        .route(&format!("{BASE}/name/:name"), get(get_beer_by_name))
        .route(&format!("{BASE}/:id"), get(get_beer).delete(delete_beer))
        .route(&format!("{BASE}/:id/increment"), patch(increment_stock))
        .route(&format!("{BASE}/:id/decrement"), patch(decrement_stock))
}

fn parse_id(raw: &str) -> Result<BeerId, Response> {
    BeerId::parse(raw).ok_or_else(|| {
        api_error(
            StatusCode::BAD_REQUEST,
            format!("invalid beer id '{raw}'"),
            None,
        )
    })
}

fn beer_json(status: StatusCode, beer: Beer) -> Response {
    (status, Json(BeerResponse::from(beer))).into_response()
}

async fn list_beers(State(state): State<AppState>) -> Response {
    match ListBeersUseCase::execute(&state.ctx).await {
        Ok(beers) => {
            let body: Vec<BeerResponse> = beers.into_iter().map(BeerResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => service_error(err),
    }
}

async fn get_beer(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match GetBeerUseCase::by_id(&state.ctx, id).await {
        Ok(Some(beer)) => beer_json(StatusCode::OK, beer),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => service_error(err),
    }
}

async fn get_beer_by_name(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match GetBeerUseCase::by_name(&state.ctx, &name).await {
        Ok(Some(beer)) => beer_json(StatusCode::OK, beer),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => service_error(err),
    }
}

/// Creates a beer after validating every field.
async fn create_beer(
    State(state): State<AppState>,
    payload: Result<Json<BeerRequest>, JsonRejection>,
) -> Response {
    // Step 1: Parse and validate the payload.
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return malformed_body(rejection),
    };
    let beer = match validate_beer(&payload) {
        Ok(beer) => beer,
        Err(errors) => return validation_failed(errors),
    };

    // Step 2: Execute the use case and map the outcome.
    match CreateBeerUseCase::execute(&state.ctx, beer).await {
        Ok(stored) => beer_json(StatusCode::CREATED, stored),
        Err(err) => service_error(err),
    }
}

async fn delete_beer(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match DeleteBeerUseCase::execute(&state.ctx, id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => service_error(err),
    }
}

async fn increment_stock(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<QuantityRequest>, JsonRejection>,
) -> Response {
    adjust_stock(state, StockDirection::Increment, &id, payload).await
}

async fn decrement_stock(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<QuantityRequest>, JsonRejection>,
) -> Response {
    adjust_stock(state, StockDirection::Decrement, &id, payload).await
}

async fn adjust_stock(
    state: AppState,
    direction: StockDirection,
    id: &str,
    payload: Result<Json<QuantityRequest>, JsonRejection>,
) -> Response {
    // Step 1: Parse the id and the delta.
    let id = match parse_id(id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return malformed_body(rejection),
    };
    let delta = match validate_quantity(&payload) {
        Ok(delta) => delta,
        Err(errors) => return validation_failed(errors),
    };

    // Step 2: Execute the adjustment.
    let result = match direction {
        StockDirection::Increment => AdjustStockUseCase::increment(&state.ctx, id, delta).await,
        StockDirection::Decrement => AdjustStockUseCase::decrement(&state.ctx, id, delta).await,
    };

    match result {
        Ok(beer) => beer_json(StatusCode::OK, beer),
        Err(err) => service_error(err),
    }
}
