use crate::domain::entities::beer::{Beer, BeerType};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/beers`. Every field is optional here so that a
/// missing field is reported by validation instead of failing to parse.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BeerRequest {
    /// Ignored on create; the store assigns identifiers.
    pub id: Option<i64>,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub max: Option<i32>,
    pub quantity: Option<i32>,
    #[serde(rename = "type")]
    pub beer_type: Option<BeerType>,
}

/// Body of the increment/decrement routes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuantityRequest {
    pub quantity: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeerResponse {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub max: i32,
    pub quantity: i32,
    #[serde(rename = "type")]
    pub beer_type: BeerType,
}

impl From<Beer> for BeerResponse {
    fn from(beer: Beer) -> Self {
        Self {
            id: beer.id.0,
            name: beer.name,
            brand: beer.brand,
            max: beer.max,
            quantity: beer.quantity,
            beer_type: beer.beer_type,
        }
    }
}
