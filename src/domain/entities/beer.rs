use crate::domain::value_objects::ids::BeerId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Fixed, closed set of beer categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BeerType {
    Lager,
    Malzbier,
    Witbier,
    Weiss,
    Ale,
    Ipa,
    Stout,
}

impl BeerType {
    pub const ALL: [BeerType; 7] = [
        BeerType::Lager,
        BeerType::Malzbier,
        BeerType::Witbier,
        BeerType::Weiss,
        BeerType::Ale,
        BeerType::Ipa,
        BeerType::Stout,
    ];

    /// Upper-case tag used on the wire and in the `beers.type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            BeerType::Lager => "LAGER",
            BeerType::Malzbier => "MALZBIER",
            BeerType::Witbier => "WITBIER",
            BeerType::Weiss => "WEISS",
            BeerType::Ale => "ALE",
            BeerType::Ipa => "IPA",
            BeerType::Stout => "STOUT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBeerType(pub String);

impl FromStr for BeerType {
    type Err = UnknownBeerType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BeerType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownBeerType(s.to_string()))
    }
}

/// A beer that has been persisted and owns an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Beer {
    pub id: BeerId,
    pub name: String,
    pub brand: String,
    pub max: i32,
    pub quantity: i32,
    pub beer_type: BeerType,
}

/// A beer that has passed validation but was not stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBeer {
    pub name: String,
    pub brand: String,
    pub max: i32,
    pub quantity: i32,
    pub beer_type: BeerType,
}

impl NewBeer {
    /// Attach the identifier the store assigned to this beer.
    pub fn with_id(self, id: BeerId) -> Beer {
        Beer {
            id,
            name: self.name,
            brand: self.brand,
            max: self.max,
            quantity: self.quantity,
            beer_type: self.beer_type,
        }
    }
}

impl Beer {
    /// Returns `true` when the stock respects `0 <= quantity <= max`.
    pub fn has_valid_stock(&self) -> bool {
        (0..=self.max).contains(&self.quantity)
    }
}
