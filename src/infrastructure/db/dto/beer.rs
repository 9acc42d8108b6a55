use crate::domain::entities::beer::{Beer, BeerType, NewBeer};
use crate::domain::value_objects::ids::BeerId;

/// A row of the `beers` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct BeerRow {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub max: i32,
    pub quantity: i32,
    pub beer_type: String,
}

/// Column values for a beer that has no identifier yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBeerRow {
    pub name: String,
    pub brand: String,
    pub max: i32,
    pub quantity: i32,
    pub beer_type: String,
}

impl BeerRow {
    pub fn from_beer(beer: &Beer) -> Self {
        Self {
            id: beer.id.0,
            name: beer.name.clone(),
            brand: beer.brand.clone(),
            max: beer.max,
            quantity: beer.quantity,
            beer_type: beer.beer_type.as_str().to_string(),
        }
    }

    /// Convert back to the entity. Returns `None` if the stored type tag is unknown.
    pub fn into_beer(self) -> Option<Beer> {
        let beer_type = self.beer_type.parse::<BeerType>().ok()?;
        Some(Beer {
            id: BeerId(self.id),
            name: self.name,
            brand: self.brand,
            max: self.max,
            quantity: self.quantity,
            beer_type,
        })
    }
}

impl NewBeerRow {
    pub fn from_new_beer(beer: &NewBeer) -> Self {
        Self {
            name: beer.name.clone(),
            brand: beer.brand.clone(),
            max: beer.max,
            quantity: beer.quantity,
            beer_type: beer.beer_type.as_str().to_string(),
        }
    }

    pub fn with_id(self, id: i64) -> BeerRow {
        BeerRow {
            id,
            name: self.name,
            brand: self.brand,
            max: self.max,
            quantity: self.quantity,
            beer_type: self.beer_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BeerRow, NewBeerRow};
    use crate::domain::entities::beer::{Beer, BeerType, NewBeer};
    use crate::domain::value_objects::ids::BeerId;

    fn sample_beer() -> Beer {
        Beer {
            id: BeerId(3),
            name: "Guinness".to_string(),
            brand: "Diageo".to_string(),
            max: 100,
            quantity: 40,
            beer_type: BeerType::Stout,
        }
    }

    #[test]
    fn given_beer_when_from_beer_should_map_fields() {
        let beer = sample_beer();

        let row = BeerRow::from_beer(&beer);

        assert_eq!(row.id, 3);
        assert_eq!(row.name, "Guinness");
        assert_eq!(row.brand, "Diageo");
        assert_eq!(row.max, 100);
        assert_eq!(row.quantity, 40);
        assert_eq!(row.beer_type, "STOUT");
    }

    #[test]
    fn given_beer_row_when_into_beer_should_map_fields() {
        let beer = sample_beer();

        let mapped = BeerRow::from_beer(&beer).into_beer();

        assert_eq!(mapped, Some(beer));
    }

    #[test]
    fn given_unknown_type_tag_when_into_beer_should_return_none() {
        let mut row = BeerRow::from_beer(&sample_beer());
        row.beer_type = "PILSEN".to_string();

        assert!(row.into_beer().is_none());
    }

    #[test]
    fn given_new_beer_when_from_new_beer_should_store_type_tag() {
        let new_beer = NewBeer {
            name: "Colorado Indica".to_string(),
            brand: "Colorado".to_string(),
            max: 60,
            quantity: 0,
            beer_type: BeerType::Ipa,
        };

        let row = NewBeerRow::from_new_beer(&new_beer).with_id(9);

        assert_eq!(row.id, 9);
        assert_eq!(row.beer_type, "IPA");
    }
}
