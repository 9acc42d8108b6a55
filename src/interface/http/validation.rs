use crate::domain::entities::beer::NewBeer;
use crate::interface::http::dto::beer::{BeerRequest, QuantityRequest};

const TEXT_MAX_CHARS: usize = 200;
const MAX_CAPACITY: i32 = 500;
const MAX_QUANTITY: i32 = 100;

fn violation(field: &str, reason: &str) -> String {
    format!("{field}: {reason}")
}

fn check_text(field: &str, value: Option<&str>, errors: &mut Vec<String>) -> Option<String> {
    match value {
        None => {
            errors.push(violation(field, "must not be blank"));
            None
        }
        Some(v) if v.trim().is_empty() => {
            errors.push(violation(field, "must not be blank"));
            None
        }
        Some(v) if v.chars().count() > TEXT_MAX_CHARS => {
            errors.push(violation(field, "size must be between 1 and 200"));
            None
        }
        Some(v) => Some(v.to_string()),
    }
}

fn check_range(field: &str, value: Option<i32>, max: i32, errors: &mut Vec<String>) -> Option<i32> {
    match value {
        None => {
            errors.push(violation(field, "must not be null"));
            None
        }
        Some(v) if v < 0 => {
            errors.push(violation(field, "must be greater than or equal to 0"));
            None
        }
        Some(v) if v > max => {
            errors.push(violation(field, &format!("must be less than or equal to {max}")));
            None
        }
        Some(v) => Some(v),
    }
}

/// Validate a create payload, returning the beer to store or every violation found.
pub fn validate_beer(request: &BeerRequest) -> Result<NewBeer, Vec<String>> {
    let mut errors = Vec::new();

    let name = check_text("name", request.name.as_deref(), &mut errors);
    let brand = check_text("brand", request.brand.as_deref(), &mut errors);
    let max = check_range("max", request.max, MAX_CAPACITY, &mut errors);
    let quantity = check_range("quantity", request.quantity, MAX_QUANTITY, &mut errors);
    if request.beer_type.is_none() {
        errors.push(violation("type", "must not be null"));
    }
    if let (Some(max), Some(quantity)) = (max, quantity) {
        if quantity > max {
            errors.push(violation("quantity", "must be less than or equal to max"));
        }
    }

    match (name, brand, max, quantity, request.beer_type) {
        (Some(name), Some(brand), Some(max), Some(quantity), Some(beer_type)) if errors.is_empty() => {
            Ok(NewBeer {
                name,
                brand,
                max,
                quantity,
                beer_type,
            })
        }
        _ => Err(errors),
    }
}

/// Validate an increment/decrement payload, returning the delta.
pub fn validate_quantity(request: &QuantityRequest) -> Result<i32, Vec<String>> {
    match request.quantity {
        None => Err(vec![violation("quantity", "must not be null")]),
        Some(q) if q <= 0 => Err(vec![violation("quantity", "must be greater than 0")]),
        Some(q) => Ok(q),
    }
}
