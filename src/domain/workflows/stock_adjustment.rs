use crate::domain::entities::beer::Beer;
use crate::domain::value_objects::ids::BeerId;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockDirection {
    Increment,
    Decrement,
}

impl StockDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockDirection::Increment => "increment",
            StockDirection::Decrement => "decrement",
        }
    }
}

impl fmt::Display for StockDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when an adjustment would leave the stock outside `[0, max]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockExceeded {
    pub id: BeerId,
    pub direction: StockDirection,
    pub delta: i32,
    pub max: i32,
    pub current: i32,
}

impl fmt::Display for StockExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            StockDirection::Increment => write!(
                f,
                "Cannot increment '{}' on beer with id '{}' because it already has '{}' and '{}' is the maximum.",
                self.delta, self.id, self.current, self.max
            ),
            StockDirection::Decrement => write!(
                f,
                "Cannot decrement '{}' on beer with id '{}' because it only has '{}' and '0' is the minimum.",
                self.delta, self.id, self.current
            ),
        }
    }
}

impl std::error::Error for StockExceeded {}

/// A requested change to a beer's stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockAdjustment {
    pub direction: StockDirection,
    pub delta: i32,
}

impl StockAdjustment {
    pub fn increment(delta: i32) -> Self {
        Self {
            direction: StockDirection::Increment,
            delta,
        }
    }

    pub fn decrement(delta: i32) -> Self {
        Self {
            direction: StockDirection::Decrement,
            delta,
        }
    }

    /// Compute the quantity the beer would hold after this adjustment.
    ///
    /// Both bounds are inclusive: reaching exactly `max` on increment or
    /// exactly `0` on decrement succeeds.
    pub fn apply(&self, beer: &Beer) -> Result<i32, StockExceeded> {
        // Step 1: Compute the target quantity; overflow counts as out of bounds.
        let target = match self.direction {
            StockDirection::Increment => beer.quantity.checked_add(self.delta),
            StockDirection::Decrement => beer.quantity.checked_sub(self.delta),
        };

        // Step 2: Reject anything outside [0, max].
        match target {
            Some(quantity) if (0..=beer.max).contains(&quantity) => Ok(quantity),
            _ => Err(StockExceeded {
                id: beer.id,
                direction: self.direction,
                delta: self.delta,
                max: beer.max,
                current: beer.quantity,
            }),
        }
    }
}
