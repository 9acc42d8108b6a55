pub mod beer;

pub use beer::{BeerRow, NewBeerRow};
