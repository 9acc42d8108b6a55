pub mod beer_store_postgres;
mod database;

pub use database::{BEERS_SCHEMA, PostgresDatabase};
