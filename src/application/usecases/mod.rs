pub mod adjust_stock;
pub mod create_beer;
pub mod delete_beer;
pub mod get_beer;
pub mod list_beers;
