pub mod beer_errors;
