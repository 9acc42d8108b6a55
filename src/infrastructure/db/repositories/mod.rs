pub mod beer_repository;
pub mod factory;

pub use factory::Repositories;
