mod beer_store_memory;

pub use beer_store_memory::BeerStoreMemory;
