pub mod beer;
pub mod health;
pub mod metrics;
pub mod ready;
