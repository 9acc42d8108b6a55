pub mod beer;
