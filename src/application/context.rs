use crate::config::Stock;
use crate::infrastructure::db::repositories::Repositories;

/// Shared application resources used by use cases.
pub struct AppContext {
    pub repos: Repositories,
    pub stock: Stock,
}

impl AppContext {
    /// Build a new application context with shared repositories and stock settings.
    pub fn new(repos: Repositories, stock: Stock) -> Self {
        Self { repos, stock }
    }
}
