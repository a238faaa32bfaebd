//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use trivia_api::domain::EmptyCategoryPolicy;
use trivia_api::domain::pagination::PageSize;
use trivia_api::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) page_size: PageSize,
    pub(crate) empty_category: EmptyCategoryPolicy,
}

impl ServerConfig {
    /// Configuration serving the in-memory store with default paging.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            page_size: PageSize::default(),
            empty_category: EmptyCategoryPolicy::default(),
        }
    }

    /// Serve questions and categories from PostgreSQL instead of memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub fn with_empty_category_policy(mut self, policy: EmptyCategoryPolicy) -> Self {
        self.empty_category = policy;
        self
    }
}
