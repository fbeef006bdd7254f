//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;

/// State shared by all handlers.
///
/// Cheap to clone: the service is reference-counted and the base URL is shared.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn LinkRepository>>,
    /// Public prefix used to build `short_url` values.
    pub base_url: Arc<str>,
}

impl AppState {
    /// Builds state over any repository backend.
    pub fn new(link_repository: Arc<dyn LinkRepository>, base_url: impl Into<Arc<str>>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository)),
            base_url: base_url.into(),
        }
    }
}
