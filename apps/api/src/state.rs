use std::sync::Arc;

use crate::catalog::snapshot::CatalogSnapshot;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Catalog snapshot taken at startup. Handlers hand slices of it to the
    /// engine; nothing writes to it after boot.
    pub catalog: Arc<CatalogSnapshot>,
    pub config: Config,
}
