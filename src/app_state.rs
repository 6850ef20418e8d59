//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::AccountService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Account service for all business logic.
    pub account_service: Arc<AccountService>,
}

impl AppState {
    /// Wraps a service for sharing across handlers.
    #[must_use]
    pub fn new(account_service: AccountService) -> Self {
        Self {
            account_service: Arc::new(account_service),
        }
    }
}
