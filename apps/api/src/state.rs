use std::sync::Arc;

use crate::identity::IdentityVerifier;
use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no provider credential is configured; generation then fails
    /// with a configuration error instead of calling out.
    pub provider: Option<Arc<dyn CompletionProvider>>,
    /// Pluggable identity check. Default: RequestFieldVerifier.
    pub identity: Arc<dyn IdentityVerifier>,
}
