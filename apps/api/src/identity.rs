//! Caller identity — the narrow authorization seam in front of the headline API.
//!
//! Session issuance lives with the external auth provider. The API only needs
//! to know whether a request carries a usable caller identity.

use async_trait::async_trait;

use crate::errors::AppError;

/// Who is calling. Used for authorization and log context only; contact
/// details are checked for presence but never carried past verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    pub user_id: String,
}

/// Verifies the identity fields bundled with a request.
///
/// Carried in `AppState` as `Arc<dyn IdentityVerifier>`.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(
        &self,
        user_id: Option<&str>,
        user_email: Option<&str>,
    ) -> Result<CallerIdentity, AppError>;
}

/// Accepts any request that carries both a user id and an email.
pub struct RequestFieldVerifier;

#[async_trait]
impl IdentityVerifier for RequestFieldVerifier {
    async fn verify(
        &self,
        user_id: Option<&str>,
        user_email: Option<&str>,
    ) -> Result<CallerIdentity, AppError> {
        match (non_blank(user_id), non_blank(user_email)) {
            (Some(user_id), Some(_email)) => Ok(CallerIdentity {
                user_id: user_id.to_string(),
            }),
            _ => Err(AppError::Unauthorized),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
