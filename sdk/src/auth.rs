//! Session token acquisition.
//!
//! The Bookshelf API authenticates with short-lived bearer tokens minted by
//! an external identity provider. The SDK only consumes that provider's
//! output, behind [`SessionProvider`]; it never stores or refreshes tokens
//! itself.

use async_trait::async_trait;

/// Session lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The identity provider could not produce a session.
    #[error("session unavailable: {0}")]
    Unavailable(String),
}

/// Source of the current user's id token.
///
/// `Ok(None)` means no user is signed in. `Err` means the provider itself
/// failed (not configured, transient outage). The client treats both the
/// same way: it proceeds without an `Authorization` header, so anonymous
/// reads keep working.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Returns the current id token, or `None` when no user is signed in.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the provider cannot be reached.
    async fn id_token(&self) -> Result<Option<String>, SessionError>;
}

/// A provider holding one fixed token.
///
/// Useful for service accounts and tests; real hosts wrap their identity
/// SDK instead.
#[derive(Debug, Clone)]
pub struct StaticSession {
    token: String,
}

impl StaticSession {
    /// Creates a provider that always yields the given token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl SessionProvider for StaticSession {
    async fn id_token(&self) -> Result<Option<String>, SessionError> {
        Ok(Some(self.token.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_session_yields_token() {
        let provider = StaticSession::new("T");
        let token = provider.id_token().await.expect("lookup");
        assert_eq!(token.as_deref(), Some("T"));
    }

    #[test]
    fn test_session_error_display() {
        let err = SessionError::Unavailable("provider not configured".to_string());
        assert_eq!(
            err.to_string(),
            "session unavailable: provider not configured"
        );
    }
}
