//! Authentication provider trait and session-backed implementation.

use uuid::Uuid;

use super::types::Identity;

/// Source of the current player identity.
///
/// The real authentication flow lives outside this crate; anything that can
/// hand back a stable identity and revoke it can sit behind this trait.
pub trait AuthProvider {
    /// The currently signed-in identity, if any.
    fn identity(&self) -> Option<&Identity>;

    /// End the current session.
    fn sign_out(&mut self);
}

/// Session-backed provider holding the identity for this process.
///
/// Sign-in mints a fresh user id unless the caller supplies one recovered
/// from persisted configuration, so identities stay stable across restarts.
#[derive(Debug, Default)]
pub struct SessionAuthProvider {
    identity: Option<Identity>,
}

impl SessionAuthProvider {
    /// Create a provider with no active session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a provider from a previously persisted identity.
    pub fn with_identity(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
        }
    }

    /// Start a session for the given account.
    ///
    /// `user_id` carries a previously persisted id; a fresh one is minted
    /// when absent.
    pub fn sign_in(&mut self, account: &str, user_id: Option<Uuid>) -> &Identity {
        let identity = Identity {
            user_id: user_id.unwrap_or_else(Uuid::new_v4),
            account: Some(account.to_string()),
        };
        tracing::info!("Signed in as {}", account);
        self.identity.insert(identity)
    }
}

impl AuthProvider for SessionAuthProvider {
    fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    fn sign_out(&mut self) {
        if let Some(identity) = self.identity.take() {
            tracing::info!(
                "Signed out {}",
                identity.account.as_deref().unwrap_or("player")
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unauthenticated() {
        let provider = SessionAuthProvider::new();
        assert!(provider.identity().is_none());
    }

    #[test]
    fn test_sign_in_mints_user_id() {
        let mut provider = SessionAuthProvider::new();
        let identity = provider.sign_in("ada@example.com", None).clone();
        assert_eq!(identity.account.as_deref(), Some("ada@example.com"));
        assert_eq!(provider.identity(), Some(&identity));
    }

    #[test]
    fn test_sign_in_reuses_persisted_user_id() {
        let user_id = Uuid::new_v4();
        let mut provider = SessionAuthProvider::new();
        let identity = provider.sign_in("ada@example.com", Some(user_id));
        assert_eq!(identity.user_id, user_id);
    }

    #[test]
    fn test_sign_out_clears_session() {
        let mut provider = SessionAuthProvider::new();
        provider.sign_in("ada@example.com", None);
        provider.sign_out();
        assert!(provider.identity().is_none());
    }
}
