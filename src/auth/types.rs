//! Identity type and display name derivation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display name used when no account is available or the account yields an
/// empty local part.
pub const DEFAULT_DISPLAY_NAME: &str = "Lumberjack";

/// Stable caller reference supplied by the authentication provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Stable unique identifier for the player
    pub user_id: Uuid,
    /// Email-like account identifier, if the provider supplied one
    pub account: Option<String>,
}

impl Identity {
    /// Create an identity with a fresh user id for the given account.
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            user_id: Uuid::new_v4(),
            account: Some(account.into()),
        }
    }
}

/// Derive a display name from an identity.
///
/// Takes the local part of the account before any `@`, falling back to
/// [`DEFAULT_DISPLAY_NAME`] when the account is absent or the local part is
/// empty.
pub fn display_name(identity: &Identity) -> String {
    identity
        .account
        .as_deref()
        .map(|account| account.split('@').next().unwrap_or(""))
        .filter(|local| !local.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string())
}
