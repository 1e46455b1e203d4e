//! Player identity and session management.
//!
//! Authentication itself is delegated to an external provider; this module
//! only models the stable identity it hands us and the session that carries
//! it, behind the [`AuthProvider`] trait.

pub mod provider;
pub mod types;

pub use provider::{AuthProvider, SessionAuthProvider};
pub use types::{display_name, Identity, DEFAULT_DISPLAY_NAME};
