//! Verified identity value object.

use serde::{Deserialize, Serialize};

/// The identity a validated token proves.
///
/// A valid token always maps to exactly one login that existed at issuance
/// time; there is no guarantee the account still exists at validation time
/// (no revocation check is performed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique login name, the primary key of the credential domain
    pub login: String,

    /// Optional display name; `None` when reconstructed from a token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Identity {
    /// Creates an identity for the given login
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            display_name: None,
        }
    }
}
