//! Login credential value object.

use serde::{Deserialize, Serialize};

/// A login/secret pair presented for registration or authentication.
///
/// The secret is only ever compared inside the credential store boundary;
/// it is deliberately excluded from `Debug` output.
#[derive(Clone, Serialize, Deserialize)]
pub struct Credential {
    /// Unique login name
    pub login: String,

    /// Plaintext secret as presented by the client
    pub secret: String,
}

impl Credential {
    /// Creates a new credential
    pub fn new(login: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            secret: secret.into(),
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("login", &self.login)
            .field("secret", &"<redacted>")
            .finish()
    }
}
