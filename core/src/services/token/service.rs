//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::domain::value_objects::Identity;
use crate::errors::{DomainError, TokenError};

use super::config::TokenConfig;

/// Service for signing and verifying stateless bearer tokens.
///
/// Holds the encoding/decoding keys derived from the process-wide secret;
/// everything here is immutable after construction, so the service is safe
/// to share across request tasks without locking.
pub struct TokenService {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from a validated configuration.
    pub fn new(config: TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;
        // Expiry is exact: a token is invalid the instant now reaches exp.
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Signs a token for the given identity.
    ///
    /// Claims are built with `iat = now` and `exp = now + TTL`; the TTL was
    /// validated positive at configuration time.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The signed token
    /// * `Err(DomainError)` - Serialization failed while signing
    pub fn issue(&self, identity: &Identity) -> Result<String, DomainError> {
        let claims = Claims::new(&identity.login, self.config.ttl, &self.config.issuer);
        self.encode_jwt(&claims)
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }

    /// Verifies a token and returns its claims.
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Signature checked and claims valid
    /// * `Err(TokenError::Expired)` - `now >= exp`
    /// * `Err(TokenError::InvalidSignature)` - Signature does not match the
    ///   process key (tampering or wrong key)
    /// * `Err(TokenError::Malformed)` - The token cannot be parsed at all
    /// * `Err(TokenError::InvalidClaims)` - Parsed and signed, but a
    ///   registered claim is unacceptable (e.g. foreign issuer)
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(classify_jwt_error)
    }

    /// Verifies a token and projects it to the identity it proves.
    ///
    /// Pure read: repeated calls with the same unexpired token return the
    /// same identity.
    pub fn validate(&self, token: &str) -> Result<Identity, TokenError> {
        self.verify(token).map(|claims| claims.identity())
    }
}

/// Maps jsonwebtoken error kinds onto the domain token-error taxonomy.
fn classify_jwt_error(error: jsonwebtoken::errors::Error) -> TokenError {
    use jsonwebtoken::errors::ErrorKind;

    match error.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience | ErrorKind::ImmatureSignature => {
            TokenError::InvalidClaims
        }
        _ => TokenError::Malformed,
    }
}
