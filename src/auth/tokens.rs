//! JWT issuing and verification
//!
//! `TokenService` owns the signing keys and validation rules, built once at
//! startup from configuration and shared through application state. Handlers
//! never read the secret or algorithm themselves.
//!
//! Verification deliberately returns a three-way `TokenVerdict` instead of a
//! bare `Result`: an expired token and a forged token are both rejected, but
//! callers phrase the 401 differently.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried inside every access token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject the token was issued to (the account email)
    pub sub: String,
    /// Expiry as a unix timestamp
    pub exp: i64,
    /// Issued-at as a unix timestamp
    pub iat: i64,
}

/// Outcome of verifying a bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenVerdict {
    /// Signature and expiry check out; carries the subject claim
    Valid(String),
    /// Signature is genuine but the token is past its expiry
    Expired,
    /// Anything else: bad signature, wrong algorithm, garbage input
    Malformed,
}

/// Issues and verifies signed access tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    header: Header,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Build a token service from a shared secret.
    ///
    /// `algorithm` must be one of the HMAC family (HS256/HS384/HS512);
    /// the verifier pins it, so tokens signed under any other algorithm
    /// come back `Malformed`.
    pub fn new(secret: &[u8], algorithm: Algorithm, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            header: Header::new(algorithm),
            validation: Validation::new(algorithm),
            ttl,
        }
    }

    /// Issue a token for `subject` using the configured lifetime
    pub fn issue(&self, subject: &str) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_with_ttl(subject, self.ttl)
    }

    /// Issue a token for `subject` with an explicit lifetime.
    ///
    /// A negative duration produces an already-expired token, which is
    /// occasionally useful in tests.
    pub fn issue_with_ttl(
        &self,
        subject: &str,
        ttl: Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_owned(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        };
        encode(&self.header, &claims, &self.encoding_key)
    }

    /// Verify a bearer token and classify the outcome
    pub fn verify(&self, token: &str) -> TokenVerdict {
        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => TokenVerdict::Valid(data.claims.sub),
            Err(err) => match err.kind() {
                ErrorKind::ExpiredSignature => TokenVerdict::Expired,
                _ => TokenVerdict::Malformed,
            },
        }
    }
}
