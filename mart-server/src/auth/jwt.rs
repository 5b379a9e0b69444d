//! JWT session token service
//!
//! Issues and verifies the signed bearer tokens that bind a login to a
//! session. Tokens carry only the subject and expiry; expiry is the sole
//! invalidation mechanism (no revocation list).

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};
use shared::client::TokenGrant;
use thiserror::Error;

/// Scheme prefix expected in the `Authorization` header
pub const TOKEN_TYPE: &str = "Bearer";

/// JWT configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Signing secret (should be at least 32 bytes)
    pub secret: String,
    /// Token lifetime in minutes
    pub expiration_minutes: i64,
}

impl JwtConfig {
    /// Load the configuration from the environment
    ///
    /// `JWT_SECRET` must be set (and at least 32 characters) in production;
    /// development builds fall back to a freshly generated secret so that
    /// every restart invalidates outstanding sessions.
    pub fn from_env() -> Result<Self, JwtError> {
        let secret = load_jwt_secret()?;
        Ok(Self {
            secret,
            expiration_minutes: std::env::var("JWT_EXPIRATION_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
        })
    }
}

/// JWT claims stored in the token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (login)
    pub sub: String,
    /// Expiry timestamp
    pub exp: i64,
    /// Issued-at timestamp
    pub iat: i64,
}

/// JWT errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Token expired")]
    Expired,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed: {0}")]
    Generation(String),

    #[error("Key generation failed")]
    KeyGeneration,

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Generate a printable signing secret (development fallback)
pub fn generate_secret() -> Result<String, JwtError> {
    const ALLOWED: &[u8] =
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()-_=+";

    let rng = SystemRandom::new();
    let mut raw = [0u8; 64];
    rng.fill(&mut raw).map_err(|_| JwtError::KeyGeneration)?;

    Ok(raw
        .iter()
        .map(|b| ALLOWED[*b as usize % ALLOWED.len()] as char)
        .collect())
}

/// Load the signing secret from the environment
fn load_jwt_secret() -> Result<String, JwtError> {
    match std::env::var("JWT_SECRET") {
        Ok(secret) => {
            if secret.len() < 32 {
                return Err(JwtError::Config(
                    "JWT_SECRET must be at least 32 characters long".to_string(),
                ));
            }
            Ok(secret)
        }
        Err(_) => {
            #[cfg(debug_assertions)]
            {
                tracing::warn!("JWT_SECRET not set, generating temporary development secret");
                generate_secret()
            }
            #[cfg(not(debug_assertions))]
            {
                Err(JwtError::Config(
                    "JWT_SECRET environment variable must be set in production".to_string(),
                ))
            }
        }
    }
}

/// JWT token service
///
/// The signing secret is injected at construction; nothing in this module
/// reads process-global state after startup.
#[derive(Debug, Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    /// Create a token service with the given configuration
    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issue a token for the given subject
    pub fn issue(&self, subject: &str) -> Result<TokenGrant, JwtError> {
        let now = Utc::now();
        let expires_at = now + Duration::minutes(self.config.expiration_minutes);

        let claims = Claims {
            sub: subject.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::Generation(e.to_string()))?;

        Ok(TokenGrant {
            token,
            token_type: TOKEN_TYPE.to_string(),
            expires_at,
        })
    }

    /// Verify a token and return its subject
    pub fn verify(&self, token: &str) -> Result<String, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["sub", "exp"]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => JwtError::Expired,
                    ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                    _ => JwtError::Malformed(e.to_string()),
                }
            })?;

        Ok(token_data.claims.sub)
    }

    /// Extract the token from an `Authorization` header value
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}
