use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

pub mod password;

/// Signed claims carried by a bearer token. `identity` is the authenticated
/// user's email address.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub identity: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(identity: String, expiry_hours: u64) -> Self {
        let now = Utc::now();
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();

        Self {
            identity,
            exp,
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug)]
pub enum TokenError {
    MissingSecret,
    Invalid(String),
    Generation(String),
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::MissingSecret => write!(f, "signing secret not configured"),
            TokenError::Invalid(msg) => write!(f, "invalid token: {}", msg),
            TokenError::Generation(msg) => write!(f, "token generation error: {}", msg),
        }
    }
}

impl std::error::Error for TokenError {}

/// Issue a signed HS256 token for the given identity.
pub fn issue_token(identity: &str, secret: &str, expiry_hours: u64) -> Result<String, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    let claims = Claims::new(identity.to_string(), expiry_hours);
    let encoding_key = EncodingKey::from_secret(secret.as_bytes());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| TokenError::Generation(e.to_string()))
}

/// Verify a token's signature and expiry, returning its claims.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| TokenError::Invalid(e.to_string()))?;

    Ok(token_data.claims)
}
