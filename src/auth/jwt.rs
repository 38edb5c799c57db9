//! JWT token generation and validation

use afisha_shared::user::Role;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Role at token issue time; the middleware re-reads the authoritative
    /// role from the datastore on every request.
    pub role: Role,
    /// Expiration timestamp
    pub exp: u64,
}

/// Generate a JWT token for a user
pub fn generate_token(
    user_id: &str,
    role: Role,
    secret: &str,
    lifetime_minutes: i64,
) -> anyhow::Result<String> {
    let now = OffsetDateTime::now_utc().unix_timestamp();

    let claims = Claims {
        sub: user_id.to_owned(),
        role,
        exp: (now + lifetime_minutes * 60) as u64,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

/// Validate and decode a JWT token
pub fn validate_token(token: &str, secret: &str) -> anyhow::Result<Claims> {
    let validation = Validation::default();

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}
