use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    #[serde(rename = "userId")]
    user_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exp: Option<u64>,
}

pub fn sign_token(user_id: i32, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims { user_id, exp: None };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
}

/// Returns the `userId` claim of a valid HS256 token. `exp` is honoured when present.
pub fn verify_token(token: &str, secret: &str) -> Result<i32, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &validation,
    )?;

    Ok(data.claims.user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_token_round_trips_user_id() {
        let token = sign_token(42, "secret").unwrap();
        assert_eq!(verify_token(&token, "secret").unwrap(), 42);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let token = sign_token(42, "secret").unwrap();
        assert!(verify_token(&token, "another-secret").is_err());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(verify_token("lorem", "secret").is_err());
    }
}
