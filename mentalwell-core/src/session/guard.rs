//! Session validity checking.
//!
//! The token is opaque to the client: nobody here holds the signing key, so
//! the payload is decoded without signature verification and only the expiry
//! claim is compared against the clock. The check fails closed — a missing,
//! malformed, or expired token all read as "not logged in" — and never
//! panics or propagates an error to rendering code.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::{Result, SessionStore};

/// The claims the client cares about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Expiry, seconds since epoch.
    pub exp: i64,
    /// Subject the token was issued for.
    pub sub: String,
}

/// Decode a token's claims without verifying its signature.
pub fn decode_claims(token: &str) -> Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    // Expiry is compared by the caller against its own clock.
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let data = jsonwebtoken::decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)?;
    Ok(data.claims)
}

/// Whether the store currently holds a live session.
///
/// Returns `false` for an absent token, a token that does not decode, or a
/// token whose expiry is at or before the current time.
pub fn token_is_valid(store: &SessionStore) -> bool {
    let Some(token) = store.access_token() else {
        return false;
    };
    match decode_claims(&token) {
        Ok(claims) => claims.exp > Utc::now().timestamp(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header};

    fn make_token(exp: i64) -> String {
        let claims = Claims {
            exp,
            sub: "sam@example.com".to_string(),
        };
        jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"server-side-secret"),
        )
        .unwrap()
    }

    fn store_with_token(token: &str) -> SessionStore {
        let store = SessionStore::in_memory();
        store.save_login(token, "sam@example.com").unwrap();
        store
    }

    #[test]
    fn decode_claims_reads_exp_and_sub_without_the_key() {
        let token = make_token(4_102_444_800); // 2100-01-01
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.exp, 4_102_444_800);
        assert_eq!(claims.sub, "sam@example.com");
    }

    #[test]
    fn decode_claims_rejects_garbage() {
        assert!(decode_claims("not-a-token").is_err());
        assert!(decode_claims("").is_err());
        assert!(decode_claims("a.b").is_err());
    }

    #[test]
    fn missing_token_is_invalid() {
        let store = SessionStore::in_memory();
        assert!(!token_is_valid(&store));
    }

    #[test]
    fn malformed_token_is_invalid() {
        let store = store_with_token("definitely-not-a-jwt");
        assert!(!token_is_valid(&store));
    }

    #[test]
    fn expired_token_is_invalid() {
        let token = make_token(Utc::now().timestamp() - 100);
        let store = store_with_token(&token);
        assert!(!token_is_valid(&store));
    }

    #[test]
    fn token_expiring_right_now_is_invalid() {
        let token = make_token(Utc::now().timestamp());
        let store = store_with_token(&token);
        assert!(!token_is_valid(&store));
    }

    #[test]
    fn future_token_is_valid() {
        let token = make_token(Utc::now().timestamp() + 3600);
        let store = store_with_token(&token);
        assert!(token_is_valid(&store));
    }

    #[test]
    fn logout_invalidates_a_previously_valid_session() {
        let token = make_token(Utc::now().timestamp() + 3600);
        let store = store_with_token(&token);
        assert!(token_is_valid(&store));
        store.logout().unwrap();
        assert!(!token_is_valid(&store));
    }
}
