use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, prelude::BASE64_STANDARD, Engine as _};
use rand_core::{OsRng, RngCore};
use uuid::Uuid;

use crate::types::token::TokenType;

pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

pub fn new_token(token_type: TokenType) -> String {
    let mut buf = [0u8; 32];
    let mut rng = OsRng;
    rng.fill_bytes(&mut buf);
    format!("{}_tok_{}", token_type, URL_SAFE_NO_PAD.encode(buf))
}

/// Bearer token carried by clients: base64("{profile_id}.{secret}"). Only the
/// argon2 hash of the secret is stored.
pub fn construct_token(profile_id: &str, secret: &str) -> String {
    BASE64_STANDARD.encode(format!("{profile_id}.{secret}"))
}

pub fn extract_token_parts(token: &str) -> Option<(Uuid, String)> {
    let decoded = BASE64_STANDARD.decode(token).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (id, secret) = decoded.split_once('.')?;
    let uuid = Uuid::parse_str(id).ok()?;
    if secret.is_empty() {
        return None;
    }
    Some((uuid, secret.to_string()))
}

pub fn encrypt(token: &str) -> Result<String, argon2::password_hash::Error> {
    let mut rng = OsRng;
    let salt = SaltString::generate(&mut rng);
    let hash = Argon2::default().hash_password(token.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify(token: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(token.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_roundtrip() {
        let id = new_id();
        let secret = new_token(TokenType::User);
        let bearer = construct_token(&id.to_string(), &secret);
        let (got_id, got_secret) = extract_token_parts(&bearer).unwrap();
        assert_eq!(got_id, id);
        assert_eq!(got_secret, secret);
    }

    #[test]
    fn extract_rejects_garbage() {
        assert!(extract_token_parts("not-base64!!").is_none());
        assert!(extract_token_parts(&BASE64_STANDARD.encode("no-dot-here")).is_none());
        assert!(extract_token_parts(&BASE64_STANDARD.encode("bad-uuid.secret")).is_none());
    }

    #[test]
    fn encrypt_then_verify() {
        let secret = new_token(TokenType::User);
        let hash = encrypt(&secret).unwrap();
        assert!(verify(&secret, &hash).unwrap());
        assert!(!verify("wrong", &hash).unwrap());
    }
}
