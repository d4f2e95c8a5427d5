use rand::Rng;
use sha2::{Digest, Sha256};

/// Uniform 6-digit linking code, "100000".."999999".
pub fn new_invite_code() -> String {
    rand::thread_rng().gen_range(100_000..1_000_000).to_string()
}

/// Deterministic digest so confirmation can look invites up by hash equality.
/// The plaintext code is short-lived and delivered out of band only.
pub fn hash_invite_code(code: &str) -> String {
    hex::encode(Sha256::digest(code.as_bytes()))
}

pub fn is_six_digit_code(code: &str) -> bool {
    code.len() == 6 && code.bytes().all(|b| b.is_ascii_digit())
}
