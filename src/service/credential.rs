//! Password storage: PBKDF2-SHA256 with a per-account random salt.
//! Hash and salt are kept as base64 text columns on the account row.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use subtle::ConstantTimeEq;

pub const PBKDF2_ITERATIONS: u32 = 600_000;
pub const HASH_LENGTH: usize = 32;
pub const SALT_LENGTH: usize = 16;

/// Salt + derived hash, both base64, ready for the accounts table.
#[derive(Debug, Clone)]
pub struct StoredCredential {
    pub salt: String,
    pub hash: String,
}

fn derive(password: &str, salt: &[u8]) -> [u8; HASH_LENGTH] {
    let mut hash = [0u8; HASH_LENGTH];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ITERATIONS, &mut hash);
    hash
}

pub fn hash_password(password: &str) -> StoredCredential {
    use rand::RngCore;
    let mut salt = [0u8; SALT_LENGTH];
    rand::thread_rng().fill_bytes(&mut salt);

    let hash = derive(password, &salt);
    StoredCredential {
        salt: STANDARD.encode(salt),
        hash: STANDARD.encode(hash),
    }
}

/// Constant-time check of a candidate password against a stored credential.
/// Undecodable stored values fail closed.
pub fn verify_password(password: &str, salt_b64: &str, hash_b64: &str) -> bool {
    let Ok(salt) = STANDARD.decode(salt_b64) else {
        return false;
    };
    let Ok(stored_hash) = STANDARD.decode(hash_b64) else {
        return false;
    };

    let candidate = derive(password, &salt);
    candidate.ct_eq(stored_hash.as_slice()).into()
}
