//! Password gate for board mutation.
//!
//! Boards created without a password store no hash at all and stay public:
//! every mutation is allowed through. Otherwise the password is stored as
//! a salted HMAC-SHA-256 and verified in constant time.

use hmac::{Hmac, Mac};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const SALT_LEN: usize = 16;

/// Salted MAC of a board password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordHash {
    salt: Vec<u8>,
    mac: Vec<u8>,
}

impl PasswordHash {
    /// Hash a password chosen at board creation. Empty or whitespace-only
    /// passwords yield `None`: the board is public.
    #[must_use]
    pub fn create(password: Option<&str>) -> Option<Self> {
        let password = password.map(str::trim).filter(|p| !p.is_empty())?;
        let mut salt = vec![0_u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);
        let mac = digest(&salt, password);
        Some(PasswordHash { salt, mac })
    }

    /// Constant-time comparison against a supplied password.
    #[must_use]
    pub fn verify(&self, password: &str) -> bool {
        let mut mac = HmacSha256::new_from_slice(&self.salt)
            .expect("HMAC accepts keys of any length");
        mac.update(password.trim().as_bytes());
        mac.verify_slice(&self.mac).is_ok()
    }
}

/// Check a mutation attempt against the stored gate. A board without a
/// stored hash accepts any (or no) password.
#[must_use]
pub fn verify_optional(stored: Option<&PasswordHash>, supplied: Option<&str>) -> bool {
    match stored {
        None => true,
        Some(hash) => supplied.is_some_and(|password| hash.verify(password)),
    }
}

fn digest(salt: &[u8], password: &str) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(salt).expect("HMAC accepts keys of any length");
    mac.update(password.as_bytes());
    mac.finalize().into_bytes().to_vec()
}
