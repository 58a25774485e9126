use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use getrandom::fill;

use super::encoding::{decoded_len, encode, encoded_len, is_alphabet_byte};
use super::{MAX_SALT_LEN, MIN_SALT_LEN};
use crate::error::SaltError;

/// A salt string over the cisco base64 alphabet.
///
/// The salt is used verbatim: its string bytes feed the KDF and it is copied as-is into
/// the second field of the formatted hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Salt(String);

impl Salt {
    /// Generates a random salt of exactly `size` characters.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn generate(size: usize) -> Result<Self> {
        generate_salt(size)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Salt {
    type Err = SaltError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_salt(s)
    }
}

/// Fill buffer with cryptographically secure random bytes
fn secure_random(buf: &mut [u8]) -> Result<()> {
    fill(buf).map_err(|_| anyhow!("OS random generator unavailable"))
}

/// Generate a random salt of exactly `size` encoded characters.
///
/// Enough random bytes are drawn to cover `size` characters, then the encoding is cut
/// down to `size`. It is never padded.
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn generate_salt(size: usize) -> Result<Salt> {
    assert!(size > 0, "salt size must be > 0");

    let mut rand_size = decoded_len(size);
    while encoded_len(rand_size) < size {
        rand_size += 1;
    }

    let mut buf = vec![0u8; rand_size];
    secure_random(&mut buf)?;

    let mut salt = encode(&buf);
    salt.truncate(size);

    tracing::debug!(len = size, random_bytes = rand_size, "generated salt");
    Ok(Salt(salt))
}

/// Check a caller supplied salt.
///
/// The length is checked first, then the characters: only `[.0-9A-Za-z]` is accepted.
pub fn validate_salt(s: &str) -> Result<Salt, SaltError> {
    let len = s.chars().count();
    if !(MIN_SALT_LEN..=MAX_SALT_LEN).contains(&len) {
        return Err(SaltError::InvalidSaltLength(len));
    }

    let invalid: String = s.chars().filter(|c| !is_valid_char(*c)).collect();
    if !invalid.is_empty() {
        return Err(SaltError::InvalidSaltChars(invalid));
    }

    tracing::debug!(len, "validated fixed salt");
    Ok(Salt(s.to_owned()))
}

// '/' belongs to the alphabet but is refused in fixed salts
fn is_valid_char(c: char) -> bool {
    c != '/' && c.is_ascii() && is_alphabet_byte(c as u8)
}
