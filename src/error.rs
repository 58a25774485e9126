use std::fmt;

use crate::crypto::{MAX_SALT_LEN, MIN_SALT_LEN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaltError {
    InvalidSaltLength(usize),
    InvalidSaltChars(String),
}

impl fmt::Display for SaltError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaltError::InvalidSaltLength(len) => write!(
                f,
                "salt must be between {MIN_SALT_LEN} and {MAX_SALT_LEN} characters long, got {len}"
            ),
            SaltError::InvalidSaltChars(chars) => write!(
                f,
                "salt contains characters outside of [.0-9A-Za-z]: '{chars}'"
            ),
        }
    }
}

impl std::error::Error for SaltError {}
