//! Cryptographic primitives for IOS-XE password hashes.
//!
//! Provides the cisco base64 codec, salt generation and validation, and the
//! type 8 / type 9 key derivations.

pub mod encoding;
pub mod kdf;
pub mod salt;

pub use kdf::{type8, type9};
pub use salt::{Salt, generate_salt, validate_salt};

/// Length of the derived key (32 bytes / 43 encoded characters).
pub const KEY_LEN: usize = 32;
/// Length of generated salts when none is requested.
pub const DEFAULT_SALT_LEN: usize = 14;
/// Shortest accepted fixed salt.
pub const MIN_SALT_LEN: usize = 4;
/// Longest accepted fixed salt.
pub const MAX_SALT_LEN: usize = 32;
