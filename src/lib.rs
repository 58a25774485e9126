pub mod crypto;
mod error;
mod input;
mod record;

pub use crate::crypto::{DEFAULT_SALT_LEN, Salt};
pub use crate::error::SaltError;
pub use crate::input::{read_password, read_password_from};
pub use crate::record::HashRecord;
use anyhow::{Context, Result};

/// Salt choices for one invocation.
///
/// A missing fixed salt means a fresh random one of `salt_len` characters.
#[derive(Debug, Clone)]
pub struct HashOptions {
    salt_type8: Option<Salt>,
    salt_type9: Option<Salt>,
    salt_len: usize,
}

impl Default for HashOptions {
    fn default() -> Self {
        Self {
            salt_type8: None,
            salt_type9: None,
            salt_len: DEFAULT_SALT_LEN,
        }
    }
}

impl HashOptions {
    pub fn new(salt_type8: Option<Salt>, salt_type9: Option<Salt>) -> Self {
        Self {
            salt_type8,
            salt_type9,
            ..Self::default()
        }
    }

    /// Length of generated salts.
    ///
    /// # Panics
    ///
    /// A zero length is accepted here but makes [`hash_password`] panic as soon as it
    /// has to generate a salt.
    pub fn with_salt_len(mut self, salt_len: usize) -> Self {
        self.salt_len = salt_len;
        self
    }

    fn resolve(&self, fixed: Option<&Salt>) -> Result<Salt> {
        match fixed {
            Some(salt) => Ok(salt.clone()),
            None => Salt::generate(self.salt_len),
        }
    }
}

/// Hash `password` as type 8 and type 9 and package the result.
///
/// # Panics
///
/// Panics if a salt has to be generated and the configured salt length is zero.
pub fn hash_password(password: &[u8], options: &HashOptions) -> Result<HashRecord> {
    let salt8 = options.resolve(options.salt_type8.as_ref())?;
    let type8 = crypto::type8(password, &salt8);
    tracing::info!(salt_len = salt8.len(), "computed type 8 hash");

    let salt9 = options.resolve(options.salt_type9.as_ref())?;
    let type9 = crypto::type9(password, &salt9).context("failed to compute type 9 hash")?;
    tracing::info!(salt_len = salt9.len(), "computed type 9 hash");

    Ok(HashRecord::new(type8, type9, password.len()))
}
