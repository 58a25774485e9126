use anyhow::{Result, anyhow};
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroizing;

use super::KEY_LEN;
use super::encoding::encode;
use super::salt::Salt;

/// PBKDF2-HMAC-SHA256 iteration count for type 8.
pub const TYPE8_ITERATIONS: u32 = 20_000;
/// scrypt cost for type 9, as log2(N): N = 16384.
pub const TYPE9_LOG_N: u8 = 14;
/// scrypt block size for type 9.
pub const TYPE9_R: u32 = 1;
/// scrypt parallelization for type 9.
pub const TYPE9_P: u32 = 1;

/// Compute a type 8 (PBKDF2-HMAC-SHA256) hash string: `$8$<salt>$<key>`.
pub fn type8(password: &[u8], salt: &Salt) -> String {
    tracing::debug!(iterations = TYPE8_ITERATIONS, "deriving type 8 key");

    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_hmac::<Sha256>(password, salt.as_bytes(), TYPE8_ITERATIONS, &mut *key);

    format_hash(8, salt, &*key)
}

/// Compute a type 9 (scrypt) hash string: `$9$<salt>$<key>`.
///
/// # Errors
///
/// Fails if the scrypt primitive rejects its parameters.
pub fn type9(password: &[u8], salt: &Salt) -> Result<String> {
    tracing::debug!(
        log_n = TYPE9_LOG_N,
        r = TYPE9_R,
        p = TYPE9_P,
        "deriving type 9 key"
    );

    let params = scrypt::Params::new(TYPE9_LOG_N, TYPE9_R, TYPE9_P, KEY_LEN)
        .map_err(|e| anyhow!("invalid scrypt parameters: {e}"))?;

    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    scrypt::scrypt(password, salt.as_bytes(), &params, &mut *key)
        .map_err(|e| anyhow!("scrypt key derivation failed: {e}"))?;

    Ok(format_hash(9, salt, &*key))
}

fn format_hash(hash_type: u8, salt: &Salt, key: &[u8]) -> String {
    format!("${hash_type}${salt}${}", encode(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::encoding::is_alphabet_byte;

    fn salt(s: &str) -> Salt {
        s.parse().unwrap()
    }

    fn assert_hash_shape(hash: &str, hash_type: &str, salt: &str) {
        let fields: Vec<&str> = hash.split('$').collect();
        assert_eq!(fields.len(), 4, "unexpected hash layout: {hash}");
        assert_eq!(fields[0], "");
        assert_eq!(fields[1], hash_type);
        assert_eq!(fields[2], salt);
        assert_eq!(fields[3].len(), 43);
        assert!(fields[3].bytes().all(is_alphabet_byte));
    }

    #[test]
    fn type8_known_answer() {
        // username demo8 secret 8 $8$dsYGNam3K1SIJO$7nv/35M/qr6t.dVc7UY9zrJDWRVqncHub1PE9UlMQFs
        assert_eq!(
            type8(b"cisco", &salt("dsYGNam3K1SIJO")),
            "$8$dsYGNam3K1SIJO$7nv/35M/qr6t.dVc7UY9zrJDWRVqncHub1PE9UlMQFs"
        );
    }

    #[test]
    fn type9_known_answer() {
        // username demo9 secret 9 $9$nhEmQVczB7dqsO$X.HsgL6x1il0RxkOSSvyQYwucySCt7qFm4v7pqCxkKM
        assert_eq!(
            type9(b"cisco", &salt("nhEmQVczB7dqsO")).unwrap(),
            "$9$nhEmQVczB7dqsO$X.HsgL6x1il0RxkOSSvyQYwucySCt7qFm4v7pqCxkKM"
        );
    }

    #[test]
    fn type8_is_deterministic() {
        let s = salt("abcdEFGH1234");
        let h1 = type8(b"secret", &s);
        let h2 = type8(b"secret", &s);

        assert_eq!(h1, h2);
        assert_hash_shape(&h1, "8", "abcdEFGH1234");
    }

    #[test]
    fn type9_is_deterministic() {
        let s = salt("abcdEFGH1234");
        let h1 = type9(b"secret", &s).unwrap();
        let h2 = type9(b"secret", &s).unwrap();

        assert_eq!(h1, h2);
        assert_hash_shape(&h1, "9", "abcdEFGH1234");
    }

    #[test]
    fn salt_and_password_affect_output() {
        let a = salt("saltA...");
        let b = salt("saltB...");

        assert_ne!(type8(b"pw", &a), type8(b"pw", &b));
        assert_ne!(type8(b"pw", &a), type8(b"pW", &a));
        assert_ne!(type9(b"pw", &a).unwrap(), type9(b"pw", &b).unwrap());
        assert_ne!(type9(b"pw", &a).unwrap(), type9(b"pW", &a).unwrap());
    }

    #[test]
    fn empty_password_hashes() {
        let s = salt("emptypass");
        assert_hash_shape(&type8(b"", &s), "8", "emptypass");
        assert_hash_shape(&type9(b"", &s).unwrap(), "9", "emptypass");
    }

    #[test]
    fn generated_salt_is_copied_verbatim() {
        let s = Salt::generate(14).unwrap();
        let hash = type8(b"cisco", &s);
        assert!(hash.starts_with(&format!("$8${s}$")));
    }
}
