use base64::{
    Engine,
    alphabet::Alphabet,
    engine::{GeneralPurpose, general_purpose::NO_PAD},
};

/// Symbols used by IOS-XE for type 8 and type 9 hashes, in value order 0..=63.
///
/// Same bit packing as RFC 4648 base64, different ordering.
pub const ALPHABET: &str = "./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const CISCO_ALPHABET: Alphabet = match Alphabet::new(ALPHABET) {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("invalid cisco base64 alphabet"),
};

/// Unpadded base64 engine over [`ALPHABET`].
pub const CISCO: GeneralPurpose = GeneralPurpose::new(&CISCO_ALPHABET, NO_PAD);

/// Encode bytes with the cisco alphabet, without padding.
pub fn encode(bytes: &[u8]) -> String {
    CISCO.encode(bytes)
}

/// Number of characters produced by [`encode`] for `n_bytes` input bytes.
pub fn encoded_len(n_bytes: usize) -> usize {
    let full = n_bytes / 3 * 4;
    match n_bytes % 3 {
        0 => full,
        1 => full + 2,
        _ => full + 3,
    }
}

/// Smallest number of raw bytes whose encoding is at least `n_chars` long.
pub fn decoded_len(n_chars: usize) -> usize {
    let full = n_chars / 4 * 3;
    match n_chars % 4 {
        0 => full,
        1 | 2 => full + 1,
        _ => full + 2,
    }
}

/// Returns `true` if `b` is one of the 64 alphabet symbols.
pub fn is_alphabet_byte(b: u8) -> bool {
    matches!(b, b'.' | b'/' | b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z')
}
