pub const ALPHABET: &[u8] = "abcdefghijklmnopqrstuvwxyz".as_bytes();

/// The one normalization policy of the wordlist layer, applied to words
/// at load time and to query arguments alike. The tree itself compares
/// raw characters.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
