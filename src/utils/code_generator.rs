//! Random token generation.
//!
//! Short codes are drawn uniformly from the URL-safe alphabet
//! `A-Z a-z 0-9 _ -`. Session tokens and OTP codes come from the same
//! place so all randomness has one home.

use base64::Engine as _;
use rand::Rng;

/// URL-safe alphabet used for short codes (64 symbols).
pub const CODE_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Length of generated short codes.
pub const CODE_LENGTH: usize = 6;

/// Random bytes behind a session token (43 characters once encoded).
const SESSION_TOKEN_BYTES: usize = 32;

/// Generates a short code of [`CODE_LENGTH`] characters.
///
/// Stateless and infallible; collisions are the caller's concern.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// ```
pub fn generate_code() -> String {
    generate_code_with_length(CODE_LENGTH)
}

/// Generates a short code of `len` characters from [`CODE_ALPHABET`].
pub fn generate_code_with_length(len: usize) -> String {
    let mut rng = rand::rng();

    (0..len)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Returns true if every character of `code` belongs to [`CODE_ALPHABET`].
pub fn is_code_alphabet(code: &str) -> bool {
    !code.is_empty() && code.bytes().all(|b| CODE_ALPHABET.contains(&b))
}

/// Generates an opaque session token.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_session_token() -> String {
    let mut buffer = [0u8; SESSION_TOKEN_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

/// Generates a zero-padded 6-digit one-time password.
pub fn generate_otp() -> String {
    format!("{:06}", rand::rng().random_range(0..1_000_000u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        for _ in 0..100 {
            assert_eq!(generate_code().len(), CODE_LENGTH);
        }
    }

    #[test]
    fn test_generate_code_url_safe_characters() {
        for _ in 0..500 {
            let code = generate_code();
            assert!(
                code.chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
                "unexpected character in {code}"
            );
            assert!(is_code_alphabet(&code));
        }
    }

    #[test]
    fn test_generate_code_produces_distinct_codes() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code()).collect();

        // 64^6 combinations; a collision in 1000 draws is vanishingly unlikely.
        assert!(codes.len() >= 999);
    }

    #[test]
    fn test_generate_code_with_length() {
        assert_eq!(generate_code_with_length(8).len(), 8);
        assert_eq!(generate_code_with_length(0), "");
    }

    #[test]
    fn test_alphabet_is_url_safe() {
        assert_eq!(CODE_ALPHABET.len(), 64);
        assert!(!is_code_alphabet("abc/12"));
        assert!(!is_code_alphabet("abc 12"));
        assert!(!is_code_alphabet(""));
        assert!(is_code_alphabet("aB3xY9"));
    }

    #[test]
    fn test_session_token_shape() {
        let token = generate_session_token();

        assert_eq!(token.len(), 43);
        assert!(!token.contains('='));
        assert_ne!(token, generate_session_token());
    }

    #[test]
    fn test_otp_is_six_digits() {
        for _ in 0..100 {
            let otp = generate_otp();
            assert_eq!(otp.len(), 6);
            assert!(otp.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
