//! Short code generation and validation utilities.
//!
//! Codes are 6 to 8 characters drawn from `[A-Za-z0-9]`. Generated codes pick the
//! length uniformly and every character independently, so the smallest slice of
//! the space alone holds 62^6 candidates.

use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use std::sync::LazyLock;

/// Shortest allowed code.
pub const MIN_CODE_LENGTH: usize = 6;

/// Longest allowed code.
pub const MAX_CODE_LENGTH: usize = 8;

static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,8}$").expect("code pattern is valid"));

/// Generates a random candidate code.
///
/// The result is well-formed but not guaranteed unique; see
/// [`crate::application::services::CodeAllocator`] for allocation.
///
/// # Examples
///
/// ```
/// use snaplink::utils::code_generator::{generate_code, is_well_formed};
///
/// let code = generate_code();
/// assert!(is_well_formed(&code));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();
    let len = rng.random_range(MIN_CODE_LENGTH..=MAX_CODE_LENGTH);

    (0..len)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

/// Returns true iff `code` is 6-8 ASCII letters or digits.
///
/// Case-sensitive; separators, whitespace and non-ASCII letters are rejected.
pub fn is_well_formed(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_length_in_range() {
        for _ in 0..1000 {
            let code = generate_code();
            assert!(
                (MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&code.len()),
                "unexpected length for {code}"
            );
        }
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        for _ in 0..1000 {
            let code = generate_code();
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()), "{code}");
        }
    }

    #[test]
    fn test_generate_code_uses_every_length() {
        let lengths: HashSet<usize> = (0..500).map(|_| generate_code().len()).collect();
        assert_eq!(lengths, HashSet::from([6, 7, 8]));
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code()).collect();
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_generated_codes_are_well_formed() {
        for _ in 0..1000 {
            assert!(is_well_formed(&generate_code()));
        }
    }

    #[test]
    fn test_well_formed_accepts_boundaries() {
        assert!(is_well_formed("abcdef"));
        assert!(is_well_formed("ABCdef1"));
        assert!(is_well_formed("12345678"));
        assert!(is_well_formed("aB3dE6"));
    }

    #[test]
    fn test_well_formed_rejects_wrong_length() {
        assert!(!is_well_formed(""));
        assert!(!is_well_formed("abc"));
        assert!(!is_well_formed("abcde"));
        assert!(!is_well_formed("abcdefghi"));
    }

    #[test]
    fn test_well_formed_rejects_separators() {
        assert!(!is_well_formed("abc-123"));
        assert!(!is_well_formed("abc_123"));
        assert!(!is_well_formed("abc 123"));
        assert!(!is_well_formed("abc123\n"));
        assert!(!is_well_formed("abc.12"));
    }

    #[test]
    fn test_well_formed_rejects_non_ascii() {
        assert!(!is_well_formed("abcdéf"));
        assert!(!is_well_formed("абвгде"));
    }
}
