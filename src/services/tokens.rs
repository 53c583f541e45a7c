use rand::{Rng, seq::SliceRandom};

pub const ACCESS_CODE_LENGTH: usize = 6;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Source of access codes and scrambled strings. Handlers only see this trait so the
/// randomness behind it can be swapped without touching call sites.
pub trait TokenGenerator: Send + Sync {
    /// A fresh uppercase alphanumeric code of `ACCESS_CODE_LENGTH` characters.
    /// Uniqueness across users is not guaranteed.
    fn access_code(&self) -> String;

    /// The characters of `value` in some permuted order.
    fn shuffle(&self, value: &str) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RandomTokens;

impl TokenGenerator for RandomTokens {
    fn access_code(&self) -> String {
        let mut rng = rand::rng();
        (0..ACCESS_CODE_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }

    fn shuffle(&self, value: &str) -> String {
        let mut chars: Vec<char> = value.chars().collect();
        chars.shuffle(&mut rand::rng());
        chars.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(value: &str) -> Vec<char> {
        let mut chars: Vec<char> = value.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn access_code_is_six_uppercase_alphanumerics() {
        for _ in 0..200 {
            let code = RandomTokens.access_code();
            assert_eq!(code.len(), ACCESS_CODE_LENGTH);
            assert!(
                code.chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
                "unexpected code {code}"
            );
        }
    }

    #[test]
    fn shuffle_of_empty_is_empty() {
        assert_eq!(RandomTokens.shuffle(""), "");
    }

    #[test]
    fn shuffle_of_single_char_is_unchanged() {
        assert_eq!(RandomTokens.shuffle("Q"), "Q");
    }

    #[test]
    fn shuffle_keeps_the_same_characters() {
        let input = "AB12CD";
        for _ in 0..50 {
            let output = RandomTokens.shuffle(input);
            assert_eq!(sorted(&output), sorted(input));
        }
    }

    #[test]
    fn shuffle_handles_multibyte_characters() {
        let output = RandomTokens.shuffle("ñé");
        assert_eq!(sorted(&output), sorted("ñé"));
    }
}
