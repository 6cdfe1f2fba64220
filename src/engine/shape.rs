//! Token shape scan.
//!
//! Before a token reaches the regex classifiers it is scanned once for coarse
//! character classes. The flags only gate which checks are worth running;
//! the classifiers still do the real matching.
//!
//! Digits are ASCII only. Letters are any Unicode alphabetic character, so
//! Cyrillic and accented month names count as `ALPHA`.

bitflags::bitflags! {
    /// Character classes present in a token.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TokenShape: u8 {
        /// At least one ASCII digit.
        const HAS_DIGITS    = 1 << 0;
        /// Non-empty and nothing but ASCII digits.
        const ALL_DIGITS    = 1 << 1;
        /// First character is an ASCII digit.
        const LEADING_DIGIT = 1 << 2;
        /// At least one alphabetic character.
        const ALPHA         = 1 << 3;
        /// Punctuation, whitespace or anything else.
        const OTHER         = 1 << 4;
    }
}

impl TokenShape {
    pub fn scan(token: &str) -> Self {
        let mut shape = TokenShape::empty();

        if token.starts_with(|c: char| c.is_ascii_digit()) {
            shape |= TokenShape::LEADING_DIGIT;
        }

        for c in token.chars() {
            if c.is_ascii_digit() {
                shape |= TokenShape::HAS_DIGITS;
            } else if c.is_alphabetic() {
                shape |= TokenShape::ALPHA;
            } else {
                shape |= TokenShape::OTHER;
            }
        }

        if shape == TokenShape::HAS_DIGITS | TokenShape::LEADING_DIGIT {
            shape |= TokenShape::ALL_DIGITS;
        }

        shape
    }

    /// Only ASCII digits, and at most `width` of them.
    pub fn is_number_of_width(self, token: &str, width: usize) -> bool {
        self.contains(TokenShape::ALL_DIGITS) && token.len() <= width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_examples() {
        let cases: Vec<(&str, TokenShape)> = vec![
            ("2021", TokenShape::HAS_DIGITS | TokenShape::ALL_DIGITS | TokenShape::LEADING_DIGIT),
            ("6th", TokenShape::HAS_DIGITS | TokenShape::LEADING_DIGIT | TokenShape::ALPHA),
            ("31,", TokenShape::HAS_DIGITS | TokenShape::LEADING_DIGIT | TokenShape::OTHER),
            ("липень", TokenShape::ALPHA),
            ("Août", TokenShape::ALPHA),
            (".2003", TokenShape::HAS_DIGITS | TokenShape::OTHER),
            ("", TokenShape::empty()),
        ];

        for (token, expected) in cases {
            assert_eq!(TokenShape::scan(token), expected, "shape of {token:?}");
        }
    }

    #[test]
    fn number_width() {
        assert!(TokenShape::scan("12").is_number_of_width("12", 2));
        assert!(!TokenShape::scan("123").is_number_of_width("123", 2));
        assert!(!TokenShape::scan("1a").is_number_of_width("1a", 2));
    }
}
