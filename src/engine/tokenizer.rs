//! Input tokenization.
//!
//! The raw input is read one of three ways:
//!
//! - **Tokens**: some splitter occurs after the first character. The input is
//!   cut at every splitter, pieces are trimmed and empty pieces dropped, so
//!   `"31.\n 12\n .2003"` and `"23-02/2022"` both give three tokens.
//! - **Date block**: no splitter, only ASCII digits and longer than four
//!   characters. The input must then be a `YYYYMMDD` block.
//! - **Single**: anything else is one candidate for the assembler.
//!
//! The gate follows splitter order: for each splitter, its *first* occurrence
//! must sit past position zero. A leading `-` does not make `"-5"` a token
//! list.

use super::shape::TokenShape;

/// Digits of a `YYYYMMDD` block, unparsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBlock<'a> {
    pub year: &'a str,
    pub month: &'a str,
    pub day: &'a str,
}

/// How an input string is to be read.
#[derive(Debug, Clone)]
pub enum Tokenized<'a> {
    Tokens(Tokens<'a>),
    DateBlock(DateBlock<'a>),
    /// All digits and longer than a year, but not `YYYYMMDD`.
    MalformedBlock(&'a str),
    Single(&'a str),
    /// Nothing but whitespace.
    Empty,
}

/// Lazy token sequence. A clone continues from the same position; call
/// [`tokenize`] again to start over.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: Option<&'a str>,
    splitters: &'a [char],
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let rest = self.rest?;
            let piece = match rest.char_indices().find(|(_, c)| self.splitters.contains(c)) {
                Some((idx, splitter)) => {
                    self.rest = Some(&rest[idx + splitter.len_utf8()..]);
                    &rest[..idx]
                }
                None => {
                    self.rest = None;
                    rest
                }
            };

            let piece = piece.trim();
            if !piece.is_empty() {
                return Some(piece);
            }
        }
    }
}

/// Decide how `text` is read and, for token lists, produce the tokens.
pub fn tokenize<'a>(text: &'a str, splitters: &'a [char]) -> Tokenized<'a> {
    let text = text.trim();
    if text.is_empty() {
        return Tokenized::Empty;
    }

    if splitters.iter().any(|s| text.find(*s).is_some_and(|pos| pos > 0)) {
        return Tokenized::Tokens(Tokens { rest: Some(text), splitters });
    }

    if TokenShape::scan(text).contains(TokenShape::ALL_DIGITS) && text.len() > 4 {
        let re = regex!(r"^([0-2][0-9]{3})([01][0-9])([0-3][0-9])$");
        return match re.captures(text) {
            Some(caps) => match (caps.get(1), caps.get(2), caps.get(3)) {
                (Some(year), Some(month), Some(day)) => {
                    Tokenized::DateBlock(DateBlock { year: year.as_str(), month: month.as_str(), day: day.as_str() })
                }
                _ => Tokenized::MalformedBlock(text),
            },
            None => Tokenized::MalformedBlock(text),
        };
    }

    Tokenized::Single(text)
}
