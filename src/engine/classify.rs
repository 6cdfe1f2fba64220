//! Field classifiers.
//!
//! Each field has a predicate and an extractor; the predicate is just "the
//! extractor found something". None of them fail loudly: a token that does
//! not fit is `false` / `None`.
//!
//! | field        | accepts                                              |
//! |--------------|------------------------------------------------------|
//! | day          | `1`..`31`, one or two digits, optionally followed by a suffix (`6th`, `31,`) |
//! | digit month  | `1`..`12`, one or two digits                         |
//! | alpha month  | any registered month name or an inflected form of one |
//! | year         | two digits, or four digits starting with `0`, `1` or `2` |
//!
//! Two-digit years are read as `20yy`.

use super::matcher::month_index;
use super::shape::TokenShape;
use crate::Config;

/// Day of month held by `token`, if any.
pub fn day_value(token: &str) -> Option<u32> {
    let shape = TokenShape::scan(token);

    let digits = if shape.contains(TokenShape::ALL_DIGITS) {
        if !regex!(r"^[0-3]?[0-9]$").is_match(token) {
            return None;
        }
        token
    } else if shape.contains(TokenShape::LEADING_DIGIT) {
        regex!(r"^([0-3]?[0-9])(?:[^0-9]|$)").captures(token)?.get(1)?.as_str()
    } else {
        return None;
    };

    let day: u32 = digits.parse().ok()?;
    (1..=31).contains(&day).then_some(day)
}

pub fn is_day(token: &str) -> bool {
    day_value(token).is_some()
}

/// Month held by `token` written as a number.
pub fn digit_month_value(token: &str) -> Option<u32> {
    if !TokenShape::scan(token).is_number_of_width(token, 2) {
        return None;
    }

    let month: u32 = token.parse().ok()?;
    (1..=12).contains(&month).then_some(month)
}

pub fn is_digit_month(token: &str) -> bool {
    digit_month_value(token).is_some()
}

/// Month named by `token` in any locale registered in `config`.
pub fn alpha_month(token: &str, config: &Config) -> Option<u32> {
    if !TokenShape::scan(token).contains(TokenShape::ALPHA) {
        return None;
    }
    month_index(token, config.months())
}

pub fn is_alpha_month(token: &str, config: &Config) -> bool {
    alpha_month(token, config).is_some()
}

/// Year held by `token`, two-digit years moved into the 2000s.
pub fn year_value(token: &str) -> Option<u32> {
    if !regex!(r"^(?:[0-2][0-9]{3}|[0-9]{2})$").is_match(token) {
        return None;
    }

    let year: u32 = token.parse().ok()?;
    Some(if token.len() == 2 { 2000 + year } else { year })
}

pub fn is_year(token: &str) -> bool {
    year_value(token).is_some()
}
