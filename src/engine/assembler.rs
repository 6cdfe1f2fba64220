//! Field assembly.
//!
//! Turns the tokenizer's output into a [`Datify`]. For a token list the rules
//! are, per token and in input order:
//!
//! ```text
//! token ─▶ day free and is day?            ─▶ day
//!       └▶ month free and is month?         ─▶ month   (digits or a name)
//!       └▶ year free and is year?           ─▶ year
//!       └▶ lost
//! ```
//!
//! Because a number in `1..=12` is both a day and a month, the order of the
//! checks decides: day wins, which reads input day first. Two exceptions:
//!
//! - **Year first**: a list opening with a four-digit year followed by a month
//!   number and a day number is read as `YYYY MM DD`.
//! - **Month first**: when the registry is not `day_first`, no token names a
//!   month and both day and month are still free, the month check runs before
//!   the day check, but only if the input pairs its ambiguous numbers with
//!   something: exactly two ambiguous numbers (`05.07` is May 7th), or one
//!   ambiguous number next to an unambiguous day (`5.25`). A lone ambiguous
//!   number stays a day. Other counts keep the day-first order.
//!
//! Fields set before assembly (explicit [`Fields`]) are never overwritten.

use super::classify::{alpha_month, day_value, digit_month_value, year_value};
use super::shape::TokenShape;
use super::tokenizer::{DateBlock, Tokenized, tokenize};
use crate::error::{Error, Field};
use crate::{Config, Datify, Fields};
use tracing::{debug, trace};

pub(crate) fn assemble(text: &str, fields: &Fields, config: &Config) -> Result<Datify, Error> {
    let mut datify = Datify::default();
    datify.apply(fields)?;

    match tokenize(text, config.splitters()) {
        Tokenized::Empty if fields.is_empty() => return Err(Error::Empty),
        Tokenized::Empty => {}
        Tokenized::Tokens(tokens) => {
            let tokens: Vec<&str> = tokens.collect();
            Assembler { datify: &mut datify, config }.run(&tokens);
        }
        Tokenized::DateBlock(block) => fill_block(&mut datify, block)?,
        Tokenized::MalformedBlock(digits) => return Err(Error::MalformedDateBlock(digits.to_string())),
        Tokenized::Single(token) => fill_single(&mut datify, token, config)?,
    }

    debug!(
        input = text,
        day = ?datify.day,
        month = ?datify.month,
        year = ?datify.year,
        lost = datify.lost.len(),
        "assembled"
    );
    Ok(datify)
}

fn slot(datify: &mut Datify, field: Field) -> &mut Option<u32> {
    match field {
        Field::Day => &mut datify.day,
        Field::Month => &mut datify.month,
        Field::Year => &mut datify.year,
    }
}

struct Assembler<'a> {
    datify: &'a mut Datify,
    config: &'a Config,
}

impl Assembler<'_> {
    fn run(&mut self, tokens: &[&str]) {
        let rest = self.claim_year_first(tokens);

        let month_first = self.reads_month_first(rest);

        for token in rest {
            match self.classify(token, month_first) {
                Some((field, value)) => {
                    trace!(token, %field, value, "claimed");
                    *slot(self.datify, field) = Some(value);
                }
                None => {
                    trace!(token, "lost");
                    self.datify.lost.push(token.to_string());
                }
            }
        }
    }

    /// Whether ambiguous numbers in `tokens` should be claimed month first.
    fn reads_month_first(&self, tokens: &[&str]) -> bool {
        if self.config.day_first() || self.datify.day.is_some() || self.datify.month.is_some() {
            return false;
        }
        if tokens.iter().any(|t| alpha_month(t, self.config).is_some()) {
            return false;
        }

        let ambiguous = tokens.iter().filter(|t| day_value(t).is_some() && digit_month_value(t).is_some()).count();
        let only_day = tokens.iter().any(|t| day_value(t).is_some() && digit_month_value(t).is_none());
        ambiguous == 2 || (ambiguous == 1 && only_day)
    }

    /// First free field `token` fits, with its value.
    fn classify(&self, token: &str, month_first: bool) -> Option<(Field, u32)> {
        let d = &*self.datify;

        if month_first && d.month.is_none() {
            if let Some(month) = digit_month_value(token) {
                return Some((Field::Month, month));
            }
        }

        if d.day.is_none() {
            if let Some(day) = day_value(token) {
                return Some((Field::Day, day));
            }
        }

        if d.month.is_none() {
            if let Some(month) = digit_month_value(token).or_else(|| alpha_month(token, self.config)) {
                return Some((Field::Month, month));
            }
        }

        if d.year.is_none() {
            if let Some(year) = year_value(token) {
                return Some((Field::Year, year));
            }
        }

        None
    }

    /// Claim a leading `YYYY MM DD` triple and return the tokens after it.
    fn claim_year_first<'t>(&mut self, tokens: &'t [&'t str]) -> &'t [&'t str] {
        let [year, month, day, rest @ ..] = tokens else {
            return tokens;
        };

        if year.len() != 4 || !TokenShape::scan(day).contains(TokenShape::ALL_DIGITS) {
            return tokens;
        }

        let (Some(y), Some(m), Some(d)) = (year_value(year), digit_month_value(month), day_value(day)) else {
            return tokens;
        };

        for (field, value, token) in [(Field::Year, y, year), (Field::Month, m, month), (Field::Day, d, day)] {
            let target = slot(self.datify, field);
            if target.is_none() {
                trace!(token, %field, value, "claimed (year first)");
                *target = Some(value);
            } else {
                self.datify.lost.push(token.to_string());
            }
        }

        rest
    }
}

/// Slice a `YYYYMMDD` block into whichever fields are still free.
fn fill_block(datify: &mut Datify, block: DateBlock<'_>) -> Result<(), Error> {
    let values = (year_value(block.year), digit_month_value(block.month), day_value(block.day));
    let (Some(year), Some(month), Some(day)) = values else {
        return Err(Error::MalformedDateBlock(format!("{}{}{}", block.year, block.month, block.day)));
    };

    for (field, value) in [(Field::Year, year), (Field::Month, month), (Field::Day, day)] {
        slot(datify, field).get_or_insert(value);
    }
    Ok(())
}

/// One unsplit token: a day, a month name or a year, in that order.
///
/// A token that fits only fields already set explicitly is kept as lost; one
/// that fits nothing at all means the input is not a date.
fn fill_single(datify: &mut Datify, token: &str, config: &Config) -> Result<(), Error> {
    let candidates = [
        (Field::Day, day_value(token)),
        (Field::Month, alpha_month(token, config)),
        (Field::Year, year_value(token)),
    ];

    let mut fits = false;
    for (field, value) in candidates {
        let Some(value) = value else { continue };
        fits = true;

        let target = slot(datify, field);
        if target.is_none() {
            trace!(token, %field, value, "claimed");
            *target = Some(value);
            return Ok(());
        }
    }

    if !fits {
        return Err(Error::Unrecognized(token.to_string()));
    }
    datify.lost.push(token.to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assemble_default(text: &str) -> Datify {
        assemble(text, &Fields::default(), &Config::default()).unwrap()
    }

    #[test]
    fn claims_fields_in_order_and_keeps_lost_tokens() {
        let res = assemble_default("6 декабря 2021 года");
        assert_eq!(res.tuple(), vec![6, 12, 2021]);
        assert_eq!(res.lost(), ["года"]);
    }

    #[test]
    fn first_match_wins_per_field() {
        let res = assemble_default("5 6 7 2020 2021");
        assert_eq!(res.tuple(), vec![5, 6, 2020]);
        assert_eq!(res.lost(), ["7", "2021"]);
    }

    #[test]
    fn year_first_triples() {
        assert_eq!(assemble_default("2020-01-20").tuple(), vec![20, 1, 2020]);
        assert_eq!(assemble_default("2001.12.21").tuple(), vec![21, 12, 2001]);

        // Not a year-month-day triple: falls back to the general rules.
        assert_eq!(assemble_default("2020 25 5").tuple(), vec![25, 5, 2020]);
    }

    #[test]
    fn month_first_swaps_two_ambiguous_numbers() {
        let config = Config::month_first();
        let res = assemble("05.07.2021", &Fields::default(), &config).unwrap();
        assert_eq!((res.day(), res.month(), res.year()), (Some(7), Some(5), Some(2021)));
    }

    #[test]
    fn month_first_keeps_unambiguous_days() {
        let config = Config::month_first();
        for text in ["25.5.2020", "5.25.2020"] {
            let res = assemble(text, &Fields::default(), &config).unwrap();
            assert_eq!((res.day(), res.month()), (Some(25), Some(5)), "{text}");
        }
    }

    #[test]
    fn month_first_leaves_a_lone_ambiguous_number_on_the_day() {
        let config = Config::month_first();
        let res = assemble("10 2004", &Fields::default(), &config).unwrap();
        assert_eq!((res.day(), res.month(), res.year()), (Some(10), None, Some(2004)));
    }

    #[test]
    fn month_first_ignored_when_a_month_is_named() {
        let config = Config::month_first();
        let res = assemble("10 of Jan", &Fields::default(), &config).unwrap();
        assert_eq!((res.day(), res.month()), (Some(10), Some(1)));
    }

    #[test]
    fn explicit_fields_are_not_overwritten() {
        let fields = Fields::default().with_month(7);
        let res = assemble("11th of June 2004", &fields, &Config::default()).unwrap();
        assert_eq!(res.tuple(), vec![11, 7, 2004]);
        assert_eq!(res.lost(), ["of", "June"]);

        let fields = Fields::default().with_day(3).with_month(12).with_year(2021);
        assert_eq!(assemble("20200101", &fields, &Config::default()).unwrap().tuple(), vec![3, 12, 2021]);
    }

    #[test]
    fn date_blocks() {
        assert_eq!(assemble_default("20190301").tuple(), vec![1, 3, 2019]);

        for text in ["20191301", "20190300", "20190232", "12345"] {
            let err = assemble(text, &Fields::default(), &Config::default()).unwrap_err();
            assert!(matches!(err, Error::MalformedDateBlock(_)), "{text}: {err:?}");
        }
    }

    #[test]
    fn single_tokens() {
        assert_eq!(assemble_default("May").month(), Some(5));
        assert_eq!(assemble_default("6th").day(), Some(6));
        assert_eq!(assemble_default("2021").year(), Some(2021));
        assert_eq!(assemble_default("12").day(), Some(12));

        let err = assemble("qwerty", &Fields::default(), &Config::default()).unwrap_err();
        assert_eq!(err, Error::Unrecognized("qwerty".into()));
    }

    #[test]
    fn single_token_for_a_preset_field_is_lost() {
        let fields = Fields::default().with_day(3);
        let res = assemble("5", &fields, &Config::default()).unwrap();
        assert_eq!(res.tuple(), vec![3]);
        assert_eq!(res.lost(), ["5"]);
    }

    #[test]
    fn invalid_explicit_field_fails_construction() {
        let fields = Fields::default().with_day(40);
        let err = assemble("July 2021", &fields, &Config::default()).unwrap_err();
        assert_eq!(err, Error::InvalidField { field: Field::Day, value: "40".into() });
    }
}
