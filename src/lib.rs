//! Pull a calendar date out of free-form, locale-mixed text.
//!
//! `datify` reads strings such as `"6th of July, 2021"`, `"31.12.2021"`,
//! `"14 лютого 2022"` or `"20190301"` and extracts whatever day, month and year
//! they hold. It is a heuristic reader for user input, not a datetime library:
//! no times, time zones, relative dates or arithmetic.
//!
//! ```
//! use datify::{Config, Fields, Resolved, parse_with};
//!
//! let mut config = Config::default();
//! config.add_months_locale(&[
//!     "janvier", "février", "mars", "avril", "mai", "juin",
//!     "juillet", "août", "septembre", "octobre", "novembre", "décembre",
//! ])?;
//!
//! let parsed = parse_with("3 août 2018", &Fields::default(), &config)?;
//! assert_eq!(parsed.tuple(), vec![3, 8, 2018]);
//! assert!(matches!(parsed.date_or_tuple(), Resolved::Date(_)));
//! # Ok::<(), datify::Error>(())
//! ```
//!
//! The pieces, leaves first:
//!
//! - [`Config`]: splitters, month names per locale and the day/month preference.
//! - Month matching ([`month_index`], [`is_same_word`]): exact, then tolerant
//!   of grammatical inflection.
//! - Field classifiers ([`is_day`], [`is_digit_month`], [`is_alpha_month`],
//!   [`is_year`]).
//! - [`tokenize`]: splits the input or recognizes a `YYYYMMDD` block.
//! - [`Datify`]: the assembled result with [`date`](Datify::date),
//!   [`tuple`](Datify::tuple) and [`date_or_tuple`](Datify::date_or_tuple).

#[macro_use]
mod macros;
mod api;
pub mod config;
mod datify;
mod engine;
mod error;

pub use api::{Fields, parse, parse_with};
pub use config::Config;
pub use datify::{Datify, FieldValue, Resolved};
pub use engine::{
    DateBlock, TokenShape, Tokenized, Tokens, alpha_month, day_value, digit_month_value, is_alpha_month, is_day,
    is_digit_month, is_same_word, is_year, month_index, month_index_with, normalize_month_name, tokenize, year_value,
};
pub use error::{Error, ErrorKind, Field};
