//! Tokenization, classification and assembly.
//!
//! Parsing a string is a short pipeline:
//!
//! ```text
//! input ── tokenize ──┬─ Tokens      ──▶ assemble: per token, in order
//!  (tokenizer.rs)     │                    day? ─▶ month? ─▶ year? ─▶ lost
//!                     ├─ DateBlock   ──▶ YYYYMMDD sliced straight into fields
//!                     └─ Single      ──▶ day? ─▶ alpha month? ─▶ year?
//!                                          (assembler.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `shape.rs`: cheap character-class scan of a token (`TokenShape`), used by
//!   the classifiers to skip checks that cannot match.
//! - `tokenizer.rs`: splits the raw input on the configured splitters, or
//!   recognizes an 8-digit `YYYYMMDD` block.
//! - `matcher.rs`: month-name normalization and the inflection-tolerant
//!   similarity check.
//! - `classify.rs`: the day / digit month / alpha month / year predicates and
//!   their value extractors.
//! - `assembler.rs`: claims tokens for fields, resolves day/month ambiguity and
//!   collects leftovers.
//!
//! Nothing here touches global state: every entry point takes the
//! [`Config`](crate::Config) it should read.

#[path = "engine/assembler.rs"]
mod assembler;
#[path = "engine/classify.rs"]
mod classify;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/shape.rs"]
mod shape;
#[path = "engine/tokenizer.rs"]
mod tokenizer;


pub(crate) use assembler::assemble;
pub use classify::{
    alpha_month, day_value, digit_month_value, is_alpha_month, is_day, is_digit_month, is_year, year_value,
};
pub use matcher::{is_same_word, month_index, month_index_with, normalize_month_name};
pub use shape::TokenShape;
pub use tokenizer::{DateBlock, Tokenized, Tokens, tokenize};
