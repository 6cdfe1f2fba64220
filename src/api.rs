use crate::config::{self, Config};
use crate::datify::Datify;
use crate::engine;
use crate::error::Error;
use std::sync::PoisonError;

/// Fields known up front. Given alongside text, they are set first and the
/// parser only fills what they leave open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fields {
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<u32>,
}

impl Fields {
    pub fn with_day(mut self, day: u32) -> Self {
        self.day = Some(day);
        self
    }

    pub fn with_month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    pub fn with_year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.day.is_none() && self.month.is_none() && self.year.is_none()
    }
}

/// Parse `text` with the process-wide registry ([`config::global`]).
///
/// # Example
/// ```
/// use datify::parse;
///
/// let parsed = parse("14 лютого 2022").unwrap();
/// assert_eq!(parsed.tuple(), vec![14, 2, 2022]);
/// assert!(parsed.date().is_ok());
///
/// let partial = parse("10 of Jan").unwrap();
/// assert_eq!(partial.tuple(), vec![10, 1]);
/// assert!(partial.date().is_err());
/// ```
pub fn parse(text: &str) -> Result<Datify, Error> {
    let config = config::global().read().unwrap_or_else(PoisonError::into_inner);
    parse_with(text, &Fields::default(), &config)
}

/// Parse `text` with explicit `fields` and `config`.
///
/// Use this for deterministic parsing that does not depend on the shared
/// registry, or to pin some fields ahead of classification. Empty `text` with
/// at least one field is the same as [`Datify::from_fields`].
pub fn parse_with(text: &str, fields: &Fields, config: &Config) -> Result<Datify, Error> {
    engine::assemble(text, fields, config)
}
