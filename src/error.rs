use std::fmt;

/// The three date fields, in the order results are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Day,
    Month,
    Year,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Day => "day",
            Field::Month => "month",
            Field::Year => "year",
        })
    }
}

/// Coarse grouping of [`Error`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Nothing date-like could be built from the input.
    Construction,
    /// A value handed to a mutator or to the registry failed its check.
    Validation,
    /// A strict date was requested but the fields do not form one.
    StrictDate,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("no input: neither text nor explicit fields were given")]
    Empty,
    #[error("`{0}` is not a day, a month or a year")]
    Unrecognized(String),
    #[error("`{0}` is not a YYYYMMDD date")]
    MalformedDateBlock(String),
    #[error("`{value}` is not a valid {field}")]
    InvalidField { field: Field, value: String },
    #[error("a locale must name exactly 12 months, got {0}")]
    LocaleSize(usize),
    #[error("no {missing} to build a date from")]
    Incomplete { missing: Field },
    #[error("{day:02}.{month:02}.{year:04} is not a calendar date")]
    NotACalendarDate { day: u32, month: u32, year: u32 },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Empty | Error::Unrecognized(_) | Error::MalformedDateBlock(_) => ErrorKind::Construction,
            Error::InvalidField { .. } | Error::LocaleSize(_) => ErrorKind::Validation,
            Error::Incomplete { .. } | Error::NotACalendarDate { .. } => ErrorKind::StrictDate,
        }
    }

    pub(crate) fn invalid(field: Field, value: impl fmt::Display) -> Self {
        Error::InvalidField { field, value: value.to_string() }
    }
}
