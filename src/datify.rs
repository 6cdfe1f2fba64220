use crate::api::{self, Fields};
use crate::engine::{alpha_month, day_value, digit_month_value, year_value};
use crate::error::{Error, Field};
use crate::Config;
use chrono::NaiveDate;
use std::fmt;

/// A day, month or year handed in from outside the parser, either as a number
/// or as text to classify (`"6th"`, `"July"`, `"21"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Number(u32),
    Text(String),
}

impl FieldValue {
    fn as_token(&self) -> std::borrow::Cow<'_, str> {
        match self {
            FieldValue::Number(n) => n.to_string().into(),
            FieldValue::Text(s) => s.as_str().into(),
        }
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

/// Outcome of [`Datify::date_or_tuple`]: a calendar date when all three
/// fields form one, otherwise the fields that were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Date(NaiveDate),
    Partial(Vec<u32>),
}

impl Resolved {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Resolved::Date(date) => Some(*date),
            Resolved::Partial(_) => None,
        }
    }
}

impl fmt::Display for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolved::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Resolved::Partial(fields) => {
                let parts: Vec<String> = fields.iter().map(u32::to_string).collect();
                write!(f, "({})", parts.join(", "))
            }
        }
    }
}

/// Date fields extracted from one input.
///
/// Any subset of day, month and year may be present. Tokens of the input that
/// fit no field are kept, in order, in [`lost`](Self::lost).
///
/// # Example
/// ```
/// let parsed = datify::Datify::parse("6th of July, 2021").unwrap();
///
/// assert_eq!(parsed.tuple(), vec![6, 7, 2021]);
/// assert_eq!(parsed.lost(), ["of"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Datify {
    pub(crate) day: Option<u32>,
    pub(crate) month: Option<u32>,
    pub(crate) year: Option<u32>,
    pub(crate) lost: Vec<String>,
}

impl Datify {
    /// Parse `text` against the process-wide registry. Same as [`crate::parse`].
    pub fn parse(text: &str) -> Result<Self, Error> {
        api::parse(text)
    }

    /// Build from explicit fields only. Each present field is validated like
    /// the matching setter; with no field present this is [`Error::Empty`].
    pub fn from_fields(fields: &Fields) -> Result<Self, Error> {
        if fields.is_empty() {
            return Err(Error::Empty);
        }

        let mut datify = Datify::default();
        datify.apply(fields)?;
        Ok(datify)
    }

    pub(crate) fn apply(&mut self, fields: &Fields) -> Result<(), Error> {
        if let Some(day) = fields.day {
            self.set_day(day)?;
        }
        if let Some(month) = fields.month {
            let month = digit_month_value(&month.to_string()).ok_or_else(|| Error::invalid(Field::Month, month))?;
            self.month = Some(month);
        }
        if let Some(year) = fields.year {
            self.set_year(year)?;
        }
        Ok(())
    }

    pub fn day(&self) -> Option<u32> {
        self.day
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }

    pub fn year(&self) -> Option<u32> {
        self.year
    }

    /// Input tokens no field claimed.
    pub fn lost(&self) -> &[String] {
        &self.lost
    }

    /// Set the day from a number or a day-like token (`"6th"`), replacing any
    /// previous day. Invalid values leave the day untouched.
    pub fn set_day(&mut self, value: impl Into<FieldValue>) -> Result<(), Error> {
        let value = value.into();
        let day = day_value(&value.as_token()).ok_or_else(|| Error::invalid(Field::Day, &value))?;
        self.day = Some(day);
        Ok(())
    }

    /// Set the month from a number or a month name known to `config`.
    pub fn set_month(&mut self, value: impl Into<FieldValue>, config: &Config) -> Result<(), Error> {
        let value = value.into();
        let token = value.as_token();
        let month = digit_month_value(&token)
            .or_else(|| alpha_month(&token, config))
            .ok_or_else(|| Error::invalid(Field::Month, &value))?;
        self.month = Some(month);
        Ok(())
    }

    /// Set the year from two or four digits; two-digit years land in the 2000s.
    pub fn set_year(&mut self, value: impl Into<FieldValue>) -> Result<(), Error> {
        let value = value.into();
        let year = year_value(&value.as_token()).ok_or_else(|| Error::invalid(Field::Year, &value))?;
        self.year = Some(year);
        Ok(())
    }

    /// The strict calendar date. Fails if a field is missing or the three do
    /// not name a real day (`31.02.2021`).
    pub fn date(&self) -> Result<NaiveDate, Error> {
        let day = self.day.ok_or(Error::Incomplete { missing: Field::Day })?;
        let month = self.month.ok_or(Error::Incomplete { missing: Field::Month })?;
        let year = self.year.ok_or(Error::Incomplete { missing: Field::Year })?;

        i32::try_from(year)
            .ok()
            .and_then(|y| NaiveDate::from_ymd_opt(y, month, day))
            .ok_or(Error::NotACalendarDate { day, month, year })
    }

    /// Present fields in day, month, year order.
    pub fn tuple(&self) -> Vec<u32> {
        [self.day, self.month, self.year].into_iter().flatten().collect()
    }

    /// [`date`](Self::date) when it succeeds, [`tuple`](Self::tuple) otherwise.
    pub fn date_or_tuple(&self) -> Resolved {
        match self.date() {
            Ok(date) => Resolved::Date(date),
            Err(_) => Resolved::Partial(self.tuple()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn full(day: u32, month: u32, year: u32) -> Datify {
        Datify::from_fields(&Fields::default().with_day(day).with_month(month).with_year(year)).unwrap()
    }

    #[test]
    fn from_fields_requires_at_least_one() {
        let err = Datify::from_fields(&Fields::default()).unwrap_err();
        assert_eq!(err, Error::Empty);
        assert_eq!(err.kind(), ErrorKind::Construction);

        let only_year = Datify::from_fields(&Fields::default().with_year(2022)).unwrap();
        assert_eq!(only_year.tuple(), vec![2022]);
    }

    #[test]
    fn from_fields_validates_each_field() {
        let err = Datify::from_fields(&Fields::default().with_day(32)).unwrap_err();
        assert_eq!(err, Error::InvalidField { field: Field::Day, value: "32".into() });

        let err = Datify::from_fields(&Fields::default().with_month(13)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = Datify::from_fields(&Fields::default().with_year(3021)).unwrap_err();
        assert_eq!(err, Error::InvalidField { field: Field::Year, value: "3021".into() });
    }

    #[test]
    fn setters_accept_numbers_and_text() {
        let config = Config::default();
        let mut datify = Datify::default();

        datify.set_day("6th").unwrap();
        datify.set_month("July", &config).unwrap();
        datify.set_year(21).unwrap();
        assert_eq!(datify.tuple(), vec![6, 7, 2021]);

        datify.set_day(14).unwrap();
        datify.set_month("лютого", &config).unwrap();
        datify.set_year("2022").unwrap();
        assert_eq!(datify.tuple(), vec![14, 2, 2022]);
    }

    #[test]
    fn failed_set_leaves_state_unchanged() {
        let config = Config::default();
        let mut datify = full(14, 2, 2022);
        let before = datify.clone();

        assert!(datify.set_day(0).is_err());
        assert!(datify.set_day("of").is_err());
        assert!(datify.set_month(13, &config).is_err());
        assert!(datify.set_month("qwerty", &config).is_err());
        assert!(datify.set_year(5).is_err());
        assert!(datify.set_year("3000").is_err());
        assert_eq!(datify, before);
    }

    #[test]
    fn strict_date() {
        assert_eq!(full(31, 12, 2021).date().unwrap(), NaiveDate::from_ymd_opt(2021, 12, 31).unwrap());
        assert_eq!(full(29, 2, 2020).date().unwrap(), NaiveDate::from_ymd_opt(2020, 2, 29).unwrap());

        let err = full(31, 2, 2021).date().unwrap_err();
        assert_eq!(err, Error::NotACalendarDate { day: 31, month: 2, year: 2021 });
        assert_eq!(err.kind(), ErrorKind::StrictDate);

        let partial = Datify::from_fields(&Fields::default().with_day(10).with_month(1)).unwrap();
        assert_eq!(partial.date().unwrap_err(), Error::Incomplete { missing: Field::Year });
    }

    #[test]
    fn tuple_skips_missing_fields() {
        let datify = Datify::from_fields(&Fields::default().with_day(10).with_year(2004)).unwrap();
        assert_eq!(datify.tuple(), vec![10, 2004]);
        assert_eq!(Datify::default().tuple(), Vec::<u32>::new());
    }

    #[test]
    fn date_or_tuple_projects() {
        let date = full(1, 3, 2019).date_or_tuple();
        assert_eq!(date, Resolved::Date(NaiveDate::from_ymd_opt(2019, 3, 1).unwrap()));
        assert_eq!(date.to_string(), "2019-03-01");

        let impossible = full(31, 2, 2021).date_or_tuple();
        assert_eq!(impossible, Resolved::Partial(vec![31, 2, 2021]));
        assert_eq!(impossible.date(), None);

        let partial = Datify::from_fields(&Fields::default().with_month(7).with_year(2022)).unwrap();
        assert_eq!(partial.date_or_tuple().to_string(), "(7, 2022)");
    }
}
