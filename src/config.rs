//! Locale registry.
//!
//! A [`Config`] carries everything the engine needs to know about the
//! languages it is reading:
//!
//! - **Splitters**: characters that separate the parts of a date. Order
//!   matters: the tokenizer scans them in the order they were added.
//! - **Months**: exactly twelve sets of lowercase name variants, January
//!   first. Every supported locale contributes one name (or several
//!   grammatical forms) to each set.
//! - **Day first**: how two numbers that could both be a day or a month are
//!   read. `true` reads `05.07` as the 5th of July, `false` as May 7th.
//!
//! Parsing takes the registry by reference ([`crate::parse_with`]). For hosts
//! that prefer one shared registry, [`global`] holds a lazily created default
//! behind an `RwLock`; [`crate::parse`] reads it.

use crate::engine::normalize_month_name;
use crate::error::Error;
use once_cell::sync::Lazy;
use std::collections::BTreeSet;
use std::sync::RwLock;
use tracing::debug;

/// Number of months every locale must name.
pub const MONTHS_IN_YEAR: usize = 12;

/// Splitters used when no others are configured.
pub const DEFAULT_SPLITTERS: [char; 4] = [' ', '/', '.', '-'];

static GLOBAL: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

/// Process-wide registry used by [`crate::parse`].
///
/// Take the write lock to add splitters or locales; parses in flight hold the
/// read lock, so a mutation never interleaves with one.
pub fn global() -> &'static RwLock<Config> {
    &GLOBAL
}

/// Locale registry: splitters, month names and the day/month preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    splitters: Vec<char>,
    months: [BTreeSet<String>; MONTHS_IN_YEAR],
    day_first: bool,
}

impl Default for Config {
    /// English, Russian and Ukrainian month names, day-first.
    fn default() -> Self {
        let months: [BTreeSet<String>; MONTHS_IN_YEAR] = months![
            ["january", "jan", "январь", "січень"],
            ["february", "feb", "февраль", "лютий"],
            ["march", "mar", "март", "березень"],
            ["april", "apr", "апрель", "квітень"],
            ["may", "май", "травень"],
            ["june", "jun", "июнь", "червень"],
            ["july", "jul", "июль", "липень"],
            ["august", "aug", "август", "серпень"],
            ["september", "sep", "сентябрь", "вересень"],
            ["october", "oct", "октябрь", "жовтень"],
            ["november", "nov", "ноябрь", "листопад"],
            ["december", "dec", "декабрь", "грудень"],
        ];

        Self { splitters: DEFAULT_SPLITTERS.to_vec(), months, day_first: true }
    }
}

impl Config {
    /// Default registry that reads ambiguous numbers month first (`05/07` is May 7th).
    pub fn month_first() -> Self {
        Self { day_first: false, ..Self::default() }
    }

    /// Separator characters, in scan order.
    pub fn splitters(&self) -> &[char] {
        &self.splitters
    }

    /// Register a separator. Returns `false` if it was already present.
    pub fn add_splitter(&mut self, splitter: char) -> bool {
        if self.splitters.contains(&splitter) {
            return false;
        }
        debug!(%splitter, "splitter added");
        self.splitters.push(splitter);
        true
    }

    /// Forget a separator. Returns `false` if it was not registered.
    pub fn remove_splitter(&mut self, splitter: char) -> bool {
        let before = self.splitters.len();
        self.splitters.retain(|c| *c != splitter);
        let removed = self.splitters.len() != before;
        if removed {
            debug!(%splitter, "splitter removed");
        }
        removed
    }

    /// All twelve variant sets, January first.
    pub fn months(&self) -> &[BTreeSet<String>; MONTHS_IN_YEAR] {
        &self.months
    }

    /// Variants for `month` (1-based), or `None` outside `1..=12`.
    pub fn month_names(&self, month: u32) -> Option<&BTreeSet<String>> {
        let idx = usize::try_from(month).ok()?.checked_sub(1)?;
        self.months.get(idx)
    }

    /// Append one locale: `names[0]` is January, `names[11]` December.
    ///
    /// Names are normalized before they are stored. Anything other than
    /// exactly twelve names is rejected and the registry is left untouched.
    pub fn add_months_locale<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), Error> {
        if names.len() != MONTHS_IN_YEAR {
            return Err(Error::LocaleSize(names.len()));
        }

        for (set, name) in self.months.iter_mut().zip(names) {
            set.insert(normalize_month_name(name.as_ref()));
        }
        debug!(first = names[0].as_ref(), "month locale added");
        Ok(())
    }

    /// Undo [`add_months_locale`](Self::add_months_locale) for the same twelve names.
    ///
    /// Names that are not registered are skipped; the count check is the same
    /// as for adding.
    pub fn remove_months_locale<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), Error> {
        if names.len() != MONTHS_IN_YEAR {
            return Err(Error::LocaleSize(names.len()));
        }

        for (set, name) in self.months.iter_mut().zip(names) {
            set.remove(&normalize_month_name(name.as_ref()));
        }
        debug!(first = names[0].as_ref(), "month locale removed");
        Ok(())
    }

    /// Whether ambiguous numbers are read day first.
    pub fn day_first(&self) -> bool {
        self.day_first
    }

    pub fn set_day_first(&mut self, day_first: bool) {
        self.day_first = day_first;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const FRENCH: [&str; 12] = [
        "Janvier",
        "Février",
        "Mars",
        "Avril",
        "Peut",
        "Juin",
        "Juillet",
        "Août",
        "Septembre",
        "Octobre",
        "Novembre",
        "Décembre",
    ];

    #[test]
    fn default_registry_has_three_locales() {
        let config = Config::default();
        assert_eq!(config.splitters(), &[' ', '/', '.', '-']);
        assert!(config.day_first());
        assert!(config.month_names(1).unwrap().contains("січень"));
        assert!(config.month_names(5).unwrap().contains("май"));
        assert!(config.month_names(12).unwrap().contains("dec"));
        assert!(config.month_names(0).is_none());
        assert!(config.month_names(13).is_none());
    }

    #[test]
    fn add_locale_appends_normalized_names() {
        let mut config = Config::default();
        config.add_months_locale(&FRENCH).unwrap();

        assert!(config.month_names(2).unwrap().contains("février"));
        assert!(config.month_names(8).unwrap().contains("août"));
        assert!(config.month_names(12).unwrap().contains("décembre"));
    }

    #[test]
    fn add_locale_with_wrong_count_is_rejected_without_mutation() {
        let mut config = Config::default();
        let before = config.clone();

        let every_other: Vec<&str> = FRENCH.iter().step_by(2).copied().collect();
        let err = config.add_months_locale(&every_other).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(matches!(err, Error::LocaleSize(6)));
        assert_eq!(config, before);

        let empty: [&str; 0] = [];
        assert!(config.add_months_locale(&empty).is_err());
        assert_eq!(config, before);
    }

    #[test]
    fn remove_locale_restores_registry() {
        let mut config = Config::default();
        let before = config.clone();

        config.add_months_locale(&FRENCH).unwrap();
        assert_ne!(config, before);
        config.remove_months_locale(&FRENCH).unwrap();
        assert_eq!(config, before);
    }

    #[test]
    fn splitters_can_be_added_and_removed() {
        let mut config = Config::default();

        assert!(config.add_splitter('%'));
        assert!(!config.add_splitter('%'));
        assert_eq!(config.splitters().last(), Some(&'%'));

        assert!(config.remove_splitter('%'));
        assert!(!config.remove_splitter('%'));
        assert_eq!(config.splitters(), &DEFAULT_SPLITTERS);
    }

    #[test]
    fn month_first_only_flips_preference() {
        let config = Config::month_first();
        assert!(!config.day_first());
        assert_eq!(config.months(), Config::default().months());
    }
}
