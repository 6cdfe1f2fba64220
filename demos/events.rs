//! Event lookup backed by `datify`.
//!
//! A tiny in-memory calendar answers free-form date queries: whatever parts of
//! a date the query holds are matched against the stored events.
//!
//! Run with `cargo run --example events`.

use datify::Datify;

/// Calendar date whose missing parts match anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PartialDate {
    day: Option<u32>,
    month: Option<u32>,
    year: Option<u32>,
}

impl PartialDate {
    const fn new(day: u32, month: u32, year: u32) -> Self {
        Self { day: Some(day), month: Some(month), year: Some(year) }
    }

    fn satisfies(&self, query: &PartialDate) -> bool {
        [(self.day, query.day), (self.month, query.month), (self.year, query.year)]
            .into_iter()
            .all(|pair| match pair {
                (Some(stored), Some(asked)) => stored == asked,
                _ => true,
            })
    }
}

impl From<&Datify> for PartialDate {
    fn from(parsed: &Datify) -> Self {
        Self { day: parsed.day(), month: parsed.month(), year: parsed.year() }
    }
}

const EVENTS: &[(PartialDate, &str)] = &[
    (PartialDate::new(31, 12, 2021), "New Year party 🎄"),
    (PartialDate::new(20, 1, 2022), "Birthday celebration 🎁"),
    (PartialDate::new(14, 2, 2022), "St. Valentine's Day 💖"),
    (PartialDate::new(23, 2, 2022), "Cinema night 📽"),
    (PartialDate::new(23, 5, 2022), "A long-awaited moment 🔥"),
];

/// First event on a date the query allows. An empty query finds nothing.
fn query(date: &PartialDate) -> Option<&'static str> {
    if date.day.is_none() && date.month.is_none() && date.year.is_none() {
        return None;
    }
    EVENTS.iter().find(|(stored, _)| stored.satisfies(date)).map(|(_, event)| *event)
}

fn handle_request(text: &str) -> String {
    let found = Datify::parse(text).ok().and_then(|parsed| query(&PartialDate::from(&parsed)));
    found.map_or_else(|| "No events found for this query 👀".to_string(), str::to_string)
}

fn main() {
    let requests = [
        "31.12.2021",
        "2022-02-23",
        "23-02/2022",
        "20 of January",
        "May",
        "14 лютого 2022",
        "qwerty",
    ];

    for text in requests {
        println!("{text}: {}", handle_request(text));
    }
}
