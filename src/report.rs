use datify::{Datify, Error, Resolved};
use std::fmt::Display;

/// Role of a piece of report text; each maps to one SGR sequence.
#[derive(Debug, Clone, Copy)]
enum Tone {
    Title,
    Rule,
    Label,
    Found,
    Partial,
    Failed,
    Muted,
}

impl Tone {
    fn sgr(self) -> &'static str {
        match self {
            Tone::Title => "1;36",
            Tone::Rule => "90",
            Tone::Label => "34",
            Tone::Found => "1;32",
            Tone::Partial => "33",
            Tone::Failed => "31",
            Tone::Muted => "2",
        }
    }
}

struct Palette {
    enabled: bool,
}

impl Palette {
    fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn tone(&self, text: impl Display, tone: Tone) -> String {
        if self.enabled { format!("\x1b[{}m{text}\x1b[0m", tone.sgr()) } else { text.to_string() }
    }

    fn section(&self, title: &str) {
        println!("\n{}", self.tone(format!("━━━ {title} ━━━"), Tone::Rule));
    }
}

pub fn print_parsed(input: &str, parsed: &Datify, color: bool) {
    let palette = Palette::new(color);
    print_header(input, &palette);

    palette.section("Fields");
    for (label, value) in [("day", parsed.day()), ("month", parsed.month()), ("year", parsed.year())] {
        let value = match value {
            Some(v) => palette.tone(v, Tone::Found),
            None => palette.tone("-", Tone::Muted),
        };
        println!("  {} {}", palette.tone(format_args!("{label:<6}"), Tone::Label), value);
    }

    if !parsed.lost().is_empty() {
        palette.section("Lost");
        for token in parsed.lost() {
            println!("  {} {}", palette.tone("•", Tone::Muted), palette.tone(token, Tone::Partial));
        }
    }

    palette.section("Result");
    match parsed.date_or_tuple() {
        Resolved::Date(date) => {
            let date = palette.tone(date.format("%Y-%m-%d"), Tone::Found);
            println!("  {} {}", date, palette.tone("│ date", Tone::Muted));
        }
        resolved @ Resolved::Partial(_) => {
            let reason = parsed.date().err().map(|err| err.to_string()).unwrap_or_default();
            let reason = palette.tone(format!("│ {reason}"), Tone::Muted);
            println!("  {} {}", palette.tone(resolved, Tone::Partial), reason);
        }
    }
    println!();
}

pub fn print_failure(input: &str, err: &Error, color: bool) {
    let palette = Palette::new(color);
    print_header(input, &palette);

    palette.section("Result");
    println!("  {} {}", palette.tone("✗", Tone::Failed), palette.tone(err, Tone::Muted));
    println!();
}

fn print_header(input: &str, palette: &Palette) {
    println!("\n{}", palette.tone(format!("⚙  Parsing: {input:?}"), Tone::Title));
}
