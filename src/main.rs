mod report;

use datify::{Config, Fields, parse_with};
use std::io::{self, IsTerminal, Read};

fn main() {
    let cli = match parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    match parse_with(&cli.input, &cli.fields, &cli.config) {
        Ok(parsed) => report::print_parsed(&cli.input, &parsed, cli.color),
        Err(err) => {
            report::print_failure(&cli.input, &err, cli.color);
            std::process::exit(1);
        }
    }
}

struct CliConfig {
    input: String,
    fields: Fields,
    config: Config,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut fields = Fields::default();
    let mut config = Config::default();
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("datify {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--month-first" => config.set_day_first(false),
            "--splitter" | "--locale" | "--day" | "--month" | "--year" => {
                let value = args.next().ok_or_else(|| format!("error: {arg} expects a value"))?;
                apply_option(&arg, &value, &mut fields, &mut config)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--") && arg.contains('=') => {
                let (name, value) = arg.split_once('=').unwrap_or_default();
                apply_option(name, value, &mut fields, &mut config)?;
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                input = Some(std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" "));
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None if io::stdin().is_terminal() => String::new(),
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() && fields.is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, fields, config, color })
}

fn apply_option(name: &str, value: &str, fields: &mut Fields, config: &mut Config) -> Result<(), String> {
    match name {
        "--splitter" => {
            let mut chars = value.chars();
            let (Some(splitter), None) = (chars.next(), chars.next()) else {
                return Err(format!("error: --splitter expects one character, got '{value}'"));
            };
            config.add_splitter(splitter);
        }
        "--locale" => {
            let names: Vec<&str> = value.split(',').map(str::trim).collect();
            config.add_months_locale(&names).map_err(|err| format!("error: --locale: {err}"))?;
        }
        "--day" => fields.day = Some(parse_number(name, value)?),
        "--month" => fields.month = Some(parse_number(name, value)?),
        "--year" => fields.year = Some(parse_number(name, value)?),
        _ => return Err(format!("error: unknown option '{name}'")),
    }
    Ok(())
}

fn parse_number(name: &str, value: &str) -> Result<u32, String> {
    value.parse().map_err(|_| format!("error: invalid {name} '{value}' (expected a positive number)"))
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "datify {version}

Extract day, month and year from a free-form date string.

Usage:
  datify [OPTIONS] [--] <input...>
  echo '<input>' | datify [OPTIONS]

Options:
  --month-first              Read two ambiguous numbers as month, then day.
  --splitter <char>          Add a separator character. Repeatable.
  --locale <names>           Add twelve comma separated month names,
                             January first. Repeatable.
  --day <n>                  Fix the day; the input only fills the rest.
  --month <n>                Fix the month.
  --year <n>                 Fix the year.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  A day, month or year was found.
  1  The input holds no date.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
