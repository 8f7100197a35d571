//! dialpick: command-line interface for dialpick-core
//!
//! Inspect the bundled country directory, try the phone normalizer and see
//! how the picker list is sectioned, from your terminal.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ dialpick stats
//!
//! - Look up a country by code or by dial prefix
//!   $ dialpick country jm
//!   $ dialpick dial +7
//!
//! - Normalize a number, or replay typing it
//!   $ dialpick normalize "+7 999 777 33 44"
//!   $ dialpick type 79997773344
//!
//! - Print the picker sections with favorites and a filter
//!   $ dialpick sections --favorites RU,JM --query Fra
//!
//! Data source
//! -----------
//!
//! By default the dataset compiled into `dialpick-core` is used. Use
//! `--input <path>` to load another `.json` (or `.json.gz`) file, and
//! `--config <path>` for picker options.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use dialpick_core::prelude::*;
use log::LevelFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let locale: Box<dyn Localizer> = match &args.locale {
        Some(id) => Box::new(FixedLocale::from_locale_id(id)),
        None => Box::new(SystemLocale),
    };

    let options = match &args.config {
        Some(path) => PickerOptions::from_path(path)?,
        None => PickerOptions::default(),
    };

    // A broken dataset is a packaging defect: stop here.
    let db = match &args.input {
        Some(path) => Directory::load_from_path(path, locale.as_ref())
            .with_context(|| format!("loading dataset {path}"))?,
        None => Directory::load_with(locale.as_ref()).context("loading bundled dataset")?,
    };

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Directory statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Dial prefixes: {}", stats.dial_prefixes);
            println!("  Shared dial prefixes: {}", stats.shared_prefixes);
        }

        Commands::Countries => {
            for c in db.countries() {
                println!("{} ({}) {}", c.name(), c.code(), c.dial_code_display());
            }
        }

        Commands::Country { code } => match db.find_by_code(&code) {
            Some(c) => print_country(c),
            None => eprintln!("No country found for: {code}"),
        },

        Commands::Dial { prefix } => {
            let all = db.find_all_by_dial_prefix(&prefix);
            match all.split_first() {
                Some((first, rest)) => {
                    print_country(first);
                    if !rest.is_empty() {
                        let others: Vec<_> = rest.iter().map(|c| c.code()).collect();
                        println!("Also uses this prefix: {}", others.join(", "));
                    }
                }
                None => eprintln!("No country uses dial prefix: {prefix}"),
            }
        }

        Commands::Normalize { text, country } => {
            let country = match &country {
                Some(code) => db.require_by_code(code)?,
                None => resolve_from_number(&db, &text),
            };
            let input = PhoneInput::with_options(country, &options).with_text(text);

            println!("Country: {country}");
            println!("Raw: {}", input.raw_phone_number());
            println!("Phone number: {}", input.phone_number());
            println!("Dial code: {}", input.current_dial_code());
            match input.phone_number_without_country_code() {
                Ok(national) => println!("Without country code: {national}"),
                Err(e) => println!("Without country code: unavailable ({e})"),
            }
            if let Ok(formatted) = input.formatted() {
                println!("Formatted: {formatted}");
            }
        }

        Commands::Type { keys } => {
            let mut input = PhoneInput::for_locale(&db, locale.as_ref(), &options);
            let mut text = input.raw_phone_number().to_string();
            for ch in keys.chars() {
                text.push(ch);
                let out = input.on_text_changed(&text, &db);
                let mut notes = Vec::new();
                if out.reset {
                    notes.push("reset");
                }
                if out.country_changed {
                    notes.push("country changed");
                }
                println!(
                    "{:<18} {:<4} {}",
                    out.text,
                    input.country().code(),
                    notes.join(", ")
                );
                text = out.text;
            }
        }

        Commands::Sections {
            favorites,
            query,
            select,
        } => {
            let mut options = options;
            if let Some(list) = favorites {
                options.favorites = split_codes(&list);
            }
            let collation = LatinCollation::default();
            let mut index = SearchIndex::with_options(&db, &options, &collation);
            if let Some(code) = &select {
                index.select(Some(db.require_by_code(code)?));
            }
            if let Some(q) = &query {
                index.set_query(q);
            }

            for (i, section) in index.sections().iter().enumerate() {
                let Some(title) = index.section_title(i) else {
                    continue;
                };
                let title = if i == 0 { "Favorites" } else { title };
                println!("[{title}]");
                for c in section {
                    let mark = if index.is_selected(c) { "*" } else { " " };
                    println!(" {mark} {} ({}) {}", c.name(), c.code(), c.dial_code_display());
                }
            }
            if let Some(path) = index.scroll_target() {
                println!("Scroll to section {} row {}", path.section, path.row);
            }
        }

        Commands::Current => {
            let c = db.current_country(locale.as_ref());
            if c.is_unknown() {
                println!("No region available from the locale");
            } else {
                print_country(c);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn print_country(c: &Country) {
    println!("Country: {}", c.name());
    println!("Code: {}", c.code());
    println!("Dial code: {}", c.dial_code_display());
    if c.has_format_pattern() {
        println!("Format: {}", c.format_pattern());
    }
}

/// Longest dial prefix at the start of the number's digits.
fn resolve_from_number<'a>(db: &'a Directory, text: &str) -> &'a Country {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    (1..=digits.len().min(4))
        .rev()
        .find_map(|n| db.find_by_dial_prefix(&digits[..n]))
        .unwrap_or(&*UNKNOWN_COUNTRY)
}

fn split_codes(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
