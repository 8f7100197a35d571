use dialpick_core::prelude::*;
use std::collections::HashSet;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn bundled() -> Directory {
    init_logging();
    Directory::load_with(&FixedLocale::default()).expect("bundled dataset should load")
}

#[test]
fn every_code_resolves_in_both_cases() {
    let db = bundled();
    for c in db.countries() {
        assert_eq!(db.lookup_by_code(&c.code().to_lowercase()).code(), c.code());
        assert_eq!(db.lookup_by_code(&c.code().to_uppercase()).code(), c.code());
    }
}

#[test]
fn codes_are_unique_two_letter_uppercase() {
    let db = bundled();
    let mut seen = HashSet::new();
    for c in db.countries() {
        assert_eq!(c.code().len(), 2, "{}", c.code());
        assert!(c.code().chars().all(|ch| ch.is_ascii_uppercase()));
        assert!(seen.insert(c.code()));
        assert!(!c.dial_prefix().is_empty());
        assert!(c.dial_prefix().chars().all(|ch| ch.is_ascii_digit()), "{}", c.code());
    }
}

#[test]
fn misses_give_the_sentinel() {
    let db = bundled();
    assert!(db.lookup_by_code("??").is_unknown());
    assert!(db.find_by_code("??").is_none());
    assert!(db.lookup_by_dial_prefix("+999").is_unknown());
}

#[test]
fn leading_plus_is_immaterial() {
    let db = bundled();
    assert_eq!(db.lookup_by_dial_prefix("+7"), db.lookup_by_dial_prefix("7"));
    assert_eq!(db.lookup_by_dial_prefix("7").code(), "RU");
}

#[test]
fn dial_prefixes_round_trip_to_first_holder() {
    let db = bundled();
    for c in db.countries() {
        let first = db
            .countries()
            .iter()
            .find(|o| o.dial_prefix() == c.dial_prefix())
            .unwrap();
        assert_eq!(db.lookup_by_dial_prefix(c.dial_prefix()), first);
    }
    // North American Numbering Plan: Canada precedes the United States.
    assert_eq!(db.lookup_by_dial_prefix("+1").code(), "CA");
    let nanp: Vec<_> = db.find_all_by_dial_prefix("1").iter().map(|c| c.code()).collect();
    assert_eq!(nanp, ["CA", "US"]);
}

#[test]
fn spaced_dataset_prefixes_are_normalized() {
    let db = bundled();
    assert_eq!(db.lookup_by_code("AS").dial_prefix(), "1684");
    assert_eq!(db.lookup_by_code("KY").dial_prefix(), "345");
    assert_eq!(db.lookup_by_dial_prefix("+1876").code(), "JM");
}

#[test]
fn lookups_match_exactly_without_trimming() {
    let db = bundled();
    assert!(db.lookup_by_dial_prefix("+1 876").is_unknown());
    assert!(db.lookup_by_dial_prefix("+7 7").is_unknown());
    assert!(db.lookup_by_dial_prefix("7 ").is_unknown());
    assert_eq!(db.lookup_by_dial_prefix("77").code(), "KZ");
    assert!(db.lookup_by_code(" ru ").is_unknown());
    assert_eq!(db.lookup_by_code("rU").code(), "RU");
}

#[test]
fn normalizer_examples() {
    let db = bundled();
    let ru = db.lookup_by_code("RU");

    let input = PhoneInput::new(ru, true).with_text("+7 999 777 33 44");
    assert_eq!(input.phone_number(), "79997773344");
    assert_eq!(input.phone_number_without_country_code().unwrap(), "9997773344");
    assert_eq!(input.formatted().unwrap(), "+7 999 777-33-44");

    let input = PhoneInput::new(ru, false).with_text("+7 999 777 33 44");
    assert!(matches!(
        input.phone_number_without_country_code(),
        Err(PickerError::UnsupportedInCurrentMode(_))
    ));
}

#[test]
fn typing_seven_selects_russia() {
    let db = bundled();
    let locale = FixedLocale::new(None);
    let mut input = PhoneInput::new(db.current_country(&locale), true);
    assert!(!input.has_resolved_country());

    let out = input.on_text_changed("7", &db);
    assert!(out.reset);
    assert_eq!(input.raw_phone_number(), "+7");
    assert_eq!(input.country().code(), "RU");

    input.on_text_changed("+79", &db);
    input.on_text_changed("+799", &db);
    assert_eq!(input.country().code(), "RU");
    assert_eq!(input.current_dial_code(), "7");
}

#[test]
fn current_country_follows_locale() {
    let db = bundled();
    assert_eq!(db.current_country(&FixedLocale::from_locale_id("en_GB")).code(), "GB");
    assert!(db.current_country(&FixedLocale::from_locale_id("C")).is_unknown());
}

#[test]
fn favorites_and_filtering() {
    let db = bundled();
    let collation = LatinCollation::default();
    let index = SearchIndex::build(&db, &["RU", "JM"], &collation);

    let favorites: Vec<_> = index.section(0).iter().map(|c| c.name()).collect();
    assert_eq!(favorites, ["Russia", "Jamaica"]);
    let ru = db.lookup_by_code("RU");
    let jm = db.lookup_by_code("JM");
    assert!(index.sections()[1..].iter().flatten().any(|c| *c == ru));
    assert!(index.sections()[1..].iter().flatten().any(|c| *c == jm));

    let every: usize = index.sections()[1..].iter().map(Vec::len).sum();
    assert_eq!(every, db.len());

    let fra = index.filter("Fra");
    assert!(fra.section(0).is_empty());
    assert!(!fra.is_empty());
    assert!(fra.sections().iter().flatten().all(|c| c.name().contains("Fra")));

    let restored = fra.filter("");
    assert_eq!(restored.sections(), index.sections());
}

#[test]
fn locale_names_drive_sections() {
    init_logging();
    let locale = FixedLocale::new(Some("DE")).with_name("DE", "Deutschland");
    let db = Directory::load_with(&locale).unwrap();
    let collation = LatinCollation::default();
    let index = SearchIndex::build(&db, &[] as &[&str], &collation);

    let de = db.lookup_by_code("DE");
    assert_eq!(de.name(), "Deutschland");
    let pos = index.position_of(de).unwrap();
    assert_eq!(index.section_title(pos.section), Some("D"));
}

#[test]
fn shared_directory_matches_fresh_load() {
    init_logging();
    let shared = Directory::shared().unwrap();
    let fresh = Directory::load().unwrap();
    assert_eq!(shared.countries(), fresh.countries());
    assert!(shared.stats().shared_prefixes > 0);
}
