// crates/dialpick-core/src/phone.rs

//! Phone-number text held by an input control, and the strings derived
//! from it.

use crate::directory::Directory;
use crate::error::{PickerError, Result};
use crate::locale::Localizer;
use crate::model::{Country, FORMAT_PLACEHOLDER};
use crate::options::PickerOptions;
use crate::text::{cut_pluses, cut_spaces};
use crate::traits::CountryLookup;
use log::trace;

/// The text of a phone input plus the country currently associated with it.
///
/// Owned by the UI layer; one per input control. With the
/// *plus-prefix-immortal* policy on, the text always starts with exactly one
/// `+` after an edit.
#[derive(Clone, Debug)]
pub struct PhoneInput {
    text: String,
    country: Country,
    plus_prefix_immortal: bool,
}

/// What an edit did, so the UI knows what to redraw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditOutcome {
    /// Text after the plus-prefix policy was applied.
    pub text: String,
    /// The entry was cleared or restarted and the country reset to unknown.
    pub reset: bool,
    /// The whole entry matched a dial prefix and that country is now
    /// associated.
    pub resolved: bool,
    /// The associated country differs from the one before the edit.
    pub country_changed: bool,
}

impl PhoneInput {
    /// An empty input associated with `country`.
    pub fn new(country: &Country, plus_prefix_immortal: bool) -> Self {
        PhoneInput {
            text: String::new(),
            country: country.clone(),
            plus_prefix_immortal,
        }
    }

    /// An empty input configured from picker options.
    pub fn with_options(country: &Country, options: &PickerOptions) -> Self {
        Self::new(country, options.plus_prefix_immortal)
    }

    /// An empty input associated with the locale's country, or with
    /// [`crate::UNKNOWN_COUNTRY`] when the locale has no region.
    pub fn for_locale(
        directory: &Directory,
        locale: &dyn Localizer,
        options: &PickerOptions,
    ) -> Self {
        Self::with_options(directory.current_country(locale), options)
    }

    /// Replaces the text without running the editing reaction.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn plus_prefix_immortal(&self) -> bool {
        self.plus_prefix_immortal
    }

    pub fn set_plus_prefix_immortal(&mut self, on: bool) {
        self.plus_prefix_immortal = on;
    }

    /// The associated country ([`UNKNOWN_COUNTRY`](crate::UNKNOWN_COUNTRY) if
    /// none).
    pub fn country(&self) -> &Country {
        &self.country
    }

    /// True when a real country (not the sentinel) is associated, i.e. the
    /// UI can show its flag.
    pub fn has_resolved_country(&self) -> bool {
        !self.country.is_unknown()
    }

    /// Associates `country` and rewrites the text to its dial code followed
    /// by a space (`"+7 "`), as after a pick in the country list.
    pub fn select_country(&mut self, country: &Country) {
        self.country = country.clone();
        self.text = format!("+{} ", country.dial_prefix());
    }

    /// Text verbatim, e.g. `"+7 999 777 33 44"`.
    pub fn raw_phone_number(&self) -> &str {
        &self.text
    }

    /// Text without spaces and without `+`, e.g. `"79997773344"`.
    pub fn phone_number(&self) -> String {
        cut_pluses(&cut_spaces(&self.text))
    }

    /// Text without the associated dial code, spaces and `+`
    /// (e.g. `"9997773344"`).
    ///
    /// Only the first `"+{dial}"` occurrence is removed. Without the
    /// plus-prefix-immortal policy there is no reliable place to cut, so this
    /// fails with [`PickerError::UnsupportedInCurrentMode`].
    pub fn phone_number_without_country_code(&self) -> Result<String> {
        if !self.plus_prefix_immortal {
            return Err(PickerError::UnsupportedInCurrentMode(
                "stripping the country code requires the plus-prefix-immortal policy",
            ));
        }
        let code = format!("+{}", self.current_dial_code());
        let rest = self.text.replacen(&code, "", 1);
        Ok(cut_pluses(&cut_spaces(&rest)))
    }

    /// Dial prefix of the associated country without `+`, e.g. `"7"`.
    pub fn current_dial_code(&self) -> String {
        cut_pluses(self.country.dial_prefix())
    }

    /// The national part grouped with the associated country's pattern,
    /// e.g. `"999 777-33-44"`.
    pub fn formatted_national(&self) -> Result<String> {
        let national = self.phone_number_without_country_code()?;
        Ok(apply_format_pattern(&national, self.country.format_pattern()))
    }

    /// Dial code plus the grouped national part, e.g. `"+7 999 777-33-44"`.
    pub fn formatted(&self) -> Result<String> {
        let national = self.formatted_national()?;
        let code = self.country.dial_code_display();
        Ok(match (code.is_empty(), national.is_empty()) {
            (true, _) => national,
            (false, true) => code,
            (false, false) => format!("{code} {national}"),
        })
    }

    /// Reacts to the text changing to `new_text`; call on every keystroke.
    ///
    /// 1. A 0- or 1-character entry resets the country to unknown.
    /// 2. With the plus-prefix-immortal policy, the text becomes `"+"`
    ///    followed by the entry with every `+` removed.
    /// 3. If the whole entry (pluses removed) is a known dial prefix, that
    ///    country is associated; otherwise the association is left as is.
    pub fn on_text_changed<L: CountryLookup + ?Sized>(
        &mut self,
        new_text: &str,
        directory: &L,
    ) -> EditOutcome {
        let before = self.country.clone();

        let reset = new_text.chars().count() <= 1;
        if reset {
            self.country = Country::unknown();
        }

        self.text = if self.plus_prefix_immortal {
            format!("+{}", cut_pluses(new_text))
        } else {
            new_text.to_string()
        };

        let hit = directory.find_by_dial_prefix(new_text);
        let resolved = hit.is_some();
        if let Some(country) = hit {
            self.country = country.clone();
        }

        trace!(
            "edit {:?} -> {:?}: reset={} country={}",
            new_text,
            self.text,
            reset,
            self.country.code()
        );

        EditOutcome {
            text: self.text.clone(),
            reset,
            resolved,
            country_changed: self.country != before,
        }
    }
}

/// Fills the `#` placeholders of `pattern` with the digits of `digits`.
///
/// Literal characters of the pattern are emitted only between placed digits;
/// digits beyond the pattern are appended as is. Non-digit characters of the
/// input are ignored.
///
/// ```rust
/// use dialpick_core::phone::apply_format_pattern;
///
/// assert_eq!(apply_format_pattern("9997773344", "### ###-##-##"), "999 777-33-44");
/// assert_eq!(apply_format_pattern("9997", "### ###-##-##"), "999 7");
/// assert_eq!(apply_format_pattern("1234567", "### ##"), "123 4567");
/// ```
pub fn apply_format_pattern(digits: &str, pattern: &str) -> String {
    let mut digits = digits.chars().filter(char::is_ascii_digit).peekable();
    let mut out = String::with_capacity(pattern.len());
    let mut pending = String::new();

    for p in pattern.chars() {
        if digits.peek().is_none() {
            break;
        }
        if p == FORMAT_PLACEHOLDER {
            out.push_str(&pending);
            pending.clear();
            out.extend(digits.next());
        } else {
            pending.push(p);
        }
    }
    out.extend(digits);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::FixedLocale;

    fn directory() -> Directory {
        Directory::from_countries(vec![
            Country::new("CA", "1", "Canada"),
            Country::new("JM", "1876", "Jamaica"),
            Country::new("KZ", "77", "Kazakhstan"),
            Country::new("RU", "7", "Russia").with_format("### ###-##-##"),
            Country::new("US", "1", "United States"),
        ])
        .unwrap()
    }

    fn russian(text: &str, immortal: bool) -> PhoneInput {
        let db = directory();
        PhoneInput::new(db.lookup_by_code("RU"), immortal).with_text(text)
    }

    #[test]
    fn derived_numbers() {
        let input = russian("+7 999 777 33 44", true);
        assert_eq!(input.raw_phone_number(), "+7 999 777 33 44");
        assert_eq!(input.phone_number(), "79997773344");
        assert_eq!(input.phone_number_without_country_code().unwrap(), "9997773344");
        assert_eq!(input.current_dial_code(), "7");
    }

    #[test]
    fn without_code_only_cuts_first_occurrence() {
        let input = russian("+7 +7 12", true);
        assert_eq!(input.phone_number_without_country_code().unwrap(), "712");
    }

    #[test]
    fn without_code_is_unsupported_when_plus_is_mortal() {
        let input = russian("+7 999 777 33 44", false);
        assert!(matches!(
            input.phone_number_without_country_code(),
            Err(PickerError::UnsupportedInCurrentMode(_))
        ));
        assert!(input.formatted().is_err());
        assert_eq!(input.phone_number(), "79997773344");
    }

    #[test]
    fn locale_picks_the_initial_country() {
        let db = directory();
        let options = PickerOptions {
            plus_prefix_immortal: false,
            ..PickerOptions::default()
        };

        let input = PhoneInput::for_locale(&db, &FixedLocale::new(Some("kz")), &options);
        assert_eq!(input.country().code(), "KZ");
        assert!(!input.plus_prefix_immortal());
        assert_eq!(input.raw_phone_number(), "");

        let input = PhoneInput::for_locale(&db, &FixedLocale::new(None), &options);
        assert!(input.country().is_unknown());
    }

    #[test]
    fn typing_first_digit_resolves_country() {
        let db = directory();
        let mut input = PhoneInput::new(&Country::unknown(), true);

        let out = input.on_text_changed("7", &db);
        assert!(out.reset);
        assert!(out.resolved);
        assert!(out.country_changed);
        assert_eq!(out.text, "+7");
        assert_eq!(input.country().code(), "RU");
        assert!(input.has_resolved_country());
    }

    #[test]
    fn unmatched_entry_keeps_previous_country() {
        let db = directory();
        let mut input = PhoneInput::new(&Country::unknown(), true);
        input.on_text_changed("7", &db);

        let out = input.on_text_changed("+79", &db);
        assert!(!out.reset);
        assert!(!out.resolved);
        assert!(!out.country_changed);
        assert_eq!(input.country().code(), "RU");

        let out = input.on_text_changed("+77", &db);
        assert!(out.resolved);
        assert_eq!(input.country().code(), "KZ");
    }

    #[test]
    fn clearing_resets_to_unknown() {
        let db = directory();
        let mut input = PhoneInput::new(db.lookup_by_code("RU"), true);
        let out = input.on_text_changed("", &db);
        assert!(out.reset);
        assert!(!out.resolved);
        assert_eq!(out.text, "+");
        assert!(!input.has_resolved_country());

        let mut input = PhoneInput::new(db.lookup_by_code("RU"), true);
        input.on_text_changed("+", &db);
        assert!(input.country().is_unknown());
    }

    #[test]
    fn immortal_plus_is_forced_to_front() {
        let db = directory();
        let mut input = PhoneInput::new(&Country::unknown(), true);
        assert_eq!(input.on_text_changed("18+76", &db).text, "+1876");
        assert_eq!(input.country().code(), "JM");
        assert_eq!(input.on_text_changed("++1", &db).text, "+1");
        assert_eq!(input.country().code(), "CA");
    }

    #[test]
    fn mortal_plus_leaves_text_alone() {
        let db = directory();
        let mut input = PhoneInput::new(&Country::unknown(), false);
        let out = input.on_text_changed("7", &db);
        assert_eq!(out.text, "7");
        assert_eq!(input.country().code(), "RU");
    }

    #[test]
    fn selected_country_survives_trailing_space() {
        let db = directory();
        let mut input = PhoneInput::new(&Country::unknown(), true);
        input.select_country(db.lookup_by_code("US"));
        assert_eq!(input.raw_phone_number(), "+1 ");

        let out = input.on_text_changed("+1 ", &db);
        assert!(!out.resolved);
        assert_eq!(input.country().code(), "US");
    }

    #[test]
    fn formatting_uses_country_pattern() {
        let input = russian("+7 9997773344", true);
        assert_eq!(input.formatted_national().unwrap(), "999 777-33-44");
        assert_eq!(input.formatted().unwrap(), "+7 999 777-33-44");

        let input = russian("+7", true);
        assert_eq!(input.formatted().unwrap(), "+7");
    }

    #[test]
    fn pattern_application_edges() {
        assert_eq!(apply_format_pattern("", "### ###"), "");
        assert_eq!(apply_format_pattern("123", "### ###"), "123");
        assert_eq!(apply_format_pattern("(12) 3", "### ###"), "123");
        assert_eq!(apply_format_pattern("1234", "(###) ###"), "(123) 4");
    }
}
