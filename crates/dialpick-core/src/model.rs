// crates/dialpick-core/src/model.rs
use crate::text::normalize_dial_prefix;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::hash::{Hash, Hasher};

/// Code carried by the sentinel "unknown" country.
pub const UNKNOWN_CODE: &str = "?";

/// Grouping template used when a country has no format pattern of its own.
///
/// Fifteen placeholders: the longest number E.164 allows.
pub const DEFAULT_FORMAT_PATTERN: &str = "###############";

/// Placeholder character inside a format pattern.
pub const FORMAT_PLACEHOLDER: char = '#';

/// The sentinel returned by every default lookup that misses.
///
/// Code `"?"`, empty dial prefix, empty name. Use
/// [`Country::is_unknown`] to test for it.
pub static UNKNOWN_COUNTRY: Lazy<Country> = Lazy::new(|| Country {
    code: UNKNOWN_CODE.to_string(),
    dial_prefix: String::new(),
    name: String::new(),
    format: None,
});

/// A country entry of the directory.
///
/// Immutable after construction. The region code is stored uppercase and the
/// dial prefix without a leading `+`; use [`Country::dial_code_display`] to
/// render it for people.
///
/// Two countries are equal iff their codes match (ASCII case-insensitive).
#[derive(Clone, Debug, Serialize)]
pub struct Country {
    code: String,
    dial_prefix: String,
    name: String,
    format: Option<String>,
}

impl Country {
    /// Creates a country, normalizing the code to uppercase and the dial
    /// prefix to digits without `+` or whitespace.
    pub fn new(code: &str, dial_prefix: &str, name: impl Into<String>) -> Self {
        Country {
            code: code.trim().to_ascii_uppercase(),
            dial_prefix: normalize_dial_prefix(dial_prefix),
            name: name.into(),
            format: None,
        }
    }

    /// Attaches a `#`-placeholder grouping template (e.g. `"### ###-##-##"`).
    pub fn with_format(mut self, pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        self.format = (!pattern.trim().is_empty()).then_some(pattern);
        self
    }

    /// An owned copy of the sentinel.
    pub fn unknown() -> Self {
        UNKNOWN_COUNTRY.clone()
    }

    /// Region code, uppercase (e.g. `"RU"`).
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Dial prefix without `+` (e.g. `"7"`). Empty for the sentinel.
    pub fn dial_prefix(&self) -> &str {
        &self.dial_prefix
    }

    /// Dial prefix as shown to people (e.g. `"+7"`), or an empty string when
    /// there is none.
    pub fn dial_code_display(&self) -> String {
        if self.dial_prefix.is_empty() {
            String::new()
        } else {
            format!("+{}", self.dial_prefix)
        }
    }

    /// Localized display name; empty if the locale knows none.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The grouping template, or [`DEFAULT_FORMAT_PATTERN`] when the dataset
    /// carries none.
    pub fn format_pattern(&self) -> &str {
        self.format.as_deref().unwrap_or(DEFAULT_FORMAT_PATTERN)
    }

    /// True when the dataset carried an explicit pattern for this country.
    pub fn has_format_pattern(&self) -> bool {
        self.format.is_some()
    }

    /// True for the sentinel (code `"?"`).
    pub fn is_unknown(&self) -> bool {
        self.code == UNKNOWN_CODE
    }

    /// Case-insensitive comparison of the region code.
    #[inline]
    pub fn has_code(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code.trim())
    }
}

impl PartialEq for Country {
    fn eq(&self, other: &Self) -> bool {
        self.code.eq_ignore_ascii_case(&other.code)
    }
}

impl Eq for Country {}

impl Hash for Country {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.code.bytes() {
            state.write_u8(b.to_ascii_uppercase());
        }
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unknown() {
            return f.write_str(UNKNOWN_CODE);
        }
        write!(f, "{} ({}) {}", self.name, self.code, self.dial_code_display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn construction_normalizes_code_and_prefix() {
        let c = Country::new("ru", "+7", "Russia");
        assert_eq!(c.code(), "RU");
        assert_eq!(c.dial_prefix(), "7");
        assert_eq!(c.dial_code_display(), "+7");
    }

    #[test]
    fn equality_is_by_code_only() {
        let a = Country::new("RU", "7", "Russia");
        let b = Country::new("ru", "8", "Russland");
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(!set.insert(b));
    }

    #[test]
    fn sentinel_shape() {
        let u = Country::unknown();
        assert!(u.is_unknown());
        assert_eq!(u.code(), "?");
        assert_eq!(u.dial_prefix(), "");
        assert_eq!(u.name(), "");
        assert_eq!(u.dial_code_display(), "");
        assert_eq!(u, *UNKNOWN_COUNTRY);
    }

    #[test]
    fn format_pattern_defaults_when_absent() {
        let plain = Country::new("JM", "1876", "Jamaica");
        assert_eq!(plain.format_pattern(), DEFAULT_FORMAT_PATTERN);
        assert!(!plain.has_format_pattern());

        let ru = Country::new("RU", "7", "Russia").with_format("### ###-##-##");
        assert_eq!(ru.format_pattern(), "### ###-##-##");

        let blank = Country::new("RU", "7", "Russia").with_format("  ");
        assert!(!blank.has_format_pattern());
    }
}
