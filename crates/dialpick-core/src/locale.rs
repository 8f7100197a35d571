// crates/dialpick-core/src/locale.rs

//! # Localization collaborator
//!
//! The directory does not know about platform locales. It asks a
//! [`Localizer`] for two things: the display name of a region code, and the
//! region of the current environment.

use std::collections::HashMap;

/// Source of country display names and of the current region.
pub trait Localizer: Send + Sync {
    /// Localized display name for `code`, or `None` if unknown.
    ///
    /// When this returns `None` the directory falls back to the English name
    /// bundled with the dataset.
    fn country_name(&self, code: &str) -> Option<String>;

    /// Region code of the current device/environment (e.g. `"RU"`), or
    /// `None` when no region signal is available.
    fn current_region(&self) -> Option<String>;
}

/// Environment variables consulted by [`SystemLocale`], in priority order.
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Locale derived from the POSIX environment.
///
/// Names come from the bundled dataset; the region is parsed from the first
/// non-empty of `LC_ALL`, `LC_MESSAGES`, `LANG` (e.g. `ru_RU.UTF-8` → `RU`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocale;

impl Localizer for SystemLocale {
    fn country_name(&self, _code: &str) -> Option<String> {
        None
    }

    fn current_region(&self) -> Option<String> {
        LOCALE_ENV_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|v| !v.trim().is_empty())
            .and_then(|v| region_from_locale_id(&v))
    }
}

/// A locale with an explicit region and optional name overrides.
///
/// Handy for tests and for embedders that already know the user's locale.
///
/// ```rust
/// use dialpick_core::locale::{FixedLocale, Localizer};
///
/// let locale = FixedLocale::new(Some("DE")).with_name("DE", "Deutschland");
/// assert_eq!(locale.current_region().as_deref(), Some("DE"));
/// assert_eq!(locale.country_name("de").as_deref(), Some("Deutschland"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixedLocale {
    region: Option<String>,
    names: HashMap<String, String>,
}

impl FixedLocale {
    pub fn new(region: Option<&str>) -> Self {
        FixedLocale {
            region: region.map(|r| r.trim().to_ascii_uppercase()),
            names: HashMap::new(),
        }
    }

    /// Parses a locale identifier such as `fr_CA`, `en-US` or `ru_RU.UTF-8`.
    pub fn from_locale_id(id: &str) -> Self {
        FixedLocale {
            region: region_from_locale_id(id),
            names: HashMap::new(),
        }
    }

    pub fn with_name(mut self, code: &str, name: impl Into<String>) -> Self {
        self.names.insert(code.to_ascii_uppercase(), name.into());
        self
    }
}

impl Localizer for FixedLocale {
    fn country_name(&self, code: &str) -> Option<String> {
        self.names.get(&code.to_ascii_uppercase()).cloned()
    }

    fn current_region(&self) -> Option<String> {
        self.region.clone()
    }
}

/// Extracts the region subtag from a locale identifier.
///
/// `"ru_RU.UTF-8"` → `Some("RU")`, `"en-US"` → `Some("US")`,
/// `"C"`/`"POSIX"`/`"en"` → `None`.
pub fn region_from_locale_id(id: &str) -> Option<String> {
    // Drop the codeset and modifier: "de_DE.UTF-8@euro"
    let id = id.split(['.', '@']).next().unwrap_or("");
    id.split(['_', '-'])
        .skip(1)
        .find(|part| part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()))
        .map(|part| part.to_ascii_uppercase())
}
