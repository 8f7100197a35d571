// crates/dialpick-core/src/traits.rs
use crate::error::{PickerError, Result};
use crate::model::{Country, UNKNOWN_COUNTRY};
use crate::text::cut_pluses;

/// Lookup operations over an ordered set of countries.
///
/// Implementors only provide [`CountryLookup::countries`]; every lookup is a
/// linear scan in insertion order, which is fast for the few hundred records
/// a dataset holds and gives the dial-prefix tie-break its meaning: the
/// first record wins.
///
/// Two flavours exist side by side:
/// - `find_*` return `Option` and let callers tell "no such country" apart;
/// - `lookup_*` substitute [`UNKNOWN_COUNTRY`] for a miss.
pub trait CountryLookup {
    /// All records, in insertion order.
    fn countries(&self) -> &[Country];

    /// Case-insensitive exact match on the region code.
    fn find_by_code(&self, code: &str) -> Option<&Country> {
        if code.is_empty() {
            return None;
        }
        self.countries().iter().find(|c| c.has_code(code))
    }

    /// Exact match on the dial prefix after removing every `+`. Whitespace
    /// is not ignored: `"+1 876"` misses, `"+1876"` hits.
    ///
    /// When several countries share a prefix (e.g. `+1`), the first one in
    /// insertion order is returned.
    fn find_by_dial_prefix(&self, prefix: &str) -> Option<&Country> {
        let prefix = cut_pluses(prefix);
        if prefix.is_empty() {
            return None;
        }
        self.countries().iter().find(|c| c.dial_prefix() == prefix)
    }

    /// Every country whose dial prefix equals `prefix`, in insertion order.
    fn find_all_by_dial_prefix(&self, prefix: &str) -> Vec<&Country> {
        let prefix = cut_pluses(prefix);
        if prefix.is_empty() {
            return Vec::new();
        }
        self.countries()
            .iter()
            .filter(|c| c.dial_prefix() == prefix)
            .collect()
    }

    /// Like [`CountryLookup::find_by_code`], but a miss is an error.
    fn require_by_code(&self, code: &str) -> Result<&Country> {
        self.find_by_code(code)
            .ok_or_else(|| PickerError::NotFound(format!("country code `{code}`")))
    }

    /// Case-insensitive code lookup; a miss yields [`UNKNOWN_COUNTRY`].
    fn lookup_by_code(&self, code: &str) -> &Country {
        self.find_by_code(code).unwrap_or(&*UNKNOWN_COUNTRY)
    }

    /// Dial-prefix lookup (`"+7"` and `"7"` are the same); a miss yields
    /// [`UNKNOWN_COUNTRY`].
    fn lookup_by_dial_prefix(&self, prefix: &str) -> &Country {
        self.find_by_dial_prefix(prefix).unwrap_or(&*UNKNOWN_COUNTRY)
    }

    /// Maps each code through [`CountryLookup::lookup_by_code`], keeping
    /// order and duplicates.
    fn lookup_many_by_code<S: AsRef<str>>(&self, codes: &[S]) -> Vec<&Country> {
        codes
            .iter()
            .map(|code| self.lookup_by_code(code.as_ref()))
            .collect()
    }
}

/// Name-based matching for types that expose a display name.
///
/// # Examples
/// ```rust
/// use dialpick_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("France").name_contains("Fra"));
/// assert!(!Place("France").name_contains("fra"));
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    /// Case-sensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        self.name_str().contains(q)
    }
}

impl NameMatch for Country {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}
