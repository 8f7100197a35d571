// crates/dialpick-core/src/text.rs

//! Small string helpers shared by the directory, the normalizer and the
//! search index.

/// Convert a string into a folded key suitable for collation and loose
/// comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Åland` -> `Aland`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use dialpick_core::text::fold_key;
///
/// assert_eq!(fold_key("Côte d'Ivoire"), "cote d'ivoire");
/// assert_eq!(fold_key("Réunion"), "reunion");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Removes every `+` character.
pub fn cut_pluses(s: &str) -> String {
    s.replace('+', "")
}

/// Removes every space character.
pub fn cut_spaces(s: &str) -> String {
    s.replace(' ', "")
}

/// Normalizes a dial code from the dataset or user input into the stored
/// form: no `+`, no whitespace (`"+1 684"` -> `"1684"`).
pub fn normalize_dial_prefix(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '+' && !c.is_whitespace())
        .collect()
}
