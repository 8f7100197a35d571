// crates/dialpick-core/src/collation.rs

//! # Collation collaborator
//!
//! Sectioning and ordering of display names is locale behaviour. The search
//! index only relies on the [`Collation`] contract; [`LatinCollation`] is the
//! bundled implementation for Latin-script names.

use crate::model::Country;
use crate::text::fold_key;
use std::cmp::Ordering;

/// Splits names into alphabetic sections and orders them.
///
/// Implementations must return at least one section title, and
/// [`Collation::section_for`] must return an index below
/// `section_titles().len()` (out-of-range indices land in the last section).
pub trait Collation: Send + Sync {
    /// Titles of the sections, in display order (e.g. `A`..`Z`, `#`).
    fn section_titles(&self) -> &[String];

    /// The section a name belongs to.
    fn section_for(&self, name: &str) -> usize;

    /// Ordering of two names inside a section.
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Title of the catch-all section.
pub const CATCH_ALL_TITLE: &str = "#";

/// `A`..`Z` plus a trailing `#` catch-all.
///
/// Names are keyed on their [`fold_key`] transliteration, so `Åland` files
/// under `A` and `Réunion` sorts as `reunion`. Names that do not start with a
/// Latin letter after transliteration (including empty names) go to `#`.
#[derive(Clone, Debug)]
pub struct LatinCollation {
    titles: Vec<String>,
}

impl Default for LatinCollation {
    fn default() -> Self {
        let mut titles: Vec<String> = ('A'..='Z').map(String::from).collect();
        titles.push(CATCH_ALL_TITLE.to_string());
        LatinCollation { titles }
    }
}

impl Collation for LatinCollation {
    fn section_titles(&self) -> &[String] {
        &self.titles
    }

    fn section_for(&self, name: &str) -> usize {
        let catch_all = self.titles.len() - 1;
        match fold_key(name.trim_start()).chars().next() {
            Some(c) if c.is_ascii_lowercase() => (c as u8 - b'a') as usize,
            _ => catch_all,
        }
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        fold_key(a).cmp(&fold_key(b)).then_with(|| a.cmp(b))
    }
}

/// Partitions `records` into the collation's sections by display name and
/// sorts each section.
///
/// Always returns `section_titles().len()` buckets (possibly empty), so
/// bucket `i` lines up with title `i`.
pub fn partition<'a, I>(records: I, collation: &dyn Collation) -> Vec<Vec<&'a Country>>
where
    I: IntoIterator<Item = &'a Country>,
{
    let count = collation.section_titles().len().max(1);
    let mut sections: Vec<Vec<&'a Country>> = vec![Vec::new(); count];

    for country in records {
        let idx = collation.section_for(country.name()).min(count - 1);
        sections[idx].push(country);
    }

    for section in &mut sections {
        section.sort_by(|a, b| collation.compare(a.name(), b.name()));
    }
    sections
}
