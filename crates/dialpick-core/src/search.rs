// crates/dialpick-core/src/search.rs

//! The country picker's sectioned list.
//!
//! Bucket `0` holds the caller's favorites; buckets `1..=N` are the
//! collation sections of the whole directory. A text filter rebuilds the
//! alphabetic buckets from matching names and empties the favorites.

use crate::collation::{partition, Collation};
use crate::directory::Directory;
use crate::model::Country;
use crate::options::PickerOptions;
use crate::traits::{CountryLookup, NameMatch};
use log::trace;

/// Position of a country in the sectioned list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

/// Index of the favorites bucket.
pub const FAVORITES_SECTION: usize = 0;

/// Sectioned, filterable view over a [`Directory`].
///
/// Cheap to clone: buckets hold references into the directory.
#[derive(Clone)]
pub struct SearchIndex<'a> {
    directory: &'a Directory,
    collation: &'a dyn Collation,
    unfiltered: Vec<Vec<&'a Country>>,
    sections: Vec<Vec<&'a Country>>,
    query: String,
    selected: Option<Country>,
    scroll_to_selected: bool,
}

impl<'a> SearchIndex<'a> {
    /// Builds the unfiltered index.
    ///
    /// Favorites are looked up in the given order; duplicates are kept and
    /// unknown codes become the sentinel. Every directory record also
    /// appears in its alphabetic bucket, favorites included.
    ///
    /// ```rust
    /// use dialpick_core::{Directory, LatinCollation, SearchIndex};
    ///
    /// let db = Directory::load().unwrap();
    /// let collation = LatinCollation::default();
    /// let index = SearchIndex::build(&db, &["RU", "JM"], &collation);
    ///
    /// let favorites: Vec<_> = index.section(0).iter().map(|c| c.code()).collect();
    /// assert_eq!(favorites, ["RU", "JM"]);
    /// ```
    pub fn build<S: AsRef<str>>(
        directory: &'a Directory,
        favorites: &[S],
        collation: &'a dyn Collation,
    ) -> Self {
        let mut unfiltered = Vec::with_capacity(collation.section_titles().len() + 1);
        unfiltered.push(directory.lookup_many_by_code(favorites));
        unfiltered.extend(partition(directory.countries(), collation));

        SearchIndex {
            directory,
            collation,
            sections: unfiltered.clone(),
            unfiltered,
            query: String::new(),
            selected: None,
            scroll_to_selected: true,
        }
    }

    /// Builds the index with favorites and the scroll policy from `options`.
    pub fn with_options(
        directory: &'a Directory,
        options: &PickerOptions,
        collation: &'a dyn Collation,
    ) -> Self {
        let mut index = Self::build(directory, &options.favorites, collation);
        index.scroll_to_selected = options.scroll_to_selected;
        index
    }

    /// Returns a copy of this index filtered by `query`.
    ///
    /// An empty query gives back the unfiltered buckets. Otherwise the
    /// favorites bucket is empty and the alphabetic buckets hold only the
    /// countries whose name contains `query` (case-sensitive substring).
    pub fn filter(&self, query: &str) -> SearchIndex<'a> {
        let mut next = self.clone();
        next.set_query(query);
        next
    }

    /// Filters in place; see [`SearchIndex::filter`].
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.sections = self.filtered_sections();
        trace!(
            "query {:?}: {} countries shown",
            self.query,
            self.sections.iter().map(Vec::len).sum::<usize>()
        );
    }

    /// Drops the filter.
    pub fn clear_query(&mut self) {
        self.set_query("");
    }

    /// Replaces the favorites and rebuilds the buckets.
    pub fn set_favorites<S: AsRef<str>>(&mut self, favorites: &[S]) {
        self.unfiltered[FAVORITES_SECTION] = self.directory.lookup_many_by_code(favorites);
        self.sections = self.filtered_sections();
    }

    fn filtered_sections(&self) -> Vec<Vec<&'a Country>> {
        if self.query.is_empty() {
            return self.unfiltered.clone();
        }
        let hits = self
            .directory
            .countries()
            .iter()
            .filter(|c| c.name_contains(&self.query));

        let mut sections = Vec::with_capacity(self.unfiltered.len());
        sections.push(Vec::new());
        sections.extend(partition(hits, self.collation));
        sections
    }

    /// Current buckets (favorites first).
    pub fn sections(&self) -> &[Vec<&'a Country>] {
        &self.sections
    }

    /// One bucket; empty if `section` is out of range.
    pub fn section(&self, section: usize) -> &[&'a Country] {
        self.sections.get(section).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn row_count(&self, section: usize) -> usize {
        self.section(section).len()
    }

    pub fn country_at(&self, path: IndexPath) -> Option<&'a Country> {
        self.sections.get(path.section)?.get(path.row).copied()
    }

    /// Number of countries currently shown, favorites included.
    pub fn len(&self) -> usize {
        self.sections.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_filtering(&self) -> bool {
        !self.query.is_empty()
    }

    /// Header for a bucket: `None` when it is empty, `""` for favorites,
    /// otherwise the collation title.
    pub fn section_title(&self, section: usize) -> Option<&str> {
        if self.section(section).is_empty() {
            return None;
        }
        if section == FAVORITES_SECTION {
            return Some("");
        }
        self.collation
            .section_titles()
            .get(section - 1)
            .map(String::as_str)
    }

    /// Titles for a side index; hidden while a filter is active.
    pub fn section_index_titles(&self) -> Option<&[String]> {
        if self.is_filtering() {
            None
        } else {
            Some(self.collation.section_titles())
        }
    }

    /// Bucket that a side-index title jumps to.
    pub fn section_for_index_title(&self, title_index: usize) -> usize {
        title_index + 1
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    pub fn select(&mut self, country: Option<&Country>) {
        self.selected = country.cloned();
    }

    pub fn selected(&self) -> Option<&Country> {
        self.selected.as_ref()
    }

    /// Whether `country` is the selected one (checkmark in the list).
    pub fn is_selected(&self, country: &Country) -> bool {
        self.selected.as_ref() == Some(country)
    }

    pub fn scroll_to_selected(&self) -> bool {
        self.scroll_to_selected
    }

    pub fn set_scroll_to_selected(&mut self, on: bool) {
        self.scroll_to_selected = on;
    }

    /// First position of `country` in the current buckets.
    pub fn position_of(&self, country: &Country) -> Option<IndexPath> {
        find_in(&self.sections, country)
    }

    /// Where the list should scroll when it opens: the first position of the
    /// selected country in the unfiltered buckets. `None` if nothing is
    /// selected or the scroll policy is off.
    pub fn scroll_target(&self) -> Option<IndexPath> {
        if !self.scroll_to_selected {
            return None;
        }
        find_in(&self.unfiltered, self.selected.as_ref()?)
    }
}

fn find_in(sections: &[Vec<&Country>], country: &Country) -> Option<IndexPath> {
    sections.iter().enumerate().find_map(|(section, rows)| {
        rows.iter()
            .position(|c| *c == country)
            .map(|row| IndexPath { section, row })
    })
}

impl std::fmt::Debug for SearchIndex<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchIndex")
            .field("query", &self.query)
            .field("sections", &self.sections.iter().map(Vec::len).collect::<Vec<_>>())
            .field("selected", &self.selected.as_ref().map(Country::code))
            .field("scroll_to_selected", &self.scroll_to_selected)
            .finish()
    }
}
