// crates/dialpick-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (embedded bytes, files, decompression) and
//! delegates record conversion to [`Directory::from_raw`].

use crate::directory::Directory;
use crate::error::Result;
use crate::locale::{Localizer, SystemLocale};
use crate::raw::CountryCodesRaw;
use log::debug;
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

mod common_io;

/// The dataset compiled into the crate.
pub const BUNDLED_DATASET: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/country_codes.json"
));

// Published at most once per process, whichever thread gets there first.
static SHARED_DIRECTORY: OnceCell<Arc<Directory>> = OnceCell::new();

impl Directory {
    /// Loads the bundled dataset, naming countries through the
    /// [`SystemLocale`].
    ///
    /// ```rust
    /// use dialpick_core::{CountryLookup, Directory};
    ///
    /// let db = Directory::load().unwrap();
    /// assert_eq!(db.lookup_by_dial_prefix("+7").code(), "RU");
    /// ```
    pub fn load() -> Result<Self> {
        Self::load_with(&SystemLocale)
    }

    /// Loads the bundled dataset with display names from `locale`.
    pub fn load_with(locale: &dyn Localizer) -> Result<Self> {
        Self::from_json_str(BUNDLED_DATASET, locale)
    }

    /// A process-wide directory built from the bundled dataset.
    ///
    /// Initialization runs once even under concurrent first access; later
    /// calls hand out the same `Arc`. Prefer passing a `Directory` around
    /// explicitly; this exists for application roots that want one default.
    pub fn shared() -> Result<Arc<Self>> {
        SHARED_DIRECTORY
            .get_or_try_init(|| Self::load().map(Arc::new))
            .cloned()
    }

    /// Parses a dataset held in memory.
    pub fn from_json_str(json: &str, locale: &dyn Localizer) -> Result<Self> {
        let raw: CountryCodesRaw = serde_json::from_str(json)?;
        Self::from_raw(raw, locale)
    }

    /// Parses a dataset from any reader.
    pub fn from_reader<R: Read>(reader: R, locale: &dyn Localizer) -> Result<Self> {
        let raw: CountryCodesRaw = serde_json::from_reader(reader)?;
        Self::from_raw(raw, locale)
    }

    /// **Custom dataset:** loads a JSON file from disk.
    ///
    /// With the `compact` feature, files ending in `.gz` are decompressed.
    pub fn load_from_path(path: impl AsRef<Path>, locale: &dyn Localizer) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading country dataset from {}", path.display());
        let reader = common_io::open_stream(path)?;
        Self::from_reader(reader, locale)
    }
}
