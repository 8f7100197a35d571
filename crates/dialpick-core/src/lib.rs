// crates/dialpick-core/src/lib.rs

//! # dialpick-core
//!
//! The logic behind an international phone-number input with a country
//! picker, independent of any UI toolkit:
//!
//! - [`Directory`]: the country catalog (code, dial prefix, name), loaded
//!   once from a bundled dataset, with lookups from [`CountryLookup`];
//! - [`PhoneInput`]: the input's text and associated country, derived
//!   numbers and the per-keystroke editing reaction;
//! - [`SearchIndex`]: favorites plus alphabetic sections, filtering and
//!   selection tracking for the picker list.
//!
//! ```rust
//! use dialpick_core::prelude::*;
//!
//! let db = Directory::load().unwrap();
//! let mut input = PhoneInput::new(&UNKNOWN_COUNTRY, true);
//! input.on_text_changed("7", &db);
//! assert_eq!(input.country().code(), "RU");
//! assert_eq!(input.raw_phone_number(), "+7");
//! ```

pub mod collation;
pub mod common;
pub mod directory;
pub mod error;
pub mod loader;
pub mod locale;
pub mod model;
pub mod options;
pub mod phone;
pub mod prelude;
pub mod search;
pub mod text;
pub mod traits;
// Raw dataset records (used by the loader)
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::collation::{Collation, LatinCollation};
pub use crate::common::DirectoryStats;
pub use crate::directory::Directory;
pub use crate::error::{PickerError, Result};
pub use crate::loader::BUNDLED_DATASET;
pub use crate::locale::{FixedLocale, Localizer, SystemLocale};
pub use crate::model::{Country, DEFAULT_FORMAT_PATTERN, UNKNOWN_CODE, UNKNOWN_COUNTRY};
pub use crate::options::PickerOptions;
pub use crate::phone::{EditOutcome, PhoneInput};
pub use crate::search::{IndexPath, SearchIndex};
pub use crate::traits::{CountryLookup, NameMatch};
