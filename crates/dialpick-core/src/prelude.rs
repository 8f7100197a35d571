//! dialpick prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::collation::{Collation, LatinCollation};
pub use crate::directory::Directory;
pub use crate::error::{PickerError, Result};
pub use crate::locale::{FixedLocale, Localizer, SystemLocale};
pub use crate::model::{Country, UNKNOWN_COUNTRY};
pub use crate::options::PickerOptions;
pub use crate::phone::{EditOutcome, PhoneInput};
pub use crate::search::{IndexPath, SearchIndex};
pub use crate::traits::{CountryLookup, NameMatch};
