// crates/dialpick-core/src/options.rs
use crate::error::{PickerError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Behaviour switches for a phone input and its country picker.
///
/// One explicit value instead of many optional properties set after
/// construction. Every field has a default, so a JSON file only needs the
/// keys it changes:
///
/// ```rust
/// use dialpick_core::PickerOptions;
///
/// let opts: PickerOptions = serde_json::from_str(r#"{"favorites": ["RU", "JM"]}"#).unwrap();
/// assert!(opts.plus_prefix_immortal);
/// assert_eq!(opts.favorites, ["RU", "JM"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerOptions {
    /// Keep exactly one leading `+` in the input; it cannot be deleted.
    pub plus_prefix_immortal: bool,
    /// Bring the selected country into view when the picker opens.
    pub scroll_to_selected: bool,
    /// Region codes pinned to the top of the picker, in this order.
    pub favorites: Vec<String>,
    /// Hide the picker's cancel control.
    pub cancel_button_hidden: bool,
    /// Picker title; `None` leaves the UI default.
    pub title: Option<String>,
}

impl Default for PickerOptions {
    fn default() -> Self {
        PickerOptions {
            plus_prefix_immortal: true,
            scroll_to_selected: true,
            favorites: Vec::new(),
            cancel_button_hidden: false,
            title: None,
        }
    }
}

impl PickerOptions {
    /// Reads options from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            PickerError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&text)
            .map_err(|e| PickerError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn with_favorites<S: AsRef<str>>(mut self, codes: &[S]) -> Self {
        self.favorites = codes.iter().map(|c| c.as_ref().to_string()).collect();
        self
    }
}
