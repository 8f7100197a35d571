// crates/dialpick-core/src/raw.rs
use serde::Deserialize;

/// One record of the country-code dataset, as it comes from JSON:
///
/// ```json
/// {"name": "Russia", "dial_code": "+7", "code": "RU", "format": "### ###-##-##"}
/// ```
///
/// Required fields are optional here so the loader can report *which* record
/// is broken instead of a bare serde message.
#[derive(Debug, Deserialize)]
pub struct CountryCodeRaw {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub dial_code: Option<String>,
    /// Bundled English name, used when the locale has no translation.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
}

pub type CountryCodesRaw = Vec<CountryCodeRaw>;
