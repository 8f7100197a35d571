// crates/dialpick-core/src/directory.rs
use crate::common::DirectoryStats;
use crate::error::{PickerError, Result};
use crate::locale::Localizer;
use crate::model::{Country, UNKNOWN_COUNTRY};
use crate::raw::CountryCodeRaw;
use crate::traits::CountryLookup;
use log::{debug, warn};
use std::collections::{HashMap, HashSet};

/// The country catalog.
///
/// Built once from a dataset and immutable afterwards; share it by reference
/// or behind an `Arc`. At most one record exists per region code, and records
/// keep the dataset's order (which decides dial-prefix ties).
///
/// Lookups come from the [`CountryLookup`] trait.
#[derive(Clone, Debug)]
pub struct Directory {
    countries: Vec<Country>,
}

impl Directory {
    /// Builds a directory from already-constructed records.
    ///
    /// Fails with [`PickerError::DuplicateCode`] if two records share a code.
    pub fn from_countries(countries: Vec<Country>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(countries.len());
        for c in &countries {
            if !seen.insert(c.code().to_string()) {
                return Err(PickerError::DuplicateCode(c.code().to_string()));
            }
        }
        let db = Directory { countries };
        db.log_shared_prefixes();
        Ok(db)
    }

    /// **Standard Converter:** raw dataset records -> directory.
    ///
    /// Display names come from `locale`, falling back to the name bundled in
    /// the record. A record without `code` or `dial_code` makes the whole
    /// dataset corrupt.
    pub fn from_raw(raw: Vec<CountryCodeRaw>, locale: &dyn Localizer) -> Result<Self> {
        let mut countries = Vec::with_capacity(raw.len());
        for (index, record) in raw.into_iter().enumerate() {
            let code = record
                .code
                .filter(|c| !c.trim().is_empty())
                .ok_or(PickerError::DatasetCorrupt {
                    index,
                    field: "code",
                })?;
            let dial_code = record.dial_code.ok_or(PickerError::DatasetCorrupt {
                index,
                field: "dial_code",
            })?;

            let name = locale
                .country_name(&code)
                .or(record.name)
                .unwrap_or_default();

            let mut country = Country::new(&code, &dial_code, name);
            if let Some(pattern) = record.format {
                country = country.with_format(pattern);
            }
            countries.push(country);
        }
        debug!("Parsed {} country records", countries.len());
        Self::from_countries(countries)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// The country of the current environment.
    ///
    /// Asks `locale` for the region and looks it up by code; without a region
    /// signal the result is [`UNKNOWN_COUNTRY`].
    pub fn current_country(&self, locale: &dyn Localizer) -> &Country {
        match locale.current_region() {
            Some(region) => self.lookup_by_code(&region),
            None => {
                debug!("No region available from locale; using unknown country");
                &*UNKNOWN_COUNTRY
            }
        }
    }

    /// Aggregate statistics for the directory.
    pub fn stats(&self) -> DirectoryStats {
        let counts = self.prefix_counts();
        DirectoryStats {
            countries: self.countries.len(),
            dial_prefixes: counts.len(),
            shared_prefixes: counts.values().filter(|n| **n > 1).count(),
        }
    }

    fn prefix_counts(&self) -> HashMap<&str, usize> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for c in &self.countries {
            *counts.entry(c.dial_prefix()).or_default() += 1;
        }
        counts
    }

    fn log_shared_prefixes(&self) {
        if !log::log_enabled!(log::Level::Warn) {
            return;
        }
        let mut shared: Vec<_> = self
            .prefix_counts()
            .into_iter()
            .filter(|(_, n)| *n > 1)
            .map(|(p, _)| p)
            .collect();
        shared.sort_unstable();
        for prefix in shared {
            let winner = self.lookup_by_dial_prefix(prefix);
            warn!(
                "Dial prefix +{} is shared by several countries; lookups resolve to {}",
                prefix,
                winner.code()
            );
        }
    }
}

impl CountryLookup for Directory {
    fn countries(&self) -> &[Country] {
        &self.countries
    }
}
