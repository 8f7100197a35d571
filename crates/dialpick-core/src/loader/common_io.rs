// crates/dialpick-core/src/loader/common_io.rs
use crate::error::{PickerError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a dataset file, buffers it, and wraps it in a Gzip decoder when the
/// name ends in `.gz`. Returns a generic reader so the caller doesn't care
/// about the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        PickerError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(PickerError::Config(format!(
                "{} is gzip-compressed; enable the `compact` feature",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_gzip_by_extension() {
        assert!(is_gzip(Path::new("codes.json.gz")));
        assert!(is_gzip(Path::new("CODES.JSON.GZ")));
        assert!(!is_gzip(Path::new("codes.json")));
        assert!(!is_gzip(Path::new("gz")));
    }
}
