// crates/dialpick-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a [`Directory`](crate::Directory).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryStats {
    pub countries: usize,
    /// Number of distinct dial prefixes.
    pub dial_prefixes: usize,
    /// Dial prefixes used by more than one country (e.g. `1`, `7`, `44`).
    pub shared_prefixes: usize,
}
