//! dialpick-cli
//! ============
//!
//! Command-line interface for the `dialpick-core` country directory.
//!
//! This crate primarily provides a binary (`dialpick`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Basic usage:
//!
//! ```text
//! dialpick --help
//! dialpick stats
//! dialpick country ru
//! dialpick dial +1
//! dialpick normalize "+7 999 777 33 44"
//! dialpick sections --favorites RU,JM --query Fra
//! ```
//!
//! For programmatic access use the `dialpick-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
