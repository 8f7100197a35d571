//! Umbrella crate for the dialpick workspace.
//!
//! Re-exports [`dialpick_core`] so the demos (and quick experiments) can
//! depend on a single crate. See `crates/dialpick-core` for the library and
//! `crates/dialpick-cli` for the command-line front end.

pub use dialpick_core::*;
