//! Data access for Labelwise.
//!
//! Responsibilities:
//! - Decode Open Food Facts product and search responses into
//!   [`ProductFacts`](labelwise_core::ProductFacts).
//! - Provide a file-backed [`ProductSource`](labelwise_core::ProductSource).
//! - Load preference profiles and curated alternative lists saved as JSON.
//!
//! Boundaries:
//! - Do not encode scoring or matching rules (live in `labelwise-scorer`).
//! - No network access; callers fetch responses and hand them over.
//!
//! Invariants:
//! - Files are opened through `cap-std` with UTF-8 `camino` paths.
//! - No global mutable state.

#![forbid(unsafe_code)]

mod directory;
mod error;
pub mod fs;
mod load;
mod off;

pub use directory::JsonDirectorySource;
pub use error::DataError;
pub use load::{
    load_curated_alternatives, load_preferences, load_product, load_search_results,
};
pub use off::{OffProduct, OffProductResponse, OffSearchResponse, STATUS_FOUND};
