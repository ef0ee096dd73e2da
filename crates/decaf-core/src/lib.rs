//! decaf-core — caffeine sentinel normalizer.
//!
//! This crate loads a drinks document, clears `has_caffeine` on every drink
//! whose `caffeine_content` is the unknown sentinel (`-1`), and writes the
//! document back to where it came from.
//!
//! # Layers
//!
//! ```text
//! store::load ──► normalizer::normalize_document ──► store::save
//!      │                        │
//!      └──── patch::normalize ──┴──► NormalizeReport
//! ```
//!
//! Everything is synchronous and single-pass. The binary crate owns console
//! output and the process exit code; this crate only returns values.

pub mod config;
pub mod error;
pub mod normalizer;
pub mod patch;
pub mod store;
pub mod types;

pub use error::{PatchError, ProcessingError};
pub use normalizer::{normalize_document, NormalizeReport};
pub use patch::{normalize, normalize_with, PatchOptions};
pub use store::WriteMode;
pub use types::BrandId;
