//! cardprep-core — field normalization for Anki card exports.
//!
//! This crate exposes the pieces of the one-shot rewrite as public modules,
//! plus the shared types used by all of them.
//!
//! # Architecture
//!
//! ```text
//! store::load_records ──► normalizer::normalize ──► store::save_records
//!          │                                              │
//!          └──────────────── config::Config ──────────────┘
//! ```
//!
//! The normalizer never touches the filesystem; `store` owns every file
//! handle and releases it on all exit paths.

pub mod config;
pub mod error;
pub mod normalizer;
pub mod store;
pub mod types;

pub use error::{Error, SchemaViolation};
pub use normalizer::{normalize, Normalized, Normalizer};
pub use types::{NormalizeStats, Record, SeparatorRule};
