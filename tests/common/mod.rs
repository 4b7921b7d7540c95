//! Shared test utilities for cardprep integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

pub mod assertions;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
