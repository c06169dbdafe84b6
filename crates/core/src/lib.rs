//! Domain building blocks shared by the persistence and HTTP layers.
//!
//! This crate has no I/O: it holds the error vocabulary, shared type aliases,
//! and the field/search rules for entries.

pub mod entry;
pub mod error;
pub mod types;
