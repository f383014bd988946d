//! Domain model for portfolio project listings.
//!
//! # Responsibility
//! - Define the canonical normalized record produced by the catalog loader.
//! - Keep one record shape shared by the index and grid page surfaces.
//!
//! # Invariants
//! - Records are immutable once constructed; rendering never mutates them.
//! - Collection membership is represented as a duplicate-free set.

pub mod project;
