//! Use-case services over the catalog and renderer.
//!
//! # Responsibility
//! - Orchestrate load + render into page-level entry points.
//! - Keep host surfaces decoupled from catalog and template details.

pub mod listing_service;
