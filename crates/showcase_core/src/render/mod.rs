//! Template binding and list rendering.
//!
//! # Responsibility
//! - Describe page templates as named slots instead of live markup, keeping
//!   core host-agnostic.
//! - Populate one fragment per record and replace a mount's items in
//!   deterministic order.
//!
//! # Invariants
//! - A mount without a template makes rendering explicitly not applicable,
//!   never an error.
//! - Per-slot binding is independent: an undeclared slot is skipped without
//!   blocking other slots or records.

pub mod binder;
pub mod renderer;
pub mod template;
