//! Domain model for teams, members and per-date rosters.
//!
//! # Responsibility
//! - Define canonical data structures used by roster resolution and
//!   projection.
//! - Keep one immutable snapshot shape shared by load, view and display
//!   layers.
//!
//! # Invariants
//! - `Team` and `Member` identity is carried by the `id` field.
//! - The aggregate is loaded once; no model type exposes mutation helpers.

pub mod roster;
