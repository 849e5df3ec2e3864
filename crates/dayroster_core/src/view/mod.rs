//! Roster view layer: date resolution and per-team projection.
//!
//! # Responsibility
//! - Resolve the roster for a selected date and project it into display
//!   rows, one table per team.
//! - Keep selection state (date, simulated role) in the caller; every
//!   function here is a pure projection over the immutable dataset.
//!
//! # Invariants
//! - No function in this layer returns an error: resolution misses and
//!   dangling references degrade to empty/placeholder values.

pub mod project;
pub mod resolve;

/// Roles offered by the simulated-role selector.
///
/// The selected role is display-only. It never gates visibility of any
/// roster data; keeping it inert is intentional, not an oversight.
pub const AVAILABLE_ROLES: [&str; 4] = ["Manager", "Team Leader", "Member", "Administrator"];
