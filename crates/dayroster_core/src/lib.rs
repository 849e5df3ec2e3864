//! Core domain logic for the daily roster viewer.
//! This crate is the single source of truth for roster resolution and
//! shift-time localization invariants.

pub mod load;
pub mod logging;
pub mod model;
pub mod shift;
pub mod view;

pub use load::{load_dataset, parse_dataset, LoadError, LoadResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::roster::{Assignment, Member, Roster, RosterData, Team};
pub use shift::localize::{localize, ShiftDisplay};
pub use view::project::{
    assignments_for_team, member_by_id, project_day, rows_for_team, RosterRow, TeamRoster,
    DEFAULT_TIMEZONE, NO_ROLE_TEXT,
};
pub use view::resolve::resolve_roster;
pub use view::AVAILABLE_ROLES;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
