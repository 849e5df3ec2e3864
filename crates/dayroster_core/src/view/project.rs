//! Assignment projection into display rows.
//!
//! # Responsibility
//! - Partition a resolved roster's assignments by team and resolve each
//!   assignment's member into a renderable row.
//!
//! # Invariants
//! - Assignment order and duplicates are preserved exactly as rostered.
//! - Grouping trusts the assignment's own `team_id`, not the resolved
//!   member's home team.
//! - A dangling `member_id` produces a placeholder row (blank name,
//!   `"No role"`, shift localized against `"UTC"`), never an error.

use crate::model::roster::{Assignment, Member, Roster, RosterData};
use crate::shift::localize::localize;
use crate::view::resolve::resolve_roster;

/// Timezone used when an assignment's member cannot be resolved.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Roles column fallback for members with no roles or unresolved members.
pub const NO_ROLE_TEXT: &str = "No role";

/// One rendered table row for a (team, date) view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    /// Resolved member name, or blank when the reference dangles.
    pub member_name: String,
    /// Localized shift range or the fallback shift text.
    pub formatted_shift: String,
    /// Comma-joined roles, or [`NO_ROLE_TEXT`].
    pub roles_text: String,
}

/// All rows for one team on the selected date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRoster {
    pub team_id: String,
    pub team_name: String,
    pub rows: Vec<RosterRow>,
}

/// Returns the roster's assignments for `team_id`, in rostered order.
///
/// `None` roster (no data, or no roster for the date) yields an empty list.
/// Duplicate assignments are deliberately kept as separate entries.
pub fn assignments_for_team<'a>(
    roster: Option<&'a Roster>,
    team_id: &str,
) -> Vec<&'a Assignment> {
    roster
        .map(|roster| {
            roster
                .assignments
                .iter()
                .filter(|assignment| assignment.team_id == team_id)
                .collect()
        })
        .unwrap_or_default()
}

/// Linear member lookup by id; `None` on a dangling reference.
pub fn member_by_id<'a>(members: &'a [Member], id: &str) -> Option<&'a Member> {
    members.iter().find(|member| member.id == id)
}

/// Projects one team's assignments on `date` into display rows.
///
/// `roster` is the already-resolved roster for `date` so a full-day render
/// resolves once and projects per team.
pub fn rows_for_team(
    data: &RosterData,
    roster: Option<&Roster>,
    team_id: &str,
    date: &str,
) -> Vec<RosterRow> {
    assignments_for_team(roster, team_id)
        .into_iter()
        .map(|assignment| project_row(&data.members, assignment, date))
        .collect()
}

/// Resolves the roster for `date` and projects every dataset team, in
/// dataset order. Teams without assignments get an empty row list.
pub fn project_day(data: &RosterData, date: &str) -> Vec<TeamRoster> {
    let roster = resolve_roster(data, date);
    data.teams
        .iter()
        .map(|team| TeamRoster {
            team_id: team.id.clone(),
            team_name: team.name.clone(),
            rows: rows_for_team(data, roster, &team.id, date),
        })
        .collect()
}

fn project_row(members: &[Member], assignment: &Assignment, date: &str) -> RosterRow {
    let member = member_by_id(members, &assignment.member_id);
    let timezone = member.map_or(DEFAULT_TIMEZONE, |member| member.timezone.as_str());
    let roles_text = match member {
        Some(member) if !member.roles.is_empty() => member.roles.join(", "),
        _ => NO_ROLE_TEXT.to_string(),
    };

    RosterRow {
        member_name: member.map_or_else(String::new, |member| member.name.clone()),
        formatted_shift: localize(&assignment.shift, timezone, date).into_text(),
        roles_text,
    }
}
