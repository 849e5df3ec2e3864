//! Roster dataset records.
//!
//! # Responsibility
//! - Define the plain records shared by the load collaborator and the view
//!   layer: `Team`, `Member`, `Assignment`, `Roster` and the `RosterData`
//!   aggregate.
//!
//! # Invariants
//! - Equality for `Team` and `Member` is by `id`; two records with the same
//!   id denote the same entity regardless of display fields.
//! - `Roster.date` is compared as an opaque string, never parsed for
//!   resolution purposes.
//! - Cross-record references (`team_id`, `member_id`) may dangle; consumers
//!   must treat unresolved lookups as "no value", not as errors.

use serde::{Deserialize, Serialize};

/// A team that assignments are grouped under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Stable team id referenced by members and assignments.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Team {}

/// A person who can appear in roster assignments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Stable member id referenced by assignments.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Home team reference. Projection trusts the assignment's own team id,
    /// so this may legitimately differ from where the member is rostered.
    pub team_id: String,
    /// Ordered role labels; may be empty.
    #[serde(default)]
    pub roles: Vec<String>,
    /// IANA timezone identifier, e.g. `America/New_York`. Not validated at
    /// load time; the localizer degrades gracefully on unknown zones.
    pub timezone: String,
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Member {}

/// A single (team, member, shift interval) entry within a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Team the row is displayed under.
    pub team_id: String,
    /// Member reference; may dangle.
    pub member_id: String,
    /// Shift interval text, nominally `"HH:MM-HH:MM"` in the member's local
    /// wall-clock time. Never trusted to be well-formed.
    pub shift: String,
}

/// All assignments for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Calendar date string, `"YYYY-MM-DD"`. Matched by string equality.
    pub date: String,
    /// Assignments in display order; duplicates are preserved.
    pub assignments: Vec<Assignment>,
}

/// Root aggregate handed to the core as a read-only snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterData {
    pub teams: Vec<Team>,
    pub members: Vec<Member>,
    pub rosters: Vec<Roster>,
}
