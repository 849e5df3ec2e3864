//! Roster resolution by selected date.

use crate::model::roster::{Roster, RosterData};

/// Returns the first roster whose date exactly matches `date`.
///
/// Dates are compared as opaque strings: `"2024-01-02"` and `"2024-1-2"`
/// are distinct values. `None` means "no roster for this date" and is a
/// valid, non-error state.
///
/// Pure function of `(data, date)`; safe to re-invoke on every date change.
pub fn resolve_roster<'a>(data: &'a RosterData, date: &str) -> Option<&'a Roster> {
    data.rosters.iter().find(|roster| roster.date == date)
}
