//! Shift interval localizer.
//!
//! # Responsibility
//! - Parse `"<start>-<end>"` shift text where both bounds are `"HH:MM"`
//!   24-hour wall-clock times, anchor them to a reference date in an IANA
//!   timezone, and render the localized display range.
//!
//! # Invariants
//! - [`localize`] never panics and never returns an error; every failure
//!   mode yields [`ShiftDisplay::Fallback`] carrying the original text.
//! - An end bound of exactly `"00:00"` denotes midnight closing the shift
//!   and lands on the following calendar day. No other end-before-start
//!   interval is adjusted; such intervals render as given.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;
use std::fmt::{Display, Formatter};

const TIME_FORMAT: &str = "%H:%M";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Outcome of shift localization.
///
/// Both variants carry ready-to-render text; the tag records whether the
/// interval was understood or passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftDisplay {
    /// The interval parsed and both bounds resolved in the timezone.
    Localized(String),
    /// The interval (or zone, or date) could not be interpreted; the text is
    /// `"<original shift> (<timezone>)"`.
    Fallback(String),
}

impl ShiftDisplay {
    /// Returns the display text regardless of variant.
    pub fn text(&self) -> &str {
        match self {
            Self::Localized(text) | Self::Fallback(text) => text,
        }
    }

    /// Consumes the result and returns the display text.
    pub fn into_text(self) -> String {
        match self {
            Self::Localized(text) | Self::Fallback(text) => text,
        }
    }

    /// Returns whether localization fell back to the original shift text.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

impl Display for ShiftDisplay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// Localizes a shift interval for display.
///
/// `shift` is expected as `"HH:MM-HH:MM"` wall-clock bounds on the calendar
/// day `reference_date` (`"YYYY-MM-DD"`) within `timezone`. On success the
/// result renders as `"<start> - <end> (<timezone>)"` with both bounds in
/// the zone's local notation.
///
/// # Contract
/// - Total over its input domain: any unparseable shift, unknown timezone,
///   unparseable reference date or nonexistent local time returns
///   `Fallback("<shift> (<timezone>)")` instead of an error.
pub fn localize(shift: &str, timezone: &str, reference_date: &str) -> ShiftDisplay {
    match localized_bounds(shift, timezone, reference_date) {
        Some((start, end)) => ShiftDisplay::Localized(format!(
            "{} - {} ({timezone})",
            start.format(TIME_FORMAT),
            end.format(TIME_FORMAT)
        )),
        None => ShiftDisplay::Fallback(format!("{shift} ({timezone})")),
    }
}

/// Resolves the start and end instants of a shift interval.
///
/// Returns `None` on any parse or zone-resolution failure. Ambiguous local
/// times (DST fold) resolve to the earlier instant; nonexistent local times
/// (DST gap) fail.
fn localized_bounds(
    shift: &str,
    timezone: &str,
    reference_date: &str,
) -> Option<(DateTime<Tz>, DateTime<Tz>)> {
    let (start_token, end_token) = split_interval(shift)?;
    let zone: Tz = timezone.parse().ok()?;
    let date = NaiveDate::parse_from_str(reference_date, DATE_FORMAT).ok()?;
    let start_time = NaiveTime::parse_from_str(start_token, TIME_FORMAT).ok()?;
    let end_time = NaiveTime::parse_from_str(end_token, TIME_FORMAT).ok()?;

    // A literal "00:00" end bound is midnight at the end of the shift, i.e.
    // the start of the next day. This is the only rollover rule; any other
    // end-before-start interval is left as given.
    let end_date = if end_token == "00:00" {
        date.checked_add_days(Days::new(1))?
    } else {
        date
    };

    let start = zone.from_local_datetime(&date.and_time(start_time)).earliest()?;
    let end = zone.from_local_datetime(&end_date.and_time(end_time)).earliest()?;
    Some((start, end))
}

/// Splits shift text on `'-'` into exactly two non-empty bound tokens.
fn split_interval(shift: &str) -> Option<(&str, &str)> {
    let mut parts = shift.split('-');
    let start = parts.next()?;
    let end = parts.next()?;
    if parts.next().is_some() || start.is_empty() || end.is_empty() {
        return None;
    }
    Some((start, end))
}
