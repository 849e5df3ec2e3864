//! Shift interval parsing and timezone localization.
//!
//! # Responsibility
//! - Turn `"HH:MM-HH:MM"` interval text plus an IANA timezone into a
//!   human-readable localized time range.
//!
//! # Invariants
//! - Localization is total: malformed input degrades to a fallback display
//!   string and is never surfaced as an error.

pub mod localize;
