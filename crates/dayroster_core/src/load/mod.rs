//! Roster dataset loading.
//!
//! # Responsibility
//! - Read and parse the roster JSON document into a [`RosterData`]
//!   snapshot for the view layer.
//!
//! # Invariants
//! - Load failure is the only error that propagates out of this crate; once
//!   a snapshot exists, every downstream operation is total.
//! - Loading never mutates or merges; each call produces a fresh snapshot.

use crate::model::roster::RosterData;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Instant;

pub type LoadResult<T> = Result<T, LoadError>;

/// Error for dataset read and parse failures.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read roster data: {err}"),
            Self::Parse(err) => write!(f, "failed to parse roster data: {err}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Loads a roster dataset from a JSON file.
///
/// # Side effects
/// - Reads the file at `path`.
/// - Emits `dataset_load` logging events with duration and status.
pub fn load_dataset(path: impl AsRef<Path>) -> LoadResult<RosterData> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!(
        "event=dataset_load module=load status=start path={}",
        path.display()
    );

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            error!(
                "event=dataset_load module=load status=error duration_ms={} error_code=read_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match parse_dataset(&raw) {
        Ok(data) => {
            info!(
                "event=dataset_load module=load status=ok duration_ms={} teams={} members={} rosters={}",
                started_at.elapsed().as_millis(),
                data.teams.len(),
                data.members.len(),
                data.rosters.len()
            );
            Ok(data)
        }
        Err(err) => {
            error!(
                "event=dataset_load module=load status=error duration_ms={} error_code=parse_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Parses a roster dataset from raw JSON text.
pub fn parse_dataset(raw: &str) -> LoadResult<RosterData> {
    Ok(serde_json::from_str(raw)?)
}
