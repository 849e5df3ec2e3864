//! Daily roster viewer CLI.
//!
//! # Responsibility
//! - Own the selection state (date, simulated role), load the dataset, and
//!   render per-team tables via `dayroster_core` projections.
//! - Keep all resolution and localization logic in the core crate.
//!
//! # Invariants
//! - The simulated role is echoed in the header only; it never filters
//!   what is displayed.
//! - Only dataset load failures exit non-zero; an empty day renders a
//!   placeholder and exits zero.

use dayroster_core::{
    init_logging, load_dataset, project_day, resolve_roster, AVAILABLE_ROLES,
};
use log::info;
use std::process::ExitCode;

const USAGE: &str = "usage: dayroster <roster-data.json> [--date YYYY-MM-DD] [--role ROLE] [--log-dir DIR]";

#[derive(Debug)]
struct Selection {
    data_path: String,
    date: String,
    role: String,
    log_dir: Option<String>,
}

fn main() -> ExitCode {
    let selection = match parse_args(std::env::args().skip(1)) {
        Ok(selection) => selection,
        Err(message) => {
            if message == USAGE {
                println!("{USAGE}");
                return ExitCode::SUCCESS;
            }
            eprintln!("{message}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(log_dir) = &selection.log_dir {
        if let Err(err) = init_logging(dayroster_core::default_log_level(), log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let data = match load_dataset(&selection.data_path) {
        Ok(data) => data,
        Err(err) => {
            // The one outward-facing failure: without a dataset there is
            // nothing to resolve.
            eprintln!("Failed to load roster data: {err}");
            return ExitCode::FAILURE;
        }
    };

    info!(
        "event=render_day module=cli status=start date={} role={}",
        selection.date, selection.role
    );

    println!(
        "Daily Roster for {} (simulated role: {})",
        selection.date, selection.role
    );
    println!();

    if resolve_roster(&data, &selection.date).is_none() {
        println!("No data available");
        return ExitCode::SUCCESS;
    }

    for team in project_day(&data, &selection.date) {
        println!("== {} ==", team.team_name);
        if team.rows.is_empty() {
            println!("  No assignments for this team on this day.");
        }
        for row in &team.rows {
            println!(
                "  {:<20} {:<40} {}",
                row.member_name, row.formatted_shift, row.roles_text
            );
        }
        println!();
    }

    ExitCode::SUCCESS
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Selection, String> {
    let mut data_path = None;
    let mut date = None;
    let mut role = None;
    let mut log_dir = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--date" => date = Some(required_value(&arg, args.next())?),
            "--role" => role = Some(required_value(&arg, args.next())?),
            "--log-dir" => log_dir = Some(required_value(&arg, args.next())?),
            "--help" | "-h" => return Err(USAGE.to_string()),
            other if other.starts_with("--") => {
                return Err(format!("unknown option `{other}`"));
            }
            _ if data_path.is_none() => data_path = Some(arg),
            other => return Err(format!("unexpected argument `{other}`")),
        }
    }

    let role = role.unwrap_or_else(|| AVAILABLE_ROLES[0].to_string());
    if !AVAILABLE_ROLES.contains(&role.as_str()) {
        return Err(format!(
            "unknown role `{role}`; expected one of {}",
            AVAILABLE_ROLES.join("|")
        ));
    }

    Ok(Selection {
        data_path: data_path.ok_or_else(|| "missing roster data path".to_string())?,
        date: date.unwrap_or_else(today),
        role,
        log_dir,
    })
}

fn required_value(option: &str, value: Option<String>) -> Result<String, String> {
    value.ok_or_else(|| format!("option `{option}` requires a value"))
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
