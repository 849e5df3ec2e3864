use dayroster_core::{resolve_roster, Assignment, Roster, RosterData};

fn assignment(team_id: &str, member_id: &str, shift: &str) -> Assignment {
    Assignment {
        team_id: team_id.to_string(),
        member_id: member_id.to_string(),
        shift: shift.to_string(),
    }
}

fn dataset_with_rosters(rosters: Vec<Roster>) -> RosterData {
    RosterData {
        teams: Vec::new(),
        members: Vec::new(),
        rosters,
    }
}

#[test]
fn resolves_roster_by_exact_date_match() {
    let data = dataset_with_rosters(vec![
        Roster {
            date: "2024-06-01".to_string(),
            assignments: vec![assignment("t1", "m1", "09:00-17:00")],
        },
        Roster {
            date: "2024-06-02".to_string(),
            assignments: Vec::new(),
        },
    ]);

    let roster = resolve_roster(&data, "2024-06-02").unwrap();
    assert_eq!(roster.date, "2024-06-02");
}

#[test]
fn returns_none_for_unknown_date() {
    let data = dataset_with_rosters(vec![Roster {
        date: "2024-06-01".to_string(),
        assignments: Vec::new(),
    }]);

    assert!(resolve_roster(&data, "2024-07-01").is_none());
}

#[test]
fn date_comparison_is_opaque_string_equality() {
    // "2024-1-2" and "2024-01-02" are distinct values; no calendar
    // normalization happens during resolution.
    let data = dataset_with_rosters(vec![Roster {
        date: "2024-01-02".to_string(),
        assignments: Vec::new(),
    }]);

    assert!(resolve_roster(&data, "2024-01-02").is_some());
    assert!(resolve_roster(&data, "2024-1-2").is_none());
}

#[test]
fn duplicate_dates_resolve_to_first_roster() {
    let data = dataset_with_rosters(vec![
        Roster {
            date: "2024-06-01".to_string(),
            assignments: vec![assignment("t1", "first", "09:00-17:00")],
        },
        Roster {
            date: "2024-06-01".to_string(),
            assignments: vec![assignment("t1", "second", "17:00-01:00")],
        },
    ]);

    let roster = resolve_roster(&data, "2024-06-01").unwrap();
    assert_eq!(roster.assignments[0].member_id, "first");
}

#[test]
fn repeated_resolution_is_idempotent() {
    let data = dataset_with_rosters(vec![Roster {
        date: "2024-06-01".to_string(),
        assignments: vec![assignment("t1", "m1", "09:00-17:00")],
    }]);

    let first = resolve_roster(&data, "2024-06-01");
    let second = resolve_roster(&data, "2024-06-01");
    assert_eq!(first, second);
}
