use dayroster_core::{load_dataset, parse_dataset, LoadError};
use std::io::Write;

const SAMPLE_JSON: &str = r#"{
    "teams": [
        { "id": "ops", "name": "Operations" }
    ],
    "members": [
        {
            "id": "m1",
            "name": "Alice",
            "teamId": "ops",
            "roles": ["Manager"],
            "timezone": "America/New_York"
        }
    ],
    "rosters": [
        {
            "date": "2024-06-01",
            "assignments": [
                { "teamId": "ops", "memberId": "m1", "shift": "09:00-17:00" }
            ]
        }
    ]
}"#;

#[test]
fn parses_dataset_from_json_text() {
    let data = parse_dataset(SAMPLE_JSON).unwrap();
    assert_eq!(data.teams.len(), 1);
    assert_eq!(data.members[0].team_id, "ops");
    assert_eq!(data.rosters[0].date, "2024-06-01");
}

#[test]
fn loads_dataset_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_JSON.as_bytes()).unwrap();

    let data = load_dataset(file.path()).unwrap();
    assert_eq!(data.members[0].name, "Alice");
    assert_eq!(data.rosters[0].assignments[0].shift, "09:00-17:00");
}

#[test]
fn missing_file_surfaces_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_dataset(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
    assert!(err.to_string().contains("failed to read roster data"));
}

#[test]
fn malformed_json_surfaces_parse_error() {
    let err = parse_dataset("{ not json").unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)));
    assert!(err.to_string().contains("failed to parse roster data"));
}

#[test]
fn missing_required_field_surfaces_parse_error() {
    let err = parse_dataset(r#"{ "teams": [], "members": [] }"#).unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)));
}
