//! Survey lifecycle integration tests.
//!
//! - Construction: participant config loading, data dir creation
//! - new_survey: idle → active, already-active, unknown and unsafe participant rejection
//! - save_survey: empty and non-finite survey retention, file output, idle afterwards
//! - Saved file layout

use std::path::Path;

use chrono::NaiveTime;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tempfile::TempDir;

use survey_config::{ConfigError, PARTICIPANT_CONFIG_FILE, SurveySettings};
use survey_core::enums::SurveyState;
use survey_core::{CoreError, ProjectedField, Quality, Survey, timefmt};
use survey_manager::{ManagerError, SurveyManager};

struct Dirs {
    config: TempDir,
    data: TempDir,
}

fn dirs_with_config(config: &Value) -> Dirs {
    let dirs = Dirs {
        config: tempfile::tempdir().unwrap(),
        data: tempfile::tempdir().unwrap(),
    };
    std::fs::write(
        dirs.config.path().join(PARTICIPANT_CONFIG_FILE),
        serde_json::to_string(config).unwrap(),
    )
    .unwrap();
    dirs
}

fn test_manager() -> (Dirs, SurveyManager) {
    let dirs = dirs_with_config(&json!({ "p1": { "arm": "left" } }));
    let manager = SurveyManager::new(dirs.config.path(), dirs.data.path()).unwrap();
    (dirs, manager)
}

fn chest() -> ProjectedField {
    ProjectedField {
        model: "torso".into(),
        name: "chest".into(),
        vertices: vec![1, 2, 3],
        hot_spot: vec![2],
        qualities: vec![Quality {
            intensity: 0.8,
            naturalness: 0.5,
            pain: 0.9,
            depth: "deep".into(),
            kind: "sharp".into(),
        }],
    }
}

fn files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn missing_participant_config_fails_construction() {
    let config = tempfile::tempdir().unwrap();
    let data = tempfile::tempdir().unwrap();
    let err = SurveyManager::new(config.path(), data.path()).unwrap_err();
    assert!(matches!(
        err,
        ManagerError::Config(ConfigError::ParticipantsUnreadable { .. })
    ));
}

#[test]
fn malformed_participant_config_fails_construction() {
    let config = tempfile::tempdir().unwrap();
    std::fs::write(config.path().join(PARTICIPANT_CONFIG_FILE), "not json").unwrap();
    let err = SurveyManager::new(config.path(), "data").unwrap_err();
    assert!(matches!(
        err,
        ManagerError::Config(ConfigError::ParticipantsMalformed { .. })
    ));
}

#[test]
fn from_settings_creates_data_dir() {
    let dirs = dirs_with_config(&json!({ "p1": {} }));
    let mut settings = SurveySettings::default();
    settings.paths.config_dir = dirs.config.path().to_path_buf();
    settings.paths.data_dir = dirs.data.path().join("nested").join("surveys");

    let manager = SurveyManager::from_settings(&settings).unwrap();
    assert!(manager.data_dir().is_dir());
    assert_eq!(manager.state(), SurveyState::Idle);
}

#[test]
fn from_settings_without_create_leaves_dir_missing() {
    let dirs = dirs_with_config(&json!({ "p1": {} }));
    let mut settings = SurveySettings::default();
    settings.paths.config_dir = dirs.config.path().to_path_buf();
    settings.paths.data_dir = dirs.data.path().join("absent");
    settings.output.create_data_dir = false;

    let manager = SurveyManager::from_settings(&settings).unwrap();
    assert!(!manager.data_dir().exists());
}

// ---------------------------------------------------------------------------
// new_survey
// ---------------------------------------------------------------------------

#[test]
fn second_new_survey_is_rejected_and_first_untouched() {
    let (_dirs, mut manager) = test_manager();
    manager.new_survey("p1").unwrap();
    manager.add_projected_field(chest()).unwrap();
    let before = manager.active().cloned().unwrap();

    let err = manager.new_survey("p1").unwrap_err();
    assert!(matches!(
        err,
        ManagerError::AlreadyActive { ref participant } if participant == "p1"
    ));
    assert_eq!(manager.active(), Some(&before));
    assert_eq!(manager.state(), SurveyState::Active);
}

#[test]
fn unknown_participant_is_rejected_and_manager_stays_idle() {
    let (_dirs, mut manager) = test_manager();
    let err = manager.new_survey("nobody").unwrap_err();
    assert!(matches!(
        err,
        ManagerError::UnknownParticipant { ref participant } if participant == "nobody"
    ));
    assert_eq!(manager.state(), SurveyState::Idle);
    assert!(err.to_string().contains("not in the participant config"));
}

#[test]
fn participant_id_with_path_parts_is_rejected() {
    let dirs = dirs_with_config(&json!({ "../escape": {}, "a/b": {} }));
    let mut manager = SurveyManager::new(dirs.config.path(), dirs.data.path()).unwrap();

    for id in ["../escape", "a/b"] {
        let err = manager.new_survey(id).unwrap_err();
        assert!(matches!(
            err,
            ManagerError::InvalidParticipantId { ref participant } if participant == id
        ));
        assert_eq!(manager.state(), SurveyState::Idle);
    }

    assert!(files_in(dirs.data.path()).is_empty());
    let parent = dirs.data.path().parent().unwrap();
    assert!(!files_in(parent).iter().any(|name| name.starts_with("escape_")));
}

#[test]
fn new_survey_stamps_current_date_and_time() {
    let (_dirs, mut manager) = test_manager();
    let before = timefmt::now();
    let survey = manager.new_survey("p1").unwrap();
    let after = timefmt::now();

    let started = survey.date.and_time(survey.start_time);
    assert!(started >= before && started <= after);
}

// ---------------------------------------------------------------------------
// save_survey
// ---------------------------------------------------------------------------

#[test]
fn save_while_idle_is_no_active_survey() {
    let (dirs, mut manager) = test_manager();
    assert!(matches!(
        manager.save_survey(),
        Err(ManagerError::NoActiveSurvey)
    ));
    assert!(files_in(dirs.data.path()).is_empty());
}

#[test]
fn empty_survey_is_retained_and_nothing_written() {
    let (dirs, mut manager) = test_manager();
    manager.new_survey("p1").unwrap();

    let err = manager.save_survey().unwrap_err();
    assert!(err.is_empty_survey());
    assert!(matches!(
        err,
        ManagerError::Core(CoreError::EmptySurvey { .. })
    ));
    assert_eq!(manager.state(), SurveyState::Active);
    assert!(files_in(dirs.data.path()).is_empty());

    manager.add_projected_field(chest()).unwrap();
    manager.save_survey().unwrap();
    assert_eq!(manager.state(), SurveyState::Idle);
    assert_eq!(files_in(dirs.data.path()).len(), 1);
}

#[test]
fn non_finite_quality_is_rejected_and_survey_stays_active() {
    let (dirs, mut manager) = test_manager();
    manager.new_survey("p1").unwrap();
    let mut field = chest();
    field.qualities[0].intensity = f64::NAN;
    manager.add_projected_field(field).unwrap();

    let err = manager.save_survey().unwrap_err();
    assert!(matches!(
        err,
        ManagerError::Core(CoreError::InvalidField {
            entity: "Quality",
            field: "intensity",
            ..
        })
    ));
    assert!(files_in(dirs.data.path()).is_empty());
    assert_eq!(manager.state(), SurveyState::Active);

    manager.active_mut().unwrap().projected_fields[0].qualities[0].intensity = 0.4;
    manager.save_survey().unwrap();
    assert_eq!(files_in(dirs.data.path()).len(), 1);
}

#[test]
fn write_failure_keeps_survey_active() {
    let config = tempfile::tempdir().unwrap();
    std::fs::write(
        config.path().join(PARTICIPANT_CONFIG_FILE),
        r#"{"p1": {}}"#,
    )
    .unwrap();
    let missing = config.path().join("no-such-dir");
    let mut manager = SurveyManager::new(config.path(), &missing).unwrap();

    manager.new_survey("p1").unwrap();
    manager.add_projected_field(chest()).unwrap();
    assert!(matches!(
        manager.save_survey(),
        Err(ManagerError::Core(CoreError::Io { .. }))
    ));
    assert!(manager.is_active());
}

#[test]
fn save_writes_one_file_and_returns_to_idle() {
    let (dirs, mut manager) = test_manager();
    let expected_name = manager.new_survey("p1").unwrap().file_name();
    manager.add_projected_field(chest()).unwrap();

    let path = manager.save_survey().unwrap();

    assert_eq!(path, dirs.data.path().join(&expected_name));
    assert_eq!(files_in(dirs.data.path()), vec![expected_name]);
    assert_eq!(manager.state(), SurveyState::Idle);
    assert!(manager.active().is_none());

    // A new survey can begin after a save.
    manager.new_survey("p1").unwrap();
}

#[test]
fn saved_file_matches_layout() {
    let (_dirs, mut manager) = test_manager();
    manager.new_survey("p1").unwrap();
    manager.add_projected_field(chest()).unwrap();
    let path = manager.save_survey().unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let record: Value = serde_json::from_str(&contents).unwrap();

    assert_eq!(record["participant"], "p1");
    assert_eq!(record["config"], json!({ "arm": "left" }));
    assert_eq!(
        record["projectedFields"],
        json!([{
            "model": "torso",
            "name": "chest",
            "vertices": [1, 2, 3],
            "hotSpot": [2],
            "qualities": [{
                "intensity": 0.8,
                "naturalness": 0.5,
                "pain": 0.9,
                "depth": "deep",
                "type": "sharp"
            }]
        }])
    );

    let start = timefmt::parse_time(record["startTime"].as_str().unwrap()).unwrap();
    let end: NaiveTime = timefmt::parse_time(record["endTime"].as_str().unwrap()).unwrap();
    assert!(end >= start);

    let file_name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert_eq!(
        file_name,
        format!(
            "p1_{}_{}.json",
            record["date"].as_str().unwrap(),
            record["startTime"].as_str().unwrap()
        )
    );

    let schema = survey_core::survey_schema();
    let validator = jsonschema::validator_for(&schema).unwrap();
    assert!(validator.is_valid(&record));

    let loaded = Survey::load(&path).unwrap();
    assert_eq!(loaded.projected_fields, vec![chest()]);
    assert!(loaded.is_finalized());
}
