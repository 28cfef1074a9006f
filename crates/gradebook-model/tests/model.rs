//! Tests for gradebook-model types.

use gradebook_model::{GradeStats, GradingPolicy, RosterError, Standing, Student};

#[test]
fn student_construction_validates_name() {
    let student = Student::new("Ana Pérez", 80.0).expect("valid student");
    assert_eq!(student.name, "Ana Pérez");
    assert_eq!(student.grade, 80.0);

    assert_eq!(Student::new("  \t ", 80.0), Err(RosterError::EmptyName));
}

#[test]
fn standing_display_and_parse() {
    assert_eq!(Standing::Passed.to_string(), "Passed");
    assert_eq!(Standing::Failed.to_string(), "Failed");
    assert_eq!("passed".parse::<Standing>(), Ok(Standing::Passed));
    assert_eq!(" Failed ".parse::<Standing>(), Ok(Standing::Failed));
    assert!("unknown".parse::<Standing>().is_err());
}

#[test]
fn five_point_scale_classifies_at_threshold() {
    let policy = GradingPolicy::five_point();
    assert_eq!(policy.classify(3.0), Standing::Passed);
    assert_eq!(policy.classify(5.0), Standing::Passed);
    assert_eq!(policy.classify(2.99), Standing::Failed);
}

#[test]
fn policy_round_trips_through_json() {
    let policy = GradingPolicy::five_point().with_pass_threshold(3.5);
    let json = serde_json::to_string(&policy).expect("serialize policy");
    let round: GradingPolicy = serde_json::from_str(&json).expect("deserialize policy");
    assert_eq!(round, policy);
}

#[test]
fn policy_deserializes_from_plain_json_object() {
    let json = r#"{"min_grade": 1.0, "max_grade": 5.0, "pass_threshold": 3.0}"#;
    let policy: GradingPolicy = serde_json::from_str(json).expect("deserialize policy");
    assert_eq!(policy, GradingPolicy::five_point());
    assert!(policy.validate().is_ok());
}

#[test]
fn empty_stats_are_zeroed() {
    let stats = GradeStats::default();
    assert_eq!(stats.average, 0.0);
    assert_eq!(stats.high, 0.0);
    assert_eq!(stats.low, 0.0);
}
