use profile_charts::ChartError;
use profile_charts::core::{
    GradeOutcome, PassFailCounts, ProgressRecord, RecordIssue, TransactionRecord,
    latest_results, parse_progress, parse_transactions, parse_user_profile,
};

#[test]
fn transactions_parse_with_missing_fields() {
    let input = r#"[
        {"amount": 1200, "createdAt": "2024-02-01T10:00:00.123456+00:00", "path": "/school/div-01/graphql"},
        {"amount": 300, "createdAt": "2024-02-02T10:00:00+00:00", "path": null},
        {"createdAt": "2024-02-03T10:00:00+00:00"},
        {"amount": 5}
    ]"#;

    let records = parse_transactions(input).expect("parse");
    assert_eq!(records.len(), 4);
    assert!(records[0].validate().is_ok());
    assert_eq!(records[1].path, None);
    assert_eq!(records[2].validate(), Err(RecordIssue::MissingAmount));
    assert_eq!(records[3].validate(), Err(RecordIssue::MissingTimestamp));
}

#[test]
fn invalid_json_is_a_serialization_error() {
    let result = parse_transactions("{not json");
    assert!(matches!(result, Err(ChartError::Serialization(_))));
}

#[test]
fn wrong_typed_rows_are_skipped_not_fatal() {
    let input = r#"[
        {"amount": "10", "createdAt": "2024-02-01T10:00:00Z"},
        {"amount": 25, "createdAt": "2024-02-02T10:00:00Z", "path": "/school/div-01/forum"},
        42,
        {"amount": 5, "createdAt": 17}
    ]"#;
    let records = parse_transactions(input).expect("parse");
    assert_eq!(
        records,
        vec![TransactionRecord::new(25.0, "2024-02-02T10:00:00Z").with_path("/school/div-01/forum")]
    );

    let progress = parse_progress(r#"[{"grade": "pass"}, {"grade": 1, "createdAt": "2024-01-01T00:00:00Z"}]"#)
        .expect("parse");
    assert_eq!(progress.len(), 1);
    assert_eq!(progress[0].grade, Some(1.0));

    assert!(matches!(
        parse_progress(r#"{"grade": 1}"#),
        Err(ChartError::Serialization(_))
    ));
}

#[test]
fn timestamp_issues_are_typed() {
    let record = TransactionRecord::new(1.0, "31/12/2024");
    assert_eq!(record.validate(), Err(RecordIssue::InvalidTimestamp));
    let record = TransactionRecord::new(f64::INFINITY, "2024-01-01T00:00:00Z");
    assert_eq!(record.validate(), Err(RecordIssue::NonFiniteAmount));
}

#[test]
fn grades_classify_into_three_outcomes() {
    assert_eq!(GradeOutcome::from_grade(Some(1.0)), GradeOutcome::Pass);
    assert_eq!(GradeOutcome::from_grade(Some(1.7)), GradeOutcome::Pass);
    assert_eq!(GradeOutcome::from_grade(Some(0.0)), GradeOutcome::Fail);
    assert_eq!(GradeOutcome::from_grade(Some(0.4)), GradeOutcome::Fail);
    assert_eq!(GradeOutcome::from_grade(None), GradeOutcome::InProgress);
    assert_eq!(GradeOutcome::from_grade(Some(f64::NAN)), GradeOutcome::InProgress);
}

#[test]
fn progress_counts_skip_in_progress_entries() {
    let input = r#"[
        {"grade": 1, "createdAt": "2024-01-01T00:00:00Z"},
        {"grade": 1.2, "createdAt": "2024-01-02T00:00:00Z"},
        {"grade": 0, "createdAt": "2024-01-03T00:00:00Z"},
        {"grade": null, "createdAt": "2024-01-04T00:00:00Z"}
    ]"#;
    let progress = parse_progress(input).expect("parse");
    let counts = PassFailCounts::from_progress(&progress);
    assert_eq!(counts.passes, 2);
    assert_eq!(counts.fails, 1);
    assert_eq!(counts.in_progress, 1);
    assert_eq!(counts.partial, 0);
    assert_eq!(counts.decided(), 3);
}

#[test]
fn fractional_grades_count_toward_neither_side() {
    let progress = vec![
        ProgressRecord::new(Some(1.0), "2024-01-01T00:00:00Z"),
        ProgressRecord::new(Some(0.5), "2024-01-02T00:00:00Z"),
        ProgressRecord::new(Some(-0.2), "2024-01-03T00:00:00Z"),
    ];
    let counts = PassFailCounts::from_progress(&progress);
    assert_eq!(
        counts,
        PassFailCounts {
            passes: 1,
            fails: 0,
            partial: 2,
            in_progress: 0,
        }
    );

    // The result listing still marks a fractional grade as failed.
    assert_eq!(GradeOutcome::from_grade(Some(0.5)), GradeOutcome::Fail);
}

#[test]
fn latest_results_keep_first_record_per_project() {
    let progress = vec![
        ProgressRecord::new(None, "2024-03-05T00:00:00Z").with_path("/school/div-01/graphql"),
        ProgressRecord::new(Some(0.0), "2024-03-04T00:00:00Z").with_path("/school/div-01/ascii-art"),
        ProgressRecord::new(Some(1.0), "2024-03-03T00:00:00Z").with_path("/school/div-01/graphql"),
        ProgressRecord {
            grade: Some(1.0),
            created_at: None,
            path: None,
        },
    ];

    let results = latest_results(&progress, "%Y-%m-%d");
    let summary: Vec<(&str, GradeOutcome, &str)> = results
        .iter()
        .map(|r| (r.project.as_str(), r.outcome, r.date_label.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("graphql", GradeOutcome::InProgress, "2024-03-05"),
            ("ascii-art", GradeOutcome::Fail, "2024-03-04"),
            ("Unknown", GradeOutcome::Pass, ""),
        ]
    );
}

#[test]
fn user_profile_parses_camel_case() {
    let profile = parse_user_profile(
        r#"{"firstName": "Ada", "lastName": "Lovelace", "login": "ada", "email": "ada@example.com", "auditRatio": 1.25}"#,
    )
    .expect("parse");
    assert_eq!(profile.first_name, "Ada");
    assert_eq!(profile.audit_ratio, 1.25);
}
