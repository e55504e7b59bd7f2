//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use rollcall::adapters::table::SkippedRow;
use rollcall::core::models::{DispatchOutcome, DispatchSummary, Message, RosterEntry};
use rollcall::core::services::rating_breakdown;
use rollcall::output::{
    DispatchKind, DispatchResult, OperationResult, OutputMode, PendingResult, SkippedReport,
    StatsResult,
};

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn pending_result_serialization() {
    let result = PendingResult {
        roster_total: 3,
        responses_total: 1,
        pending: vec![RosterEntry::new("B", "Legal", "b@x.com")],
        skipped: vec![SkippedReport {
            source: "roster.csv".to_string(),
            rows: vec![SkippedRow {
                row: 4,
                reason: "missing email".to_string(),
            }],
        }],
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"roster_total\":3"));
    assert!(json.contains("\"email\":\"b@x.com\""));
    assert!(json.contains("\"reason\":\"missing email\""));
}

#[test]
fn dispatch_result_serialization() {
    let mut summary = DispatchSummary::default();
    summary.record(DispatchOutcome::failure("b@x.com", "B", "timeout"));
    summary.record(DispatchOutcome::success("c@x.com", "C"));

    let result = DispatchResult {
        kind: DispatchKind::Reminder,
        dry_run: false,
        summary,
        preview: None,
    };
    let value: serde_json::Value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["kind"], "reminder");
    assert_eq!(value["summary"]["total"], 2);
    assert_eq!(value["summary"]["failed"], 1);
    assert_eq!(value["summary"]["outcomes"][0]["error"], "timeout");
    assert!(value.get("preview").is_none());
}

#[test]
fn dispatch_result_with_preview() {
    let result = DispatchResult {
        kind: DispatchKind::Invitation,
        dry_run: true,
        summary: DispatchSummary::default(),
        preview: Some(Message::new("b@x.com", "Hi", "link")),
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"kind\":\"invitation\""));
    assert!(json.contains("\"dry_run\":true"));
    assert!(json.contains("\"subject\":\"Hi\""));
}

#[test]
fn stats_result_omits_missing_rate() {
    let result = StatsResult {
        rate: None,
        responses_total: 0,
        ratings: rating_breakdown(&[]),
        distributions: vec![],
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(!json.contains("\"rate\""));
    assert!(json.contains("\"very_satisfied\""));
}

#[test]
fn operation_result_success() {
    let result = OperationResult::success("done");
    assert!(result.success);
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"message\":\"done\""));
}
