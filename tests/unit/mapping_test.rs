//! Tests for loading tables and mapping them to records

use std::fs;

use rollcall::adapters::response_log::append_response;
use rollcall::adapters::table::{
    ColumnAliases, CsvFile, export_url, read_table, responses_from_table, roster_from_table,
};
use rollcall::core::models::{Rating, ResponseEntry};
use rollcall::core::ports::{LoadError, TableSource};
use rollcall::core::services::{MatchMode, find_non_respondents, find_non_respondents_with};
use tempfile::TempDir;

#[test]
fn test_korean_roster_headers_are_recognized() {
    let csv = "이름,소속,이메일\n김철수,영업팀,kim@x.com\n이영희,법무팀,\n";
    let table = read_table(csv.as_bytes()).unwrap();
    let loaded = roster_from_table(&table, &ColumnAliases::default()).unwrap();

    assert_eq!(loaded.records.len(), 1);
    assert_eq!(loaded.records[0].full_name, "김철수");
    assert_eq!(loaded.records[0].affiliation, "영업팀");
    assert_eq!(loaded.skipped.len(), 1);
    assert_eq!(loaded.skipped[0].row, 2);
}

#[test]
fn test_loaded_emails_are_not_normalized() {
    let roster = read_table("name,email\nA,\" a@x.com\"\nB,B@x.com\n".as_bytes()).unwrap();
    let responses = read_table("email\na@x.com\nb@x.com\n".as_bytes()).unwrap();
    let roster = roster_from_table(&roster, &ColumnAliases::default()).unwrap().records;
    let responses = responses_from_table(&responses, &ColumnAliases::default()).unwrap().records;

    assert_eq!(roster[0].email, " a@x.com");
    assert_eq!(find_non_respondents(&roster, &responses).len(), 2);
    assert!(find_non_respondents_with(&roster, &responses, MatchMode::Normalized).is_empty());
}

#[test]
fn test_roster_without_email_column_is_rejected() {
    let table = read_table("name,team\nA,Sales\n".as_bytes()).unwrap();
    let err = roster_from_table(&table, &ColumnAliases::default()).unwrap_err();
    assert!(matches!(err, LoadError::MissingColumn { ref column, .. } if column == "email"));
}

#[test]
fn test_responses_keep_extra_columns_as_answers() {
    let csv = "Timestamp,Email,Satisfaction,Track,Comment\n\
               2024-05-01 09:30:00,a@x.com,매우 만족,backend,great\n\
               2024-05-01 10:00:00,b@x.com,???,frontend,\n";
    let table = read_table(csv.as_bytes()).unwrap();
    let loaded = responses_from_table(&table, &ColumnAliases::default()).unwrap();

    let first = &loaded.records[0];
    assert_eq!(first.rating, Some(Rating::VerySatisfied));
    assert_eq!(first.comment.as_deref(), Some("great"));
    assert!(first.submitted_at.is_some());
    assert_eq!(first.answers, vec![("Track".to_string(), "backend".to_string())]);

    let second = &loaded.records[1];
    assert_eq!(second.rating, None);
    assert_eq!(second.comment, None);
}

#[test]
fn test_custom_aliases_override_defaults() {
    let aliases = ColumnAliases {
        email: vec!["work mail".to_string()],
        ..ColumnAliases::default()
    };
    let table = read_table("Name,Work Mail\nA,a@x.com\n".as_bytes()).unwrap();
    let loaded = roster_from_table(&table, &aliases).unwrap();
    assert_eq!(loaded.records[0].email, "a@x.com");
}

#[test]
fn test_csv_file_reports_missing_file() {
    let temp = TempDir::new().unwrap();
    let source = CsvFile::new(temp.path().join("nope.csv"));
    assert!(matches!(source.load(), Err(LoadError::NotFound(_))));
}

#[test]
fn test_recorded_response_reads_back() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("responses.csv");
    let names = ColumnAliases::default();

    let entry = ResponseEntry::new("Kim", "Sales", "kim@x.com").with_rating(Rating::Neutral);
    append_response(&path, &entry, &names).unwrap();
    append_response(&path, &ResponseEntry::new("Lee", "Legal", "lee@x.com"), &names).unwrap();

    let table = CsvFile::new(&path).load().unwrap();
    let loaded = responses_from_table(&table, &names).unwrap();
    assert_eq!(loaded.records.len(), 2);
    assert_eq!(loaded.records[0].rating, Some(Rating::Neutral));
    assert_eq!(loaded.records[1].email, "lee@x.com");
    assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 3);
}

#[test]
fn test_sheet_edit_link_becomes_csv_export() {
    let url = "https://docs.google.com/spreadsheets/d/1AbC-d_9/edit#gid=42";
    assert_eq!(
        export_url(url),
        "https://docs.google.com/spreadsheets/d/1AbC-d_9/export?format=csv&gid=42"
    );
}
