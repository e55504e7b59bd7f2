//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use rollcall::adapters::table::{ColumnAliases, extract_sheet_id, parse_timestamp, read_table};
use rollcall::core::models::{Rating, Sentiment};
use test_case::test_case;

// =============================================================================
// Rating Parsing Tests
// =============================================================================

#[test_case("very satisfied", Rating::VerySatisfied ; "english top")]
#[test_case("Very_Satisfied", Rating::VerySatisfied ; "snake case")]
#[test_case("매우 만족", Rating::VerySatisfied ; "korean top")]
#[test_case("만족", Rating::Satisfied ; "korean satisfied")]
#[test_case("보통", Rating::Neutral ; "korean neutral")]
#[test_case("불만족", Rating::Dissatisfied ; "korean dissatisfied")]
#[test_case("매우 불만족", Rating::VeryDissatisfied ; "korean bottom")]
#[test_case("1", Rating::VeryDissatisfied ; "numeric bottom")]
#[test_case("very-dissatisfied", Rating::VeryDissatisfied ; "kebab case")]
fn test_rating_parse(input: &str, expected: Rating) {
    assert_eq!(input.parse::<Rating>().unwrap(), expected);
}

#[test_case("", false ; "empty")]
#[test_case("6", false ; "out of range")]
#[test_case("great", false ; "unknown word")]
#[test_case("neutral", true ; "known word")]
fn test_rating_parse_validity(input: &str, valid: bool) {
    assert_eq!(input.parse::<Rating>().is_ok(), valid);
}

#[test_case(Rating::VerySatisfied, Sentiment::Positive ; "very satisfied is positive")]
#[test_case(Rating::Satisfied, Sentiment::Positive ; "satisfied is positive")]
#[test_case(Rating::Neutral, Sentiment::Neutral ; "neutral is neutral")]
#[test_case(Rating::Dissatisfied, Sentiment::Negative ; "dissatisfied is negative")]
#[test_case(Rating::VeryDissatisfied, Sentiment::Negative ; "very dissatisfied is negative")]
fn test_rating_sentiment(rating: Rating, expected: Sentiment) {
    assert_eq!(rating.sentiment(), expected);
}

// =============================================================================
// Column Alias Tests
// =============================================================================

#[test_case("email" ; "lowercase")]
#[test_case("Email" ; "capitalized")]
#[test_case("EMAIL ADDRESS" ; "long form")]
#[test_case("이메일" ; "korean")]
fn test_email_header_aliases(header: &str) {
    let table = read_table(format!("{header}\na@x.com\n").as_bytes()).unwrap();
    assert_eq!(table.column_index(&ColumnAliases::default().email), Some(0));
}

#[test_case("이름" ; "korean name")]
#[test_case("Full Name" ; "full name")]
#[test_case("name" ; "plain name")]
fn test_name_header_aliases(header: &str) {
    let table = read_table(format!("{header}\nKim\n").as_bytes()).unwrap();
    assert_eq!(table.column_index(&ColumnAliases::default().name), Some(0));
}

// =============================================================================
// Sheet URLs and Timestamps
// =============================================================================

#[test_case("https://docs.google.com/spreadsheets/d/abc123/edit", Some("abc123") ; "edit link")]
#[test_case("https://docs.google.com/spreadsheets/d/a-b_C/edit#gid=0", Some("a-b_C") ; "dash and underscore")]
#[test_case("https://example.com/data.csv", None ; "plain url")]
fn test_extract_sheet_id(url: &str, expected: Option<&str>) {
    assert_eq!(extract_sheet_id(url).as_deref(), expected);
}

#[test_case("2024-05-01 09:30:00", true ; "iso with seconds")]
#[test_case("2024-05-01T09:30:00+09:00", true ; "rfc3339")]
#[test_case("yesterday", false ; "free text")]
#[test_case("", false ; "empty")]
fn test_parse_timestamp(input: &str, parses: bool) {
    assert_eq!(parse_timestamp(input).is_some(), parses);
}
