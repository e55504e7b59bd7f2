//! Tests for response statistics

use rollcall::core::models::{Rating, ResponseEntry};
use rollcall::core::services::{
    MatchMode, answer_distributions, rating_breakdown, response_rate,
};

use crate::common::{rated, response, roster_abc};

#[test]
fn test_response_rate_counts_roster_coverage() {
    let responses = vec![response("a@x.com"), response("stranger@x.com")];
    let rate = response_rate(&roster_abc(), &responses, MatchMode::Exact);

    assert_eq!(rate.roster_total, 3);
    assert_eq!(rate.responded, 1);
    assert_eq!(rate.pending, 2);
    assert!((rate.rate - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_response_rate_on_empty_roster_is_zero() {
    let rate = response_rate(&[], &[response("a@x.com")], MatchMode::Exact);
    assert_eq!(rate.roster_total, 0);
    assert!(rate.rate.abs() < f64::EPSILON);
}

#[test]
fn test_rating_breakdown_sentiment_rates() {
    let responses = vec![
        rated("a@x.com", Rating::VerySatisfied),
        rated("b@x.com", Rating::Satisfied),
        rated("c@x.com", Rating::Neutral),
        rated("d@x.com", Rating::VeryDissatisfied),
    ];
    let breakdown = rating_breakdown(&responses);

    assert_eq!(breakdown.counts.len(), 5);
    assert_eq!(breakdown.counts[0].rating, Rating::VerySatisfied);
    assert_eq!(breakdown.counts[0].count, 1);
    assert_eq!(breakdown.counts[3].count, 0);
    assert_eq!(breakdown.unrated, 0);
    assert!((breakdown.positive_rate - 50.0).abs() < 1e-9);
    assert!((breakdown.neutral_rate - 25.0).abs() < 1e-9);
    assert!((breakdown.negative_rate - 25.0).abs() < 1e-9);
}

#[test]
fn test_unrated_responses_dilute_the_rates() {
    let responses = vec![rated("a@x.com", Rating::Satisfied), response("b@x.com")];
    let breakdown = rating_breakdown(&responses);

    assert_eq!(breakdown.unrated, 1);
    assert!((breakdown.positive_rate - 50.0).abs() < 1e-9);
}

#[test]
fn test_answer_distributions_skip_free_text_columns() {
    let responses: Vec<ResponseEntry> = (0..12)
        .map(|i| {
            response(&format!("p{i}@x.com"))
                .with_answer("Track", if i % 3 == 0 { "backend" } else { "frontend" })
                .with_answer("Why", format!("reason {i}"))
        })
        .collect();

    let dists = answer_distributions(&responses, 10);
    assert_eq!(dists.len(), 1);
    assert_eq!(dists[0].question, "Track");
    assert_eq!(
        dists[0].counts,
        vec![("frontend".to_string(), 8), ("backend".to_string(), 4)]
    );
}
