//! Response statistics
//!
//! Headline numbers for the status view: how many answered, how they
//! rated the program, and how the other multiple-choice answers split.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::core::models::{Rating, ResponseEntry, RosterEntry, Sentiment};

use super::reconcile::{MatchMode, find_non_respondents_with};

/// Columns with at least this many distinct values are treated as free text
pub const DEFAULT_MAX_DISTINCT: usize = 10;

/// Roster coverage
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResponseRate {
    /// Roster entries with an email
    pub roster_total: usize,
    /// Roster entries that have answered
    pub responded: usize,
    /// Roster entries still to answer
    pub pending: usize,
    /// `responded / roster_total` as a percentage
    pub rate: f64,
}

/// Count of one rating level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingCount {
    /// Level
    pub rating: Rating,
    /// Responses at this level
    pub count: usize,
}

/// Rating distribution with headline sentiment rates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingBreakdown {
    /// Every level, best first, including zero counts
    pub counts: Vec<RatingCount>,
    /// Responses without a usable rating
    pub unrated: usize,
    /// Share of all responses rated in the top two levels
    pub positive_rate: f64,
    /// Share of all responses rated neutral
    pub neutral_rate: f64,
    /// Share of all responses rated in the bottom two levels
    pub negative_rate: f64,
}

/// Value counts for one answer column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerDistribution {
    /// Column header
    pub question: String,
    /// `(answer, count)` pairs, most common first
    pub counts: Vec<(String, usize)>,
}

/// How much of the roster has answered
#[must_use]
pub fn response_rate(
    roster: &[RosterEntry],
    responses: &[ResponseEntry],
    mode: MatchMode,
) -> ResponseRate {
    let roster_total = roster.iter().filter(|e| e.has_email()).count();
    let pending = find_non_respondents_with(roster, responses, mode).len();
    let responded = roster_total - pending;

    ResponseRate {
        roster_total,
        responded,
        pending,
        rate: percent(responded, roster_total),
    }
}

/// Distribution of ratings across all responses
#[must_use]
pub fn rating_breakdown(responses: &[ResponseEntry]) -> RatingBreakdown {
    let total = responses.len();
    let counts: Vec<RatingCount> = Rating::ALL
        .iter()
        .map(|&rating| RatingCount {
            rating,
            count: responses.iter().filter(|r| r.rating == Some(rating)).count(),
        })
        .collect();
    let unrated = responses.iter().filter(|r| r.rating.is_none()).count();

    let by_sentiment = |sentiment: Sentiment| {
        counts
            .iter()
            .filter(|c| c.rating.sentiment() == sentiment)
            .map(|c| c.count)
            .sum::<usize>()
    };

    RatingBreakdown {
        positive_rate: percent(by_sentiment(Sentiment::Positive), total),
        neutral_rate: percent(by_sentiment(Sentiment::Neutral), total),
        negative_rate: percent(by_sentiment(Sentiment::Negative), total),
        counts,
        unrated,
    }
}

/// Value counts for answer columns with fewer than `max_distinct` values
#[must_use]
pub fn answer_distributions(
    responses: &[ResponseEntry],
    max_distinct: usize,
) -> Vec<AnswerDistribution> {
    let mut questions: Vec<&str> = Vec::new();
    let mut seen = HashSet::new();
    for response in responses {
        for (question, _) in &response.answers {
            if seen.insert(question.as_str()) {
                questions.push(question);
            }
        }
    }

    questions
        .into_iter()
        .filter_map(|question| {
            let mut tally: BTreeMap<&str, usize> = BTreeMap::new();
            for response in responses {
                if let Some((_, answer)) = response.answers.iter().find(|(q, _)| q == question)
                    && !answer.trim().is_empty()
                {
                    *tally.entry(answer.as_str()).or_default() += 1;
                }
            }

            if tally.is_empty() || tally.len() >= max_distinct {
                return None;
            }

            let mut counts: Vec<(String, usize)> =
                tally.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
            counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

            Some(AnswerDistribution {
                question: question.to_string(),
                counts,
            })
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
