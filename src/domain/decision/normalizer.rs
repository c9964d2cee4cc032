//! Repair of raw provider payloads into schema-complete analyses.
//!
//! Model providers routinely return payloads with missing keys, malformed
//! score types, or scores for options the caller never supplied. Rather
//! than surfacing those defects to the end user, [`normalize`] repairs
//! every one of them with a documented default. It is a total function:
//! any JSON value in, a well-formed [`AnalysisRecord`] out.
//!
//! The request's option list is the authoritative universe. The output
//! always carries exactly one score per requested option, in request
//! order; entries for unknown options are dropped, missing ones are
//! synthesized.

use serde_json::Value;
use std::collections::BTreeMap;

use super::analysis::{AnalysisRecord, OptionScore};
use super::request::{DecisionRequest, PriorityWeight};
use super::word_count;

/// Default applied to any absent or malformed numeric score.
pub const DEFAULT_SCORE: f64 = 50.0;

/// Summaries shorter than this many words are rewritten.
pub const SUMMARY_MIN_WORDS: usize = 15;

/// Repairs a raw provider payload against the originating request.
///
/// Never fails: a payload that is not even a JSON object is treated as an
/// empty one, and the result is fully synthesized. The returned record's
/// `confidence` is left at zero; scoring happens after normalization.
pub fn normalize(raw: &Value, request: &DecisionRequest) -> AnalysisRecord {
    let raw = raw.as_object();

    let raw_scores: Vec<&Value> = raw
        .and_then(|m| m.get("scores"))
        .and_then(Value::as_array)
        .map(|entries| entries.iter().collect())
        .unwrap_or_default();

    // One output entry per requested option, in request order. Duplicate
    // raw entries resolve to the first occurrence; unknown options are
    // never looked up and so fall away here.
    let scores: Vec<OptionScore> = request
        .options
        .iter()
        .map(|option| {
            raw_scores
                .iter()
                .copied()
                .find(|entry| {
                    entry.get("option").and_then(Value::as_str) == Some(option.as_str())
                })
                .map(|entry| repaired_score(option, entry, &request.priorities))
                .unwrap_or_else(|| synthesized_score(option, &request.priorities))
        })
        .collect();

    let reasoning = string_field(raw, "reasoning")
        .unwrap_or_else(|| "The options were evaluated against your stated priorities.".to_string());
    let key_insights = string_sequence(raw, "key_insights");
    let next_steps = string_sequence(raw, "next_steps");

    // A supplied recommendation survives only when it names a requested
    // option; otherwise the highest-scoring entry wins, ties going to the
    // earlier option.
    let recommended_option = string_field(raw, "recommended_option")
        .filter(|candidate| request.options.iter().any(|o| o == candidate))
        .or_else(|| top_option(&scores).map(str::to_string))
        .unwrap_or_default();

    let summary = string_field(raw, "summary")
        .unwrap_or_else(|| format!("Analysis of '{}' based on your priorities.", request.title));
    let summary = if word_count(&summary) < SUMMARY_MIN_WORDS {
        rebuilt_summary(&scores, &recommended_option, &request.priorities)
    } else {
        summary
    };

    let comparative_analysis = string_field(raw, "comparative_analysis")
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| synthesized_comparative(&scores));

    AnalysisRecord {
        scores,
        summary,
        reasoning,
        confidence: 0.0,
        recommended_option,
        key_insights,
        next_steps,
        comparative_analysis,
    }
}

/// Completes a surviving raw score entry.
fn repaired_score(option: &str, entry: &Value, priorities: &[PriorityWeight]) -> OptionScore {
    let overall_score = entry
        .get("overall_score")
        .and_then(Value::as_f64)
        .unwrap_or(DEFAULT_SCORE);

    let raw_priorities = entry.get("priority_scores").and_then(Value::as_object);
    // Exactly the request's priority names: absent entries default,
    // unknown entries are not carried over.
    let priority_scores: BTreeMap<String, f64> = priorities
        .iter()
        .map(|priority| {
            let score = raw_priorities
                .and_then(|m| m.get(&priority.name))
                .and_then(Value::as_f64)
                .unwrap_or(DEFAULT_SCORE);
            (priority.name.clone(), score)
        })
        .collect();

    OptionScore {
        option: option.to_string(),
        overall_score,
        priority_scores,
        strengths: dimension(entry, "strengths"),
        weaknesses: dimension(entry, "weaknesses"),
        risks: dimension(entry, "risks"),
        opportunities: dimension(entry, "opportunities"),
    }
}

/// Builds the wholly-default score for an option the provider skipped.
fn synthesized_score(option: &str, priorities: &[PriorityWeight]) -> OptionScore {
    OptionScore {
        option: option.to_string(),
        overall_score: DEFAULT_SCORE,
        priority_scores: priorities
            .iter()
            .map(|p| (p.name.clone(), DEFAULT_SCORE))
            .collect(),
        strengths: vec![placeholder("strengths")],
        weaknesses: vec![placeholder("weaknesses")],
        risks: vec![placeholder("risks")],
        opportunities: vec![placeholder("opportunities")],
    }
}

/// Collects one qualitative dimension, falling back to a placeholder.
fn dimension(entry: &Value, key: &str) -> Vec<String> {
    let items: Vec<String> = entry
        .get(key)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    if items.is_empty() {
        vec![placeholder(key)]
    } else {
        items
    }
}

fn placeholder(key: &str) -> String {
    format!("No specific {key} were identified for this option.")
}

/// Highest overall score wins; strict comparison keeps the earlier entry
/// on ties.
fn top_option(scores: &[OptionScore]) -> Option<&str> {
    let mut best: Option<&OptionScore> = None;
    for score in scores {
        match best {
            Some(current) if score.overall_score <= current.overall_score => {}
            _ => best = Some(score),
        }
    }
    best.map(|s| s.option.as_str())
}

/// Deterministic replacement for an absent or uninformative summary.
fn rebuilt_summary(
    scores: &[OptionScore],
    recommended: &str,
    priorities: &[PriorityWeight],
) -> String {
    let score = scores
        .iter()
        .find(|s| s.option == recommended)
        .map(|s| s.overall_score)
        .unwrap_or(DEFAULT_SCORE);
    let first_priority = priorities
        .first()
        .map(|p| p.name.as_str())
        .unwrap_or("your criteria");

    format!(
        "{recommended} is recommended with a score of {score}/100, demonstrating strong \
         alignment with your key priorities including {first_priority}."
    )
}

/// One-sentence comparison of the two leading options.
fn synthesized_comparative(scores: &[OptionScore]) -> String {
    if scores.len() < 2 {
        return String::new();
    }
    let mut ranked: Vec<&OptionScore> = scores.iter().collect();
    ranked.sort_by(|a, b| {
        b.overall_score
            .partial_cmp(&a.overall_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    format!(
        "{} scored {}/100 against {} at {}/100 when weighed across your priorities.",
        ranked[0].option, ranked[0].overall_score, ranked[1].option, ranked[1].overall_score
    )
}

fn string_field(raw: Option<&serde_json::Map<String, Value>>, key: &str) -> Option<String> {
    raw.and_then(|m| m.get(key))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn string_sequence(raw: Option<&serde_json::Map<String, Value>>, key: &str) -> Vec<String> {
    raw.and_then(|m| m.get(key))
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
