//! Property tests for the analysis repair pipeline and confidence model.
//!
//! The raw provider payload is adversarial by construction here: missing
//! keys, malformed types, unknown options, junk scalars. The normalizer
//! must hold its structural guarantees for all of them.

use proptest::prelude::*;
use serde_json::{json, Value};

use pathfinder::domain::decision::{
    normalize, ConfidenceModel, DecisionRequest, PriorityWeight, QualitySignals,
};

fn fixture_request() -> DecisionRequest {
    DecisionRequest {
        title: "Job Offer".to_string(),
        context: "Deciding whether to accept a new role.".to_string(),
        options: vec!["Stay".to_string(), "Leave".to_string()],
        priorities: vec![
            PriorityWeight::new("Growth", 8, "Career growth"),
            PriorityWeight::new("Cost", 4, "Financial impact"),
        ],
    }
}

/// A single raw score entry: valid or hallucinated option names, optional
/// or malformed score fields.
fn arb_score_entry() -> impl Strategy<Value = Value> {
    let option = prop_oneof![
        Just("Stay".to_string()),
        Just("Leave".to_string()),
        Just("Relocate".to_string()),
        "[a-z]{1,8}",
    ];
    let overall = prop_oneof![
        prop::option::of((-50.0..150.0f64).prop_map(|n| json!(n))),
        Just(Some(json!("not a number"))),
    ];
    (option, overall, any::<bool>()).prop_map(|(option, overall, with_priorities)| {
        let mut entry = serde_json::Map::new();
        entry.insert("option".to_string(), json!(option));
        if let Some(score) = overall {
            entry.insert("overall_score".to_string(), score);
        }
        if with_priorities {
            entry.insert(
                "priority_scores".to_string(),
                json!({"Growth": 70, "Invented": 5}),
            );
        }
        Value::Object(entry)
    })
}

/// Arbitrary raw payloads, including non-object junk.
fn arb_payload() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!(null)),
        any::<i64>().prop_map(|n| json!(n)),
        "[ -~]{0,20}".prop_map(|s| json!(s)),
        prop::collection::vec(arb_score_entry(), 0..6)
            .prop_map(|scores| json!({ "scores": scores })),
        (
            prop::collection::vec(arb_score_entry(), 0..6),
            prop_oneof![
                Just("Stay".to_string()),
                Just("Relocate".to_string()),
                "[a-z]{1,6}",
            ],
        )
            .prop_map(|(scores, rec)| json!({"scores": scores, "recommended_option": rec})),
    ]
}

proptest! {
    #[test]
    fn output_option_set_always_matches_request(raw in arb_payload()) {
        let request = fixture_request();
        let record = normalize(&raw, &request);

        let options: Vec<&str> = record.scores.iter().map(|s| s.option.as_str()).collect();
        prop_assert_eq!(options, vec!["Stay", "Leave"]);
    }

    #[test]
    fn priority_scores_always_complete_and_exact(raw in arb_payload()) {
        let request = fixture_request();
        let record = normalize(&raw, &request);

        for score in &record.scores {
            let keys: Vec<&str> = score.priority_scores.keys().map(String::as_str).collect();
            prop_assert_eq!(keys, vec!["Cost", "Growth"]);
        }
    }

    #[test]
    fn recommendation_always_within_option_set(raw in arb_payload()) {
        let request = fixture_request();
        let record = normalize(&raw, &request);

        prop_assert!(request.options.contains(&record.recommended_option));
    }

    #[test]
    fn qualitative_dimensions_never_empty(raw in arb_payload()) {
        let request = fixture_request();
        let record = normalize(&raw, &request);

        for score in &record.scores {
            prop_assert!(!score.strengths.is_empty());
            prop_assert!(!score.weaknesses.is_empty());
            prop_assert!(!score.risks.is_empty());
            prop_assert!(!score.opportunities.is_empty());
        }
    }

    #[test]
    fn confidence_bounded_and_deterministic(
        scores in prop::collection::vec(0.0..100.0f64, 0..6)
    ) {
        let model = ConfidenceModel::default();
        let first = model.estimate(&scores, &QualitySignals::NONE);
        let second = model.estimate(&scores, &QualitySignals::NONE);

        prop_assert_eq!(first, second);
        prop_assert!((60.0..=95.0).contains(&first), "out of bounds: {}", first);
    }

    #[test]
    fn confidence_monotonic_in_spread(a in 0.0..100.0f64, b in 0.0..100.0f64) {
        let model = ConfidenceModel::default();
        let (wide, narrow) = if a >= b { (a, b) } else { (b, a) };

        let wide_estimate = model.estimate(&[0.0, wide], &QualitySignals::NONE);
        let narrow_estimate = model.estimate(&[0.0, narrow], &QualitySignals::NONE);
        prop_assert!(wide_estimate >= narrow_estimate);
    }
}
