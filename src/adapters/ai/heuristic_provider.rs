//! Heuristic provider - fully synthetic analysis generation.
//!
//! Serves two roles: the fallback when every hosted model candidate fails,
//! and the whole provider on deployments without an API key. Scores come
//! from a keyword-affinity table keyed on priority and option wording, so
//! the output is plausible enough to exercise the rest of the pipeline.
//!
//! Unlike a hosted model this generator is deterministic: the same request
//! always produces the identical payload.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde_json::{json, Value};

use crate::domain::decision::{DecisionRequest, PriorityWeight};
use crate::ports::{AnalysisProvider, ProviderError};

/// Affinity between a category of priorities and option wording.
struct Affinity {
    /// Substrings that place a priority in this category.
    priority_keywords: &'static [&'static str],
    /// Option substrings that score well against the category.
    boosted: &'static [&'static str],
    boost: f64,
    /// Option substrings that score poorly against the category.
    dragged: &'static [&'static str],
    drag: f64,
}

static AFFINITIES: Lazy<Vec<Affinity>> = Lazy::new(|| {
    vec![
        Affinity {
            priority_keywords: &["career", "growth"],
            boosted: &["promotion", "manager", "lead", "senior", "advance", "growth"],
            boost: 20.0,
            dragged: &["stay", "current", "maintain"],
            drag: -5.0,
        },
        Affinity {
            priority_keywords: &["balance", "life"],
            boosted: &["remote", "flexible", "part-time", "balance", "family"],
            boost: 20.0,
            dragged: &["overtime", "intensive", "demanding"],
            drag: -10.0,
        },
        Affinity {
            priority_keywords: &["financial", "money"],
            boosted: &["raise", "bonus", "pay", "investment", "profit"],
            boost: 20.0,
            dragged: &["volunteer", "non-profit", "sacrifice"],
            drag: -12.0,
        },
        Affinity {
            priority_keywords: &["learning"],
            boosted: &["learn", "study", "course", "education", "skill"],
            boost: 20.0,
            dragged: &[],
            drag: 0.0,
        },
        Affinity {
            priority_keywords: &["fulfillment"],
            boosted: &["passion", "purpose", "meaning", "joy", "happy"],
            boost: 20.0,
            dragged: &[],
            drag: 0.0,
        },
    ]
});

/// Synthetic analysis provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAnalysisProvider;

impl HeuristicAnalysisProvider {
    /// Creates the provider.
    pub fn new() -> Self {
        Self
    }

    /// Base score for an option, spread deterministically by its name.
    fn base_score(option: &str) -> f64 {
        55.0 + ((option.chars().count() * 7) % 31) as f64
    }

    /// Affinity adjustment for one option against one priority.
    fn affinity_bonus(option: &str, priority: &PriorityWeight) -> f64 {
        let option_lower = option.to_lowercase();
        let priority_lower = priority.name.to_lowercase();

        for affinity in AFFINITIES.iter() {
            if !affinity
                .priority_keywords
                .iter()
                .any(|kw| priority_lower.contains(kw))
            {
                continue;
            }
            if affinity.boosted.iter().any(|kw| option_lower.contains(kw)) {
                return affinity.boost;
            }
            if affinity.dragged.iter().any(|kw| option_lower.contains(kw)) {
                return affinity.drag;
            }
        }
        0.0
    }

    fn generate(&self, request: &DecisionRequest) -> Value {
        // Score every option against every priority, then weight-average
        // into the overall score.
        let mut scored: Vec<ScoredOption> = request
            .options
            .iter()
            .map(|option| {
                let base = Self::base_score(option);
                let priority_scores: Vec<(String, f64)> = request
                    .priorities
                    .iter()
                    .map(|priority| {
                        let score =
                            (base + Self::affinity_bonus(option, priority)).clamp(0.0, 100.0);
                        (priority.name.clone(), score.round())
                    })
                    .collect();

                let total_weight: f64 = request.priorities.iter().map(|p| p.weight as f64).sum();
                let overall = if total_weight > 0.0 {
                    request
                        .priorities
                        .iter()
                        .zip(priority_scores.iter())
                        .map(|(p, (_, score))| score * (p.weight as f64 / total_weight))
                        .sum::<f64>()
                        .round()
                } else {
                    base.round()
                };

                ScoredOption {
                    option: option.clone(),
                    overall,
                    priority_scores,
                }
            })
            .collect();

        scored.sort_by(|a, b| {
            b.overall
                .partial_cmp(&a.overall)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let recommended = scored
            .first()
            .map(|s| s.option.clone())
            .unwrap_or_default();
        let top = scored.first().map(|s| s.overall).unwrap_or(50.0);
        let runner_up = scored.get(1).map(|s| s.overall).unwrap_or(top);
        let gap = top - runner_up;

        let certainty = if gap > 20.0 {
            "clearly stands out"
        } else if gap > 10.0 {
            "emerges as the better choice"
        } else {
            "has a marginal advantage"
        };

        let mut summary = format!(
            "Based on your priorities, {recommended} {certainty} with an overall score of \
             {top}/100 when every option is weighed against your stated criteria."
        );
        if gap <= 10.0 {
            summary.push_str(
                " The decision is relatively close, so consider your personal intuition \
                 alongside this analysis.",
            );
        }

        let reasoning = Self::reasoning(request, &scored, &recommended);

        let scores: Vec<Value> = scored
            .iter()
            .map(|s| {
                let strengths: Vec<String> = s
                    .priority_scores
                    .iter()
                    .filter(|(_, score)| *score >= 75.0)
                    .map(|(name, score)| format!("Strong alignment with {name} (score {score})"))
                    .collect();
                let weaknesses: Vec<String> = s
                    .priority_scores
                    .iter()
                    .filter(|(_, score)| *score <= 60.0)
                    .map(|(name, score)| format!("Potential trade-off on {name} (score {score})"))
                    .collect();

                json!({
                    "option": s.option,
                    "overall_score": s.overall,
                    "priority_scores": s.priority_scores.iter()
                        .map(|(name, score)| (name.clone(), Value::from(*score)))
                        .collect::<serde_json::Map<String, Value>>(),
                    "strengths": strengths,
                    "weaknesses": weaknesses,
                })
            })
            .collect();

        let comparative = if scored.len() >= 2 {
            format!(
                "{} ranks first at {}/100 while {} follows at {}/100; the gap of {} points \
                 reflects how differently they serve your weighted priorities.",
                scored[0].option, scored[0].overall, scored[1].option, scored[1].overall, gap
            )
        } else {
            String::new()
        };

        json!({
            "scores": scores,
            "summary": summary,
            "reasoning": reasoning,
            "recommended_option": recommended,
            "key_insights": Self::insights(request),
            "next_steps": [
                "Discuss this decision with people who know your situation well.",
                "Revisit the analysis after gathering any missing information.",
            ],
            "comparative_analysis": comparative,
        })
    }

    fn reasoning(
        request: &DecisionRequest,
        scored: &[ScoredOption],
        recommended: &str,
    ) -> String {
        let mut parts: Vec<String> = Vec::new();

        if let Some(best) = scored.iter().find(|s| s.option == recommended) {
            let highlights: Vec<String> = best
                .priority_scores
                .iter()
                .filter(|(_, score)| *score >= 70.0)
                .map(|(name, score)| format!("{} (score: {})", name.to_lowercase(), score))
                .collect();
            if !highlights.is_empty() {
                parts.push(format!(
                    "{} demonstrates strength in {}.",
                    recommended,
                    highlights.join(", ")
                ));
            }
        }

        if scored.len() > 1 {
            parts.push(format!(
                "Compared to {}, {} better balances your key priorities.",
                scored[1].option, recommended
            ));
        }

        let context_lower = request.context.to_lowercase();
        if context_lower.contains("career") || context_lower.contains("job") {
            parts.push(
                "For career decisions, also consider long-term growth potential and skill \
                 development."
                    .to_string(),
            );
        } else if context_lower.contains("personal") {
            parts.push(
                "For personal decisions, trust your instincts about what will bring you \
                 lasting fulfillment."
                    .to_string(),
            );
        }

        if parts.is_empty() {
            "The options were scored against each of your weighted priorities.".to_string()
        } else {
            parts.join(" ")
        }
    }

    fn insights(request: &DecisionRequest) -> Vec<String> {
        let mut insights = vec![
            "Think about how each option aligns with your five-year goals.".to_string(),
            "No decision is permanent; you can course-correct as new information arrives."
                .to_string(),
        ];
        let context_lower = request.context.to_lowercase();
        if context_lower.contains("job") || context_lower.contains("career") {
            insights.push(
                "Research company culture and growth opportunities for career-related options."
                    .to_string(),
            );
        } else if context_lower.contains("relationship") || context_lower.contains("family") {
            insights.push(
                "Consider the impact of each option on your important relationships.".to_string(),
            );
        }
        insights
    }
}

struct ScoredOption {
    option: String,
    overall: f64,
    priority_scores: Vec<(String, f64)>,
}

#[async_trait]
impl AnalysisProvider for HeuristicAnalysisProvider {
    async fn analyze(&self, request: &DecisionRequest) -> Result<Value, ProviderError> {
        tracing::info!(title = %request.title, "generating heuristic analysis");
        Ok(self.generate(request))
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}
