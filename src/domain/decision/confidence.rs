//! Confidence estimation over normalized analyses.
//!
//! Confidence expresses how differentiated (and qualitatively well
//! supported) the scoring across options is - it is not a probability.
//! When options are nearly tied the system must not claim high certainty,
//! and it never claims near-certainty at all: the output is capped below
//! 100 because the underlying question is inherently subjective.
//!
//! The estimate is a pure function of its inputs. Identical inputs always
//! produce the identical value; no jitter is ever applied.

use super::word_count;

/// Qualitative signals that can raise confidence beyond score spread.
#[derive(Debug, Clone, Copy, Default)]
pub struct QualitySignals<'a> {
    /// Reasoning narrative accompanying the scores.
    pub reasoning: &'a str,
    /// Number of key insights produced.
    pub insight_count: usize,
    /// Comparative analysis narrative.
    pub comparative: &'a str,
}

impl QualitySignals<'static> {
    /// No qualitative signals at all.
    pub const NONE: QualitySignals<'static> = QualitySignals {
        reasoning: "",
        insight_count: 0,
        comparative: "",
    };
}

/// Tunable constants of the confidence formula.
///
/// The values are still being tuned upstream, so they live in one struct
/// rather than as scattered literals; [`ConfidenceModel::default`] carries
/// the canonical set.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceModel {
    /// Returned outright when fewer than two scores exist, and the floor
    /// below which no estimate falls.
    pub baseline: f64,
    /// Intercept of the spread term.
    pub spread_intercept: f64,
    /// Full-range contribution of the spread term.
    pub spread_weight: f64,
    /// Bonus for a substantial reasoning narrative.
    pub reasoning_bonus: f64,
    /// Word count the reasoning must exceed to earn its bonus.
    pub reasoning_min_words: usize,
    /// Bonus for carrying multiple key insights.
    pub insight_bonus: f64,
    /// Insight count at which the bonus applies.
    pub insight_min_count: usize,
    /// Bonus for a substantial comparative narrative.
    pub comparative_bonus: f64,
    /// Word count the comparative text must exceed to earn its bonus.
    pub comparative_min_words: usize,
    /// Hard ceiling; the system never claims near-certainty.
    pub ceiling: f64,
}

impl Default for ConfidenceModel {
    fn default() -> Self {
        Self {
            baseline: 60.0,
            spread_intercept: 40.0,
            spread_weight: 40.0,
            reasoning_bonus: 10.0,
            reasoning_min_words: 100,
            insight_bonus: 5.0,
            insight_min_count: 2,
            comparative_bonus: 5.0,
            comparative_min_words: 50,
            ceiling: 95.0,
        }
    }
}

impl ConfidenceModel {
    /// Estimates confidence from per-option overall scores and optional
    /// qualitative signals.
    ///
    /// With fewer than two scores there is nothing to differentiate, so
    /// the baseline is returned as-is. Otherwise the estimate grows with
    /// the spread between the best and worst score, gains bounded
    /// independent bonuses from the qualitative signals, and is clamped
    /// to `[baseline, ceiling]`. The result carries one decimal place.
    pub fn estimate(&self, overall_scores: &[f64], signals: &QualitySignals<'_>) -> f64 {
        if overall_scores.len() < 2 {
            return round_tenth(self.baseline);
        }

        let max = overall_scores.iter().cloned().fold(f64::MIN, f64::max);
        let min = overall_scores.iter().cloned().fold(f64::MAX, f64::min);
        let range = max - min;

        // Greater score differentiation means higher confidence; nearly
        // tied options must not produce a confident result, hence the
        // floor at the baseline.
        let base = (self.spread_intercept + (range / 100.0) * self.spread_weight)
            .max(self.baseline);

        let mut bonus = 0.0;
        if word_count(signals.reasoning) > self.reasoning_min_words {
            bonus += self.reasoning_bonus;
        }
        if signals.insight_count >= self.insight_min_count {
            bonus += self.insight_bonus;
        }
        if word_count(signals.comparative) > self.comparative_min_words {
            bonus += self.comparative_bonus;
        }

        round_tenth((base + bonus).min(self.ceiling).max(0.0))
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
