use tracing::debug;
use warden_core::{ScoreVector, ScoreWeights, MIN_CLASSIFIABLE_CHARS};

use crate::{context, keyword, structure, syntax};

/// Totals near the threshold are worth logging when chasing tuning drift.
const NEAR_THRESHOLD: f64 = 0.5;

/// Decides whether a message is source code. Pure and synchronous; no I/O.
pub fn classify_text(text: &str) -> bool {
    classify_with(text, &ScoreWeights::default())
}

/// Same decision under an explicit weight vector, for recalibration runs.
pub fn classify_with(text: &str, weights: &ScoreWeights) -> bool {
    if text.trim().chars().count() < MIN_CLASSIFIABLE_CHARS {
        return false;
    }

    let scores = score_text(text);
    let total = scores.total(weights);

    if total > NEAR_THRESHOLD {
        debug!(
            keyword = scores.keyword,
            structure = scores.structure,
            syntax = scores.syntax,
            context = scores.context,
            total,
            "near-threshold classification"
        );
    }

    total >= weights.threshold
}

/// Runs all four scorers over one message. Each call computes a fresh
/// vector; nothing is cached or mutated.
pub fn score_text(text: &str) -> ScoreVector {
    let lower = text.to_lowercase();
    ScoreVector {
        keyword: keyword::score(&lower),
        structure: structure::score(text),
        syntax: syntax::score(text),
        context: context::score(&lower),
    }
}
