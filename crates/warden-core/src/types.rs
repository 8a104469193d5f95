use serde::{Deserialize, Serialize};

/// Aggregation weights for the four detection signals. The vector sums to
/// 1.3: structure and syntax are the most diagnostic signals and are allowed
/// to jointly dominate the total. Flagged for recalibration review rather
/// than normalized, since rescaling would shift detection sensitivity.
pub const KEYWORD_WEIGHT: f64 = 0.3;
pub const STRUCTURE_WEIGHT: f64 = 0.4;
pub const SYNTAX_WEIGHT: f64 = 0.4;
pub const CONTEXT_WEIGHT: f64 = 0.2;

/// Weighted totals at or above this are treated as code.
pub const CODE_THRESHOLD: f64 = 0.6;

/// Messages shorter than this (trimmed) carry too little signal to classify.
pub const MIN_CLASSIFIABLE_CHARS: usize = 15;

/// Outcome of an image scan. Text classification only ever produces the
/// binary subset; `Indeterminate` means the content could not be verified
/// (OCR missing or the image failed to process), which callers must treat
/// as a policy decision, not as a clean pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    CodeDetected,
    NoCodeDetected,
    Indeterminate,
}

impl Verdict {
    pub fn from_code_flag(is_code: bool) -> Self {
        if is_code {
            Verdict::CodeDetected
        } else {
            Verdict::NoCodeDetected
        }
    }
}

/// One score per detection signal, computed fresh per message and never
/// mutated. Keyword, structure and syntax are clamped to [0, 1]; context is
/// the only signed component, a [-0.3, 0.2] adjustment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreVector {
    pub keyword: f64,
    pub structure: f64,
    pub syntax: f64,
    pub context: f64,
}

impl ScoreVector {
    pub fn total(&self, weights: &ScoreWeights) -> f64 {
        self.keyword * weights.keyword
            + self.structure * weights.structure
            + self.syntax * weights.syntax
            + self.context * weights.context
    }
}

/// The tunable heart of the classifier: the signal weights and the decision
/// threshold. Kept as data so recalibration never touches scorer internals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub keyword: f64,
    pub structure: f64,
    pub syntax: f64,
    pub context: f64,
    pub threshold: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            keyword: KEYWORD_WEIGHT,
            structure: STRUCTURE_WEIGHT,
            syntax: SYNTAX_WEIGHT,
            context: CONTEXT_WEIGHT,
            threshold: CODE_THRESHOLD,
        }
    }
}
