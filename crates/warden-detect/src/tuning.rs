//! Every empirically tuned knob in the scorers, in one place. The
//! aggregation weights and decision threshold live in `warden_core::types`
//! next to `ScoreWeights`; everything below is internal to the individual
//! scorers.

// Keyword scorer. Strong indicators are presence-tested and uncapped
// individually; weak indicators are occurrence-counted and capped so a
// stray "if" in a sentence barely moves the score.
pub const STRONG_KEYWORD_WEIGHT: f64 = 0.4;
pub const WEAK_KEYWORD_WEIGHT: f64 = 0.05;
pub const WEAK_KEYWORD_CAP: usize = 5;

// Structure scorer. Three independent shape bonuses, summed.
pub const MIN_INDENTED_LINES: usize = 3;
pub const INDENT_RATIO_MIN: f64 = 0.5;
pub const INDENT_BONUS: f64 = 0.6;
pub const ENDING_RATIO_MIN: f64 = 0.4;
pub const ENDING_BONUS: f64 = 0.4;
pub const BRACKET_RATIO_MIN: f64 = 0.3;
pub const BRACKET_BONUS: f64 = 0.3;

// Syntax scorer.
pub const CALL_RUN_BONUS: f64 = 0.4;
pub const SINGLE_CALL_BONUS: f64 = 0.2;
pub const MIN_ASSIGNMENTS: usize = 2;
pub const ASSIGNMENT_BONUS: f64 = 0.3;
pub const BRACKET_RUN_HIGH_COUNT: usize = 4;
pub const BRACKET_RUN_HIGH_BONUS: f64 = 0.3;
pub const BRACKET_RUN_LOW_COUNT: usize = 2;
pub const BRACKET_RUN_LOW_BONUS: f64 = 0.15;
pub const COMMENT_BONUS: f64 = 0.2;
pub const BRACE_BLOCK_BONUS: f64 = 0.4;

// Context scorer. Natural-language phrases are checked first and win ties.
pub const NATURAL_STRONG_COUNT: usize = 3;
pub const NATURAL_STRONG_PENALTY: f64 = -0.3;
pub const NATURAL_MILD_PENALTY: f64 = -0.1;
pub const CODE_VOCAB_STRONG_COUNT: usize = 2;
pub const CODE_VOCAB_STRONG_BONUS: f64 = 0.2;
pub const CODE_VOCAB_MILD_BONUS: f64 = 0.1;
