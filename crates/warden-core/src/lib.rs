pub mod error;
pub mod types;

pub use error::{WardenError, WardenResult};
pub use types::{
    ScoreVector, ScoreWeights, Verdict, CODE_THRESHOLD, CONTEXT_WEIGHT, KEYWORD_WEIGHT,
    MIN_CLASSIFIABLE_CHARS, STRUCTURE_WEIGHT, SYNTAX_WEIGHT,
};
