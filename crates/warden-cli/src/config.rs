use serde::Deserialize;
use warden_core::{ScoreWeights, WardenError, WardenResult};

/// Tuning override file. Any field left out keeps its shipped default, so a
/// recalibration run only states what it changes.
#[derive(Deserialize)]
pub struct TuningFile {
    #[serde(default = "default_keyword_weight")]
    pub keyword_weight: f64,
    #[serde(default = "default_structure_weight")]
    pub structure_weight: f64,
    #[serde(default = "default_syntax_weight")]
    pub syntax_weight: f64,
    #[serde(default = "default_context_weight")]
    pub context_weight: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_keyword_weight() -> f64 {
    warden_core::KEYWORD_WEIGHT
}
fn default_structure_weight() -> f64 {
    warden_core::STRUCTURE_WEIGHT
}
fn default_syntax_weight() -> f64 {
    warden_core::SYNTAX_WEIGHT
}
fn default_context_weight() -> f64 {
    warden_core::CONTEXT_WEIGHT
}
fn default_threshold() -> f64 {
    warden_core::CODE_THRESHOLD
}

impl TuningFile {
    pub fn from_file(path: &str) -> WardenResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| WardenError::Config(e.to_string()))
    }

    pub fn weights(&self) -> ScoreWeights {
        ScoreWeights {
            keyword: self.keyword_weight,
            structure: self.structure_weight,
            syntax: self.syntax_weight,
            context: self.context_weight,
            threshold: self.threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_shipped_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "threshold = 0.45").unwrap();

        let tuning = TuningFile::from_file(file.path().to_str().unwrap()).unwrap();
        let weights = tuning.weights();
        assert_eq!(weights.threshold, 0.45);
        assert_eq!(weights.keyword, warden_core::KEYWORD_WEIGHT);
        assert_eq!(weights.structure, warden_core::STRUCTURE_WEIGHT);
    }

    #[test]
    fn garbage_file_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "threshold = \"not a number\"").unwrap();

        assert!(matches!(
            TuningFile::from_file(file.path().to_str().unwrap()),
            Err(WardenError::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            TuningFile::from_file("/no/such/warden.toml"),
            Err(WardenError::Io(_))
        ));
    }
}
