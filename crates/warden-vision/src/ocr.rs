use std::io::Write;
use std::process::{Command, Stdio};
use thiserror::Error;
use tracing::debug;

/// Page segmentation mode 6: a single uniform block of text. Screenshots of
/// editors and terminals are blocky, not page-shaped.
const TESSERACT_PSM: &str = "6";

#[derive(Debug, Error)]
pub enum OcrError {
    /// The engine is not installed at all. Callers surface this as
    /// `Indeterminate`, never as a clean pass.
    #[error("ocr engine is not installed")]
    EngineMissing,

    #[error("ocr extraction failed: {0}")]
    Failed(String),
}

/// The external text-extraction collaborator: image bytes in, plain text
/// out, or a distinguishable "engine unavailable" condition.
pub trait OcrEngine: Send + Sync {
    fn is_available(&self) -> bool;
    fn extract_text(&self, png: &[u8]) -> Result<String, OcrError>;
}

/// Drives the `tesseract` binary over stdin/stdout. Extraction is CPU-bound
/// and blocking; `ImageScanner` runs it on the blocking pool.
pub struct TesseractOcr {
    command: String,
    available: bool,
}

impl TesseractOcr {
    pub fn new(command: impl Into<String>) -> Self {
        let command = command.into();
        let available = Command::new(&command)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false);
        debug!(command = %command, available, "probed ocr engine");
        Self { command, available }
    }
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new("tesseract")
    }
}

impl OcrEngine for TesseractOcr {
    fn is_available(&self) -> bool {
        self.available
    }

    fn extract_text(&self, png: &[u8]) -> Result<String, OcrError> {
        let mut child = Command::new(&self.command)
            .args(["stdin", "stdout", "--psm", TESSERACT_PSM])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    OcrError::EngineMissing
                } else {
                    OcrError::Failed(e.to_string())
                }
            })?;

        {
            let mut stdin = child
                .stdin
                .take()
                .ok_or_else(|| OcrError::Failed("stdin not captured".to_string()))?;
            stdin
                .write_all(png)
                .map_err(|e| OcrError::Failed(e.to_string()))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| OcrError::Failed(e.to_string()))?;

        if !output.status.success() {
            return Err(OcrError::Failed(format!(
                "tesseract exited with {}",
                output.status
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_is_unavailable() {
        let engine = TesseractOcr::new("definitely-not-a-real-ocr-binary");
        assert!(!engine.is_available());
    }

    #[test]
    fn missing_binary_reports_engine_missing_at_call_time() {
        let engine = TesseractOcr::new("definitely-not-a-real-ocr-binary");
        match engine.extract_text(b"irrelevant") {
            Err(OcrError::EngineMissing) => {}
            other => panic!("expected EngineMissing, got {other:?}"),
        }
    }
}
