use std::sync::Arc;
use std::time::Duration;

use image::imageops::FilterType;
use tracing::{debug, error, warn};
use url::Url;
use warden_core::{Verdict, WardenError, WardenResult};

use crate::ocr::{OcrEngine, OcrError};

pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;
pub const MAX_IMAGE_DIMENSION: u32 = 2000;

/// Runs OCR-extracted image text through the code classifier.
///
/// The failure mapping is deliberately asymmetric: infrastructure failures
/// (fetch errors, oversized payloads) resolve to `NoCodeDetected` so a
/// flaky network never blocks content, while a missing or failing OCR
/// engine resolves to `Indeterminate` because the content was never
/// verified at all.
pub struct ImageScanner {
    client: reqwest::Client,
    engine: Arc<dyn OcrEngine>,
}

impl ImageScanner {
    pub fn new(engine: Arc<dyn OcrEngine>) -> Self {
        Self {
            client: reqwest::Client::new(),
            engine,
        }
    }

    /// Full image protocol: capability check, bounded fetch, size cap,
    /// then the byte path. Never returns an error; every failure resolves
    /// to one of the three verdicts.
    pub async fn classify_image(&self, url: &Url) -> Verdict {
        if !self.engine.is_available() {
            warn!("ocr engine unavailable, skipping image fetch");
            return Verdict::Indeterminate;
        }

        let bytes = match self.fetch_image(url).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(url = %url, error = %e, "image fetch failed");
                return Verdict::NoCodeDetected;
            }
        };

        self.classify_bytes(&bytes).await
    }

    async fn fetch_image(&self, url: &Url) -> WardenResult<Vec<u8>> {
        let resp = self
            .client
            .get(url.clone())
            .timeout(FETCH_TIMEOUT)
            .send()
            .await?
            .error_for_status()?;

        if let Some(len) = resp.content_length() {
            if len > MAX_IMAGE_BYTES as u64 {
                return Err(WardenError::Image(format!(
                    "payload is {} bytes, cap is {}",
                    len, MAX_IMAGE_BYTES
                )));
            }
        }

        let bytes = resp.bytes().await?;
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(WardenError::Image(format!(
                "payload is {} bytes, cap is {}",
                bytes.len(),
                MAX_IMAGE_BYTES
            )));
        }
        Ok(bytes.to_vec())
    }

    /// Decode, downscale, extract, classify. Split out from the fetch so
    /// already-held bytes (and tests) skip the network entirely.
    pub async fn classify_bytes(&self, bytes: &[u8]) -> Verdict {
        let mut img = match image::load_from_memory(bytes) {
            Ok(img) => img,
            Err(e) => {
                warn!(error = %e, "image decode failed");
                return Verdict::Indeterminate;
            }
        };

        // Bound OCR latency on screenshots from high-dpi displays.
        if img.width() > MAX_IMAGE_DIMENSION || img.height() > MAX_IMAGE_DIMENSION {
            img = img.resize(MAX_IMAGE_DIMENSION, MAX_IMAGE_DIMENSION, FilterType::Lanczos3);
        }

        let mut png = Vec::new();
        if let Err(e) = img.write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
        {
            warn!(error = %e, "image re-encode failed");
            return Verdict::Indeterminate;
        }

        let engine = Arc::clone(&self.engine);
        let extracted = tokio::task::spawn_blocking(move || engine.extract_text(&png)).await;

        let text = match extracted {
            Ok(Ok(text)) => text,
            Ok(Err(OcrError::EngineMissing)) => {
                error!("ocr engine missing at call time");
                return Verdict::Indeterminate;
            }
            Ok(Err(OcrError::Failed(e))) => {
                warn!(error = %e, "ocr extraction failed");
                return Verdict::Indeterminate;
            }
            Err(e) => {
                warn!(error = %e, "ocr task aborted");
                return Verdict::Indeterminate;
            }
        };

        if text.trim().is_empty() {
            debug!("no text extracted from image");
            return Verdict::NoCodeDetected;
        }

        debug!(chars = text.len(), "extracted image text");
        Verdict::from_code_flag(warden_detect::classify_text(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubOcr {
        available: bool,
        result: Result<String, &'static str>,
    }

    impl StubOcr {
        fn returning(text: &str) -> Self {
            Self {
                available: true,
                result: Ok(text.to_string()),
            }
        }

        fn unavailable() -> Self {
            Self {
                available: false,
                result: Ok(String::new()),
            }
        }

        fn failing(msg: &'static str) -> Self {
            Self {
                available: true,
                result: Err(msg),
            }
        }
    }

    impl OcrEngine for StubOcr {
        fn is_available(&self) -> bool {
            self.available
        }

        fn extract_text(&self, _png: &[u8]) -> Result<String, OcrError> {
            match &self.result {
                Ok(text) => Ok(text.clone()),
                Err(msg) => Err(OcrError::Failed(msg.to_string())),
            }
        }
    }

    fn scanner(engine: StubOcr) -> ImageScanner {
        ImageScanner::new(Arc::new(engine))
    }

    fn tiny_png() -> Vec<u8> {
        let img = image::DynamicImage::new_rgba8(32, 32);
        let mut buf = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    // Port 9 is unroutable here; a fetch attempt would fail and map to
    // NoCodeDetected, so Indeterminate proves the fetch was never tried.
    #[tokio::test]
    async fn unavailable_engine_short_circuits_before_fetch() {
        let scanner = scanner(StubOcr::unavailable());
        let url = Url::parse("http://127.0.0.1:9/screenshot.png").unwrap();
        assert_eq!(scanner.classify_image(&url).await, Verdict::Indeterminate);
    }

    #[tokio::test]
    async fn fetch_failure_maps_to_no_code() {
        let scanner = scanner(StubOcr::returning("def f():\n    return 1"));
        let url = Url::parse("http://127.0.0.1:9/screenshot.png").unwrap();
        assert_eq!(scanner.classify_image(&url).await, Verdict::NoCodeDetected);
    }

    #[tokio::test]
    async fn empty_extraction_maps_to_no_code() {
        let scanner = scanner(StubOcr::returning("   \n  "));
        assert_eq!(
            scanner.classify_bytes(&tiny_png()).await,
            Verdict::NoCodeDetected
        );
    }

    #[tokio::test]
    async fn extracted_code_is_detected() {
        let scanner = scanner(StubOcr::returning(
            "def calculate_grade(score):\n    if score >= 90:\n        return 'A'\n    else:\n        return 'B'",
        ));
        assert_eq!(
            scanner.classify_bytes(&tiny_png()).await,
            Verdict::CodeDetected
        );
    }

    #[tokio::test]
    async fn extracted_prose_is_not_code() {
        let scanner = scanner(StubOcr::returning(
            "please help me, i don't understand this assignment at all",
        ));
        assert_eq!(
            scanner.classify_bytes(&tiny_png()).await,
            Verdict::NoCodeDetected
        );
    }

    #[tokio::test]
    async fn ocr_runtime_failure_is_indeterminate() {
        let scanner = scanner(StubOcr::failing("segfault in engine"));
        assert_eq!(
            scanner.classify_bytes(&tiny_png()).await,
            Verdict::Indeterminate
        );
    }

    #[tokio::test]
    async fn undecodable_payload_is_indeterminate() {
        let scanner = scanner(StubOcr::returning("unused"));
        assert_eq!(
            scanner.classify_bytes(b"not an image at all").await,
            Verdict::Indeterminate
        );
    }
}
