pub mod ocr;
pub mod scan;

pub use ocr::{OcrEngine, OcrError, TesseractOcr};
pub use scan::ImageScanner;
