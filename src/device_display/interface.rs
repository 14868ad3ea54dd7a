use std::error::Error;

/// A small status panel: a handful of text lines plus a surface for the
/// annotated frame returned by the detection endpoint.
pub trait DeviceDisplay: Send + Sync {
    /// Bring up the display surface.
    #[allow(dead_code)]
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Clear all text lines. The last shown frame is kept.
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Write text to a line (0-based). Errors on an out-of-range line;
    /// text beyond `chars_per_line` is truncated.
    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Show an annotated frame (encoded PNG bytes).
    fn show_frame(&mut self, png: &[u8]) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn num_lines(&self) -> u8 {
        8
    }

    #[allow(dead_code)]
    fn chars_per_line(&self) -> u8 {
        32
    }
}
