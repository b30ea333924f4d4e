use serde::{Deserialize, Serialize};

pub const MIN_FONT_SIZE_PX: u8 = 10;
pub const MAX_FONT_SIZE_PX: u8 = 32;
pub const MIN_LINE_HEIGHT: f32 = 1.0;
pub const MAX_LINE_HEIGHT: f32 = 2.5;
pub const DEFAULT_FILENAME_STEM: &str = "study-notes";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageOrientation {
    #[default]
    Portrait,
    Landscape,
}

/// Formatting applied when the editor content is exported.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ExportOptions {
    pub font_size_px: u8,
    pub line_height: f32,
    pub filename_stem: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            font_size_px: 16,
            line_height: 1.5,
            filename_stem: DEFAULT_FILENAME_STEM.to_string(),
        }
    }
}

impl ExportOptions {
    pub fn clamp_font_size(size: u8) -> u8 {
        size.clamp(MIN_FONT_SIZE_PX, MAX_FONT_SIZE_PX)
    }

    /// Clamps to the slider range and snaps to its 0.1 step.
    pub fn clamp_line_height(line_height: f32) -> f32 {
        if !line_height.is_finite() {
            return ExportOptions::default().line_height;
        }
        let clamped = line_height.clamp(MIN_LINE_HEIGHT, MAX_LINE_HEIGHT);
        (clamped * 10.0).round() / 10.0
    }

    pub fn pdf_filename(&self) -> String {
        format!("{}.pdf", self.filename_stem)
    }

    pub fn word_filename(&self) -> String {
        format!("{}.doc", self.filename_stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ExportOptions::default();
        assert_eq!(options.font_size_px, 16);
        assert_eq!(options.line_height, 1.5);
        assert_eq!(options.pdf_filename(), "study-notes.pdf");
        assert_eq!(options.word_filename(), "study-notes.doc");
    }

    #[test]
    fn test_clamping() {
        assert_eq!(ExportOptions::clamp_font_size(4), 10);
        assert_eq!(ExportOptions::clamp_font_size(40), 32);
        assert_eq!(ExportOptions::clamp_font_size(18), 18);

        assert_eq!(ExportOptions::clamp_line_height(0.5), 1.0);
        assert_eq!(ExportOptions::clamp_line_height(3.0), 2.5);
        assert_eq!(ExportOptions::clamp_line_height(1.64), 1.6);
        assert_eq!(ExportOptions::clamp_line_height(f32::NAN), 1.5);
    }

    #[test]
    fn test_orientation_serde() {
        let orientation: PageOrientation = serde_json::from_str("\"landscape\"").unwrap();
        assert_eq!(orientation, PageOrientation::Landscape);
    }
}
