use serde::Deserialize;
use validator::Validate;

use crate::models::domain::{
    export::{MAX_FONT_SIZE_PX, MIN_FONT_SIZE_PX},
    GenerationMode, GenerationRequest, NoteStyle, PageOrientation, Theme,
};

fn default_semester() -> u8 {
    1
}

fn default_language() -> String {
    "English".to_string()
}

/// Form fields behind the "Generate Notes" / "Generate Answer" buttons.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateRequestDto {
    pub mode: GenerationMode,

    // Emptiness is checked by the orchestrator so the message stays transient.
    #[serde(default)]
    #[validate(length(max = 200))]
    pub subject: String,

    #[serde(default = "default_semester")]
    #[validate(range(min = 1, max = 4, message = "Semester must be between 1 and 4"))]
    pub semester: u8,

    #[serde(default)]
    pub note_style: NoteStyle,

    #[serde(default = "default_language")]
    #[validate(length(min = 1, max = 50))]
    pub language: String,

    #[serde(default)]
    #[validate(length(max = 5000))]
    pub keywords: String,
}

impl From<GenerateRequestDto> for GenerationRequest {
    fn from(dto: GenerateRequestDto) -> Self {
        GenerationRequest {
            mode: dto.mode,
            subject: dto.subject,
            semester: dto.semester,
            note_style: dto.note_style,
            language: dto.language,
            keywords: dto.keywords,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThemeRequest {
    pub theme: Theme,
}

/// Partial update of the notes editor; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateEditorRequest {
    pub content: Option<String>,

    #[validate(range(min = MIN_FONT_SIZE_PX, max = MAX_FONT_SIZE_PX))]
    pub font_size_px: Option<u8>,

    #[validate(range(min = 1.0, max = 2.5))]
    pub line_height: Option<f32>,

    #[validate(length(max = 100))]
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PdfExportRequest {
    #[serde(default)]
    pub orientation: PageOrientation,
}
