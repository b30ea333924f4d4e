use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    Notes,
    Questions,
}

/// One of the five note templates. Unknown values decode to `Detailed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum NoteStyle {
    #[default]
    Detailed,
    CaseStudy,
    Simpler,
    InDepth,
    ShortNotes,
}

impl NoteStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteStyle::Detailed => "detailed",
            NoteStyle::CaseStudy => "case_study",
            NoteStyle::Simpler => "simpler",
            NoteStyle::InDepth => "in_depth",
            NoteStyle::ShortNotes => "short_notes",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "detailed" => NoteStyle::Detailed,
            "case_study" => NoteStyle::CaseStudy,
            "simpler" => NoteStyle::Simpler,
            "in_depth" => NoteStyle::InDepth,
            "short_notes" => NoteStyle::ShortNotes,
            other => {
                log::warn!("Unknown note style '{}', using detailed notes", other);
                NoteStyle::Detailed
            }
        }
    }
}

impl From<String> for NoteStyle {
    fn from(value: String) -> Self {
        NoteStyle::from_value(&value)
    }
}

impl std::fmt::Display for NoteStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form values captured for a single submit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub mode: GenerationMode,
    pub subject: String,
    pub semester: u8,
    pub note_style: NoteStyle,
    pub language: String,
    pub keywords: String,
}

impl GenerationRequest {
    pub fn new(mode: GenerationMode, subject: &str) -> Self {
        Self {
            mode,
            subject: subject.to_string(),
            semester: 1,
            note_style: NoteStyle::Detailed,
            language: "English".to_string(),
            keywords: String::new(),
        }
    }

    pub fn with_semester(mut self, semester: u8) -> Self {
        self.semester = semester;
        self
    }

    pub fn with_note_style(mut self, note_style: NoteStyle) -> Self {
        self.note_style = note_style;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = keywords.into();
        self
    }

    pub fn has_subject(&self) -> bool {
        !self.subject.trim().is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Source {
    pub uri: String,
    pub title: String,
}

impl Source {
    pub fn new(uri: &str, title: &str) -> Self {
        Self {
            uri: uri.to_string(),
            title: title.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerationResult {
    /// Markdown as returned by the model.
    pub text: String,
    pub sources: Vec<Source>,
}
