use serde::Serialize;
use tokio::sync::RwLock;

use crate::{
    models::{
        domain::{
            export::DEFAULT_FILENAME_STEM, ExportOptions, PageOrientation,
        },
        dto::request::UpdateEditorRequest,
    },
    services::export_formatter::{self, PdfDocument, WordDocument},
};

/// Working copy of the notes plus the preview the user last applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NotesEditor {
    pub content: String,
    pub preview: String,
    pub options: ExportOptions,
}

impl NotesEditor {
    /// A fresh generation replaces both panes; an empty one leaves them alone.
    pub fn load_generated(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.content = text.to_string();
        self.preview = text.to_string();
    }

    pub fn edit(&mut self, content: String) {
        self.content = content;
    }

    pub fn apply(&mut self) {
        self.preview = self.content.clone();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.preview.clear();
    }

    pub fn set_font_size(&mut self, size: u8) {
        self.options.font_size_px = ExportOptions::clamp_font_size(size);
    }

    pub fn set_line_height(&mut self, line_height: f32) {
        self.options.line_height = ExportOptions::clamp_line_height(line_height);
    }

    pub fn set_filename(&mut self, filename: &str) {
        let stem = filename.trim();
        self.options.filename_stem = if stem.is_empty() {
            DEFAULT_FILENAME_STEM.to_string()
        } else {
            stem.to_string()
        };
    }

    pub fn update(&mut self, request: UpdateEditorRequest) {
        if let Some(content) = request.content {
            self.edit(content);
        }
        if let Some(size) = request.font_size_px {
            self.set_font_size(size);
        }
        if let Some(line_height) = request.line_height {
            self.set_line_height(line_height);
        }
        if let Some(filename) = request.filename {
            self.set_filename(&filename);
        }
    }
}

/// Shared editor state behind the HTTP handlers.
#[derive(Default)]
pub struct EditorService {
    editor: RwLock<NotesEditor>,
}

impl EditorService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> NotesEditor {
        self.editor.read().await.clone()
    }

    pub async fn load_generated(&self, text: &str) {
        self.editor.write().await.load_generated(text);
    }

    pub async fn update(&self, request: UpdateEditorRequest) -> NotesEditor {
        let mut editor = self.editor.write().await;
        editor.update(request);
        editor.clone()
    }

    pub async fn apply(&self) -> NotesEditor {
        let mut editor = self.editor.write().await;
        editor.apply();
        editor.clone()
    }

    pub async fn clear(&self) -> NotesEditor {
        let mut editor = self.editor.write().await;
        editor.clear();
        editor.clone()
    }

    /// Exports the working content, not the preview.
    pub async fn export_pdf(&self, orientation: PageOrientation) -> PdfDocument {
        let editor = self.editor.read().await;
        export_formatter::pdf_document(&editor.content, &editor.options, orientation)
    }

    pub async fn export_word(&self) -> WordDocument {
        let editor = self.editor.read().await;
        export_formatter::word_document(&editor.content, &editor.options)
    }
}
