//! Paragraph chunking and document serialization for the PDF and Word downloads.
//!
//! Nothing here touches the filesystem: the PDF output is a render job for a
//! client-side rasterizer, the Word output is an HTML string saved as `.doc`.

use serde::Serialize;

use crate::models::domain::{ExportOptions, PageOrientation};

pub const EMPTY_NOTES_FALLBACK: &str = "No notes content.";
pub const WORD_MIME_TYPE: &str = "application/msword";

const FONT_STACK: &str = "'Open Sans', 'Noto Sans Devanagari', sans-serif";
const PAGE_FORMAT: &str = "a4";
const PAGE_MARGIN_MM: u8 = 10;
const RASTER_SCALE: u8 = 2;
const JPEG_QUALITY: f32 = 0.98;

/// One paragraph of the PDF, kept on a single page when possible.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PdfBlock {
    pub text: String,
    pub font_size_px: u8,
    pub line_height: f32,
    pub keep_together: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PdfRenderSettings {
    pub filename: String,
    pub format: &'static str,
    pub orientation: PageOrientation,
    pub margin_mm: u8,
    pub scale: u8,
    pub image_quality: f32,
    pub pagebreak_modes: [&'static str; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PdfDocument {
    pub settings: PdfRenderSettings,
    pub blocks: Vec<PdfBlock>,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordDocument {
    pub filename: String,
    pub mime_type: &'static str,
    pub html: String,
}

/// Splits on blank lines, dropping whitespace-only paragraphs. Single line
/// breaks stay inside their paragraph.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .split("\n\n")
        .filter(|paragraph| !paragraph.trim().is_empty())
        .map(str::to_string)
        .collect()
}

fn paragraphs_or_fallback(text: &str) -> Vec<String> {
    let paragraphs = split_paragraphs(text);
    if !paragraphs.is_empty() {
        return paragraphs;
    }
    if text.is_empty() {
        vec![EMPTY_NOTES_FALLBACK.to_string()]
    } else {
        vec![text.to_string()]
    }
}

pub fn to_pdf_blocks(text: &str, font_size_px: u8, line_height: f32) -> Vec<PdfBlock> {
    paragraphs_or_fallback(text)
        .into_iter()
        .map(|text| PdfBlock {
            text,
            font_size_px,
            line_height,
            keep_together: true,
        })
        .collect()
}

fn paragraph_style(font_size_px: u8, line_height: f32) -> String {
    format!(
        "font-size: {}px; line-height: {}; margin-bottom: 1em;",
        font_size_px, line_height
    )
}

/// HTML fragment handed to the rasterizer; always light-on-white regardless of theme.
pub fn pdf_html_fragment(blocks: &[PdfBlock]) -> String {
    let mut html = format!(
        "<div style=\"font-family: {}; padding: 20px; background: #fff; color: #000;\">",
        FONT_STACK
    );
    for block in blocks {
        let avoid = if block.keep_together {
            " white-space: pre-wrap; page-break-inside: avoid; break-inside: avoid;"
        } else {
            " white-space: pre-wrap;"
        };
        html.push_str(&format!(
            "<p style=\"{}{}\">{}</p>",
            paragraph_style(block.font_size_px, block.line_height),
            avoid,
            escape_html(&block.text)
        ));
    }
    html.push_str("</div>");
    html
}

pub fn pdf_document(text: &str, options: &ExportOptions, orientation: PageOrientation) -> PdfDocument {
    let blocks = to_pdf_blocks(text, options.font_size_px, options.line_height);
    let html = pdf_html_fragment(&blocks);

    PdfDocument {
        settings: PdfRenderSettings {
            filename: options.pdf_filename(),
            format: PAGE_FORMAT,
            orientation,
            margin_mm: PAGE_MARGIN_MM,
            scale: RASTER_SCALE,
            image_quality: JPEG_QUALITY,
            pagebreak_modes: ["css", "legacy"],
        },
        blocks,
        html,
    }
}

/// Office-flavoured HTML that word processors open as a document.
pub fn to_word_document(text: &str, font_size_px: u8, line_height: f32, title: &str) -> String {
    let style = paragraph_style(font_size_px, line_height);
    let paragraphs: String = paragraphs_or_fallback(text)
        .iter()
        .map(|paragraph| {
            format!(
                "<p style=\"{} page-break-inside: avoid;\">{}</p>",
                style,
                escape_html(paragraph).replace('\n', "<br/>")
            )
        })
        .collect();

    format!(
        "<html xmlns:o='urn:schemas-microsoft-com:office:office' xmlns:w='urn:schemas-microsoft-com:office:word' xmlns='http://www.w3.org/TR/REC-html40'>\
<head><meta charset=\"utf-8\"><title>{}</title>\
<style>body {{ font-family: {}; }}</style></head>\
<body>{}</body></html>",
        escape_html(title),
        FONT_STACK,
        paragraphs
    )
}

pub fn word_document(text: &str, options: &ExportOptions) -> WordDocument {
    let filename = options.word_filename();
    let html = to_word_document(text, options.font_size_px, options.line_height, &filename);

    WordDocument {
        filename,
        mime_type: WORD_MIME_TYPE,
        html,
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
