use serde::Serialize;

use crate::{
    constants::{subjects_for, NoteTypeOption, UniversityLink, LANGUAGES, NOTE_TYPES, SEMESTERS, UNIVERSITY_LINKS},
    models::domain::{Theme, User},
};

#[derive(Debug, Clone, Serialize)]
pub struct SemesterDto {
    pub semester: u8,
    pub subjects: &'static [&'static str],
}

/// Everything the form needs to render its dropdowns and links.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogDto {
    pub semesters: Vec<SemesterDto>,
    pub note_types: &'static [NoteTypeOption],
    pub languages: &'static [&'static str],
    pub university_links: &'static [UniversityLink],
}

impl CatalogDto {
    pub fn build() -> Self {
        CatalogDto {
            semesters: SEMESTERS
                .iter()
                .map(|&semester| SemesterDto {
                    semester,
                    subjects: subjects_for(semester),
                })
                .collect(),
            note_types: &NOTE_TYPES,
            languages: &LANGUAGES,
            university_links: &UNIVERSITY_LINKS,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub user: User,
    pub theme: Theme,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
