pub mod catalog;

pub use catalog::{
    note_type_for, subjects_for, NoteTypeOption, UniversityLink, LANGUAGES, NOTE_TYPES,
    SEMESTERS, UNIVERSITY_LINKS,
};
