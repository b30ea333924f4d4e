pub mod export;
pub mod generation;
pub mod user;

pub use export::{ExportOptions, PageOrientation};
pub use generation::{GenerationMode, GenerationRequest, GenerationResult, NoteStyle, Source};
pub use user::{Theme, User};
