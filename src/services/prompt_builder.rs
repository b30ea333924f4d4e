use crate::{
    constants::note_type_for,
    models::domain::{GenerationMode, GenerationRequest},
};

/// Turns the submitted form into the instruction sent to the model.
pub fn build(request: &GenerationRequest) -> String {
    match request.mode {
        GenerationMode::Notes => {
            let prefix = note_type_for(request.note_style).prompt_prefix;
            format!(
                "{} for the MBA subject \"{}\" from Semester {}. Focus on the following concepts and keywords: \"{}\". The output should be a well-structured explanation with clear headings. Language: {}.",
                prefix, request.subject, request.semester, request.keywords, request.language
            )
        }
        GenerationMode::Questions => format!(
            "Generate a long answer (approximately 500 - 1000 words) for the question \"{}\" related to the MBA subject \"{}\" from Semester {} in {}.",
            request.keywords, request.subject, request.semester, request.language
        ),
    }
}
