use serde::Serialize;

use crate::models::domain::NoteStyle;

pub const SEMESTERS: [u8; 4] = [1, 2, 3, 4];

const SEMESTER_1_SUBJECTS: &[&str] = &[
    "MANAGEMENT PRINCIPAL AND PROCESS",
    "MANAGERIAL ECONOMICS",
    "BUSINESS STATISTICS",
    "BUSINESS ENVIRONMENT",
    "ACCOUNTING FOR MANAGERS",
    "COMPUTER APPLICATION IN MANAGEMENT",
    "BUSINESS LAW",
    "BUSINESS COMMUNICATION",
];

const SEMESTER_2_SUBJECTS: &[&str] = &[
    "ORGANIZATIONAL BEHAVIOUR",
    "MANAGERIAL ACCOUNTING",
    "RESEARCH METHODOLOGY",
    "PRODUCTION AND OPERATIONS MANAGEMENT",
    "MARKETING MANAGEMENT",
    "FINANCIAL MANAGEMENT",
    "HUMAN RESOURCE MANAGEMENT",
];

const SEMESTER_3_SUBJECTS: &[&str] = &[
    "ENTREPRENEURSHIP DEVELOPMENT AND PROJECT MANAGEMENT",
    "MANAGEMENT SCIENCES",
    "INTERNATIONAL BUSINESS MANAGEMENT",
    "SPECIALIZATION - MARKETING",
    "SPECIALIZATION - FINANCE",
    "SPECIALIZATION - HUMAN RESOURCE MANAGEMENT",
    "SPECIALIZATION - INFORMATION TECHNOLOGY",
];

const SEMESTER_4_SUBJECTS: &[&str] = &[
    "CORPORATE MANAGEMENT",
    "STRATEGIC MANAGEMENT",
    "MANAGEMENT INFORMATION SYSTEM",
    "RURAL MANAGEMENT",
    "OPTIONAL - INTERNATIONAL MARKETING",
    "OPTIONAL - MARKETING OF SERVICES",
    "OPTIONAL - SECURITY ANALYSIS AND PORTFOLIO MANAGEMENT",
    "OPTIONAL - CORPORATE TAX MANAGEMENT",
    "OPTIONAL - ORGANIZATIONAL CHANGE AND INTERVENTION STRATEGIES",
    "OPTIONAL - MANAGEMENT TRAINING AND DEVELOPMENT",
    "OPTIONAL - BUSINESS PROCESS RE ENGINEERING AND ERP",
    "OPTIONAL - COMPUTER GRAPHICS AND MULTIMEDIA MANAGEMENT",
];

/// Subjects taught in a semester. Unknown semesters have none.
pub fn subjects_for(semester: u8) -> &'static [&'static str] {
    match semester {
        1 => SEMESTER_1_SUBJECTS,
        2 => SEMESTER_2_SUBJECTS,
        3 => SEMESTER_3_SUBJECTS,
        4 => SEMESTER_4_SUBJECTS,
        _ => &[],
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NoteTypeOption {
    #[serde(rename = "value")]
    pub style: NoteStyle,
    pub label: &'static str,
    pub prompt_prefix: &'static str,
}

/// Presentation templates for notes. The first entry is the fallback.
pub const NOTE_TYPES: [NoteTypeOption; 5] = [
    NoteTypeOption {
        style: NoteStyle::Detailed,
        label: "Detailed Notes (500+ Words)",
        prompt_prefix: "Generate a detailed and comprehensive study guide of at least 500 - 1000 words.",
    },
    NoteTypeOption {
        style: NoteStyle::CaseStudy,
        label: "Case Study / Examples",
        prompt_prefix: "Provide case studies and examples related to the topic from India and the world in detail.",
    },
    NoteTypeOption {
        style: NoteStyle::Simpler,
        label: "Simpler Explanation",
        prompt_prefix: "Explain the concept in simple, easy-to-understand language, in at least 500 words.",
    },
    NoteTypeOption {
        style: NoteStyle::InDepth,
        label: "In-Depth Analysis",
        prompt_prefix: "Provide an in-depth analytical overview of the topic.",
    },
    NoteTypeOption {
        style: NoteStyle::ShortNotes,
        label: "Short bullet notes",
        prompt_prefix: "Generate concise, bullet-pointed notes, yet detailed covering all parts for last-minute revision.",
    },
];

pub fn note_type_for(style: NoteStyle) -> &'static NoteTypeOption {
    NOTE_TYPES
        .iter()
        .find(|option| option.style == style)
        .unwrap_or(&NOTE_TYPES[0])
}

pub const LANGUAGES: [&str; 4] = ["English", "Hindi", "Spanish", "German"];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct UniversityLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const UNIVERSITY_LINKS: [UniversityLink; 3] = [
    UniversityLink {
        label: "BHU MBA",
        url: "https://www.bhu.ac.in/Images/files/MBA%20Course%20Structure%202012-13%20onwards.pdf",
    },
    UniversityLink {
        label: "BHU MBA IB",
        url: "https://www.bhu.ac.in/Content/Syllabus/Syllabus_3309720200412010054.pdf",
    },
    UniversityLink {
        label: "MGKVP MBA",
        url: "https://www.mgkvp.ac.in/Uploads/SyllabusHome/M.B.A._193.pdf",
    },
];
