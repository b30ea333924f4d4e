pub mod export_formatter;
pub mod generation_client;
pub mod generation_orchestrator;
pub mod notes_editor;
pub mod prompt_builder;
pub mod session_service;
