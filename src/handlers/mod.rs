pub mod auth_handler;
pub mod catalog_handler;
pub mod editor_handler;
pub mod generation_handler;

use actix_web::web;

pub use auth_handler::{login, logout, me};
pub use catalog_handler::{get_catalog, get_theme, health_check, set_theme, toggle_theme};
pub use editor_handler::{
    apply_editor, clear_editor, export_pdf, export_word, get_editor, update_editor,
};
pub use generation_handler::{generate, generation_events, get_generation};

/// Registers every route; shared by `main` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(get_catalog)
        .service(get_theme)
        .service(set_theme)
        .service(toggle_theme)
        .service(login)
        .service(logout)
        .service(me)
        .service(generate)
        .service(get_generation)
        .service(generation_events)
        .service(get_editor)
        .service(update_editor)
        .service(apply_editor)
        .service(clear_editor)
        .service(export_pdf)
        .service(export_word);
}
