pub mod generation_handler;
pub mod health_handler;

use actix_web::{error::InternalError, web};

use crate::services::http_helpers::bad_request;

pub use generation_handler::{generate_audio, generate_code, generate_text, generate_visual};
pub use health_handler::health_check;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(generate_text)
        .service(generate_code)
        .service(generate_audio)
        .service(generate_visual);
}

/// Malformed or mistyped request bodies get the same 400 envelope as
/// validation failures instead of actix's plain-text error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected request body: {}", err);
        let response = bad_request(format!("Invalid request body: {}", err));
        InternalError::from_response(err, response).into()
    })
}
