use actix_web::web::{self, ServiceConfig};

use crate::api::error;
use crate::modules::user::{handle::*, model::REQUIRED_FIELDS};

/// Any body that does not parse as a registration is answered like a
/// registration with missing fields.
fn register_body_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Unreadable register body: {}", err);
        error::Error::BadRequest(REQUIRED_FIELDS.into()).into()
    })
}

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        web::resource("/register")
            .app_data(register_body_config())
            .route(web::post().to(register)),
    )
    .service(list_users);
}
