use actix_web::{get, web};

use crate::api::{error, success};
use crate::modules::{
    file_upload::{FileRepositoryDisk, FileUploadService},
    user::service::UserService,
};

pub mod file_upload;
pub mod user {
    pub mod schema;
    pub mod model;
    pub mod repository;
    pub mod repository_memory;
    pub mod handle;
    pub mod service;
    pub mod route;
}

#[get("/")]
async fn health_check() -> Result<success::Success<()>, error::Error> {
    Ok(success::Success::ok(None).message("Upload server running"))
}

/// Registers every route of the service together with the state it needs.
pub fn configure(
    user_service: UserService,
    upload_service: FileUploadService<FileRepositoryDisk>,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let upload_config = upload_service.config().clone();
        cfg.app_data(web::Data::new(user_service))
            .app_data(web::Data::new(upload_service))
            .service(health_check)
            .configure(user::route::configure)
            .configure(|cfg| {
                file_upload::route::configure::<FileRepositoryDisk>(cfg, &upload_config)
            });
    }
}
