use actix_web::{
    middleware::{from_fn, Logger},
    App, HttpServer,
};
use std::sync::{Arc, LazyLock};

use crate::{
    configs::prepare_upload_dir,
    middlewares::cors,
    modules::{
        file_upload::{FileRepositoryDisk, FileUploadService, UploadConfig},
        user::{repository_memory::UserRepositoryMemory, service::UserService},
    },
};

mod api;
mod configs;
mod constants;
mod middlewares;
mod modules;
mod utils;

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Environment variables loaded");
    constants::Env::default()
});

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let env = &*ENV;

    let upload_config = UploadConfig::default();
    prepare_upload_dir(&upload_config.upload_dir)
        .await
        .map_err(|e| {
            log::error!("Failed to prepare upload directory: {:?}", e);
            std::io::Error::other("Upload directory could not be created")
        })?;

    let user_service = UserService::with_dependencies(Arc::new(UserRepositoryMemory::new()));
    let upload_service = FileUploadService::new(
        Arc::new(FileRepositoryDisk::new(&upload_config.upload_dir)),
        upload_config,
    );

    log::info!("Starting server at http://{}:{}", env.ip, env.port);
    HttpServer::new(move || {
        App::new()
            .wrap(from_fn(cors))
            .wrap(Logger::default())
            .configure(modules::configure(user_service.clone(), upload_service.clone()))
    })
    .bind((env.ip.as_str(), env.port))?
    .run()
    .await
}
