use actix_web::web;

use crate::modules::file_upload::{handle, model::UploadConfig, repository::FileRepository};

pub fn configure<R>(cfg: &mut web::ServiceConfig, config: &UploadConfig)
where
    R: FileRepository + Send + Sync + 'static,
{
    cfg.service(
        web::resource("/upload")
            .route(web::post().to(handle::upload_files::<R>))
            .route(web::get().to(handle::upload_index::<R>)),
    )
    .service(web::resource("/files").route(web::get().to(handle::list_files::<R>)))
    .service(actix_files::Files::new(&config.base_url, &config.upload_dir));
}
