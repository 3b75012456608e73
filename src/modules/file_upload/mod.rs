pub mod handle;
pub mod model;
pub mod repository;
pub mod repository_disk;
pub mod route;
pub mod schema;
pub mod service;

pub use model::UploadConfig;
pub use repository_disk::FileRepositoryDisk;
pub use service::FileUploadService;
