/// Largest accepted size of a single uploaded file, in bytes.
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;
/// Largest number of files accepted in one upload request.
pub const MAX_FILES: usize = 10;
/// Multipart field that carries the uploaded files.
pub const UPLOAD_FIELD: &str = "meusArquivos";
pub const ALLOWED_MIME_TYPES: [&str; 2] = ["image/png", "image/jpeg"];
pub const UPLOAD_DIR: &str = "./uploads";
pub const UPLOAD_BASE_URL: &str = "/uploads";

pub struct Env {
    pub ip: String,
    pub port: u16,
}

impl Env {
    fn new() -> Self {
        let ip = std::env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16 integer");
        Env { ip, port }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
