use actix_multipart::{Field, Multipart};
use actix_web::{http::header::ContentType, web, HttpResponse};
use futures_util::TryStreamExt;
use tera::Tera;

use crate::api::success::Success;
use crate::api::{error, success};
use crate::modules::file_upload::{
    model::IncomingFile,
    repository::FileRepository,
    schema::{FileListResponse, FileSummary, FileUploadResponse, StoredFileEntity},
    service::FileUploadService,
};

fn malformed(_: actix_multipart::MultipartError) -> error::SystemError {
    error::SystemError::bad_request("Malformed multipart request")
}

async fn drain(field: &mut Field) -> Result<(), error::SystemError> {
    while field.try_next().await.map_err(malformed)?.is_some() {}
    Ok(())
}

/// Reads the whole multipart stream, keeping only file parts of the upload
/// field. Type and count are checked before a part's bytes are read; size is
/// checked as chunks arrive, so an oversized part aborts mid-stream.
async fn read_files<R>(
    payload: &mut Multipart,
    service: &FileUploadService<R>,
) -> Result<Vec<IncomingFile>, error::SystemError>
where
    R: FileRepository + Send + Sync,
{
    let field_name = service.config().field_name.as_str();
    let mut files = Vec::new();

    while let Some(mut field) = payload.try_next().await.map_err(malformed)? {
        let in_upload_field = field.name() == Some(field_name);
        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        let Some(original_filename) = filename.filter(|_| in_upload_field) else {
            drain(&mut field).await?;
            continue;
        };

        let mime_type = field
            .content_type()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        service.check_part(files.len(), &mime_type)?;

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(malformed)? {
            service.check_size(bytes.len() + chunk.len())?;
            bytes.extend_from_slice(&chunk);
        }

        files.push(IncomingFile { original_filename, mime_type, bytes });
    }

    Ok(files)
}

/// Upload file handler
pub async fn upload_files<R>(
    mut payload: Multipart,
    service: web::Data<FileUploadService<R>>,
) -> Result<success::Success<FileUploadResponse>, error::Error>
where
    R: FileRepository + Send + Sync + 'static,
{
    let files = read_files(&mut payload, &service)
        .await
        .inspect_err(|e| log::warn!("Upload rejected: {}", e))?;

    let count = files.len();
    let result = service.store_files(files).await?;

    Ok(Success::ok(Some(result)).message(format!("Received {count} file(s).")))
}

/// Stored files as JSON
pub async fn list_files<R>(
    service: web::Data<FileUploadService<R>>,
) -> Result<success::Success<FileListResponse>, error::Error>
where
    R: FileRepository + Send + Sync + 'static,
{
    let files = service.list_files().await?;
    let files = files.into_iter().map(FileSummary::from).collect();
    Ok(Success::ok(Some(FileListResponse { files })))
}

/// Stored files as a browsable HTML page
pub async fn upload_index<R>(
    service: web::Data<FileUploadService<R>>,
) -> Result<HttpResponse, error::Error>
where
    R: FileRepository + Send + Sync + 'static,
{
    let files = service.list_files().await?;
    let page = render_index(&files, &service.config().base_url)?;
    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(page))
}

// The `.html` name turns on tera's autoescaping for every interpolated value.
const INDEX_TEMPLATE_NAME: &str = "index.html";

const INDEX_TEMPLATE: &str = r#"<!doctype html><html><head><meta charset="utf-8"><title>Uploads</title><style>body{font-family:Arial,Helvetica,sans-serif;padding:18px;background:#f7fafc}
table{border-collapse:collapse;width:100%;max-width:980px}
th,td{padding:8px;border:1px solid #e6e9ef;text-align:left}th{background:#eef2ff}</style></head><body><h2>Uploaded files</h2><p>Links to the files under <code>{{ base_url }}</code></p><table><thead><tr><th>File</th><th>Size</th><th>Modified</th></tr></thead><tbody>
{%- for file in files %}<tr><td><a href="{{ base_url | safe }}/{{ file.name | urlencode }}" target="_blank">{{ file.name }}</a></td><td>{{ file.size }} bytes</td><td>{{ file.modified }}</td></tr>{% endfor -%}
</tbody></table></body></html>"#;

#[derive(serde::Serialize)]
struct IndexRow<'a> {
    name: &'a str,
    size: u64,
    modified: String,
}

fn render_index(files: &[StoredFileEntity], base_url: &str) -> Result<String, error::SystemError> {
    let mut tera = Tera::default();
    tera.add_raw_template(INDEX_TEMPLATE_NAME, INDEX_TEMPLATE)?;

    let rows: Vec<_> = files
        .iter()
        .map(|f| IndexRow {
            name: &f.name,
            size: f.size,
            modified: f
                .modified
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
        })
        .collect();

    let mut context = tera::Context::new();
    context.insert("base_url", base_url);
    context.insert("files", &rows);

    Ok(tera.render(INDEX_TEMPLATE_NAME, &context)?)
}
