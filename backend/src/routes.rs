use actix_files::Files;
use actix_multipart::{Field, Multipart};
use actix_web::{web, HttpResponse};
use futures::TryStreamExt;
use image::ImageFormat;
use log::{error, info, warn};
use serde_json::json;
use shared::{ImageMime, InferenceError, UploadedImage};
use std::path::PathBuf;
use uuid::Uuid;

use crate::error::ApiError;
use crate::inference::InferenceClient;

#[derive(Debug, Clone, Copy)]
pub struct UploadLimits {
    pub max_bytes: usize,
}

pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/analyze").route(web::post().to(handle_analyze)))
        .service(web::resource("/api/health").route(web::get().to(health)));
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: PathBuf) {
    configure_api(cfg);
    cfg.service(Files::new("/", frontend_dir).index_file("index.html"));
}

async fn handle_analyze(
    client: web::Data<InferenceClient>,
    limits: web::Data<UploadLimits>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let request_id = Uuid::new_v4();

    let image = match read_upload(payload, limits.max_bytes).await {
        Ok(image) => image,
        Err(e) => {
            warn!("[{}] Rejected upload: {}", request_id, e);
            return Err(e);
        }
    };
    info!(
        "[{}] Analyzing {} upload ({} bytes)",
        request_id,
        image.mime.as_str(),
        image.bytes.len()
    );

    match client.analyze(image).await {
        Ok(result) => {
            info!(
                "[{}] {} with confidence {}, {} days until rotten",
                request_id,
                result.ripeness_stage,
                result.confidence_label(),
                result.days_until_rotten
            );
            Ok(HttpResponse::Ok().json(result))
        }
        Err(e) => {
            error!("[{}] Inference failed: {}", request_id, e);
            Err(e.into())
        }
    }
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

async fn read_upload(mut payload: Multipart, max_bytes: usize) -> Result<UploadedImage, ApiError> {
    while let Some(mut field) = payload.try_next().await? {
        if field.name() != Some("file") {
            continue;
        }

        let declared = declared_mime(&field)?;
        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            if bytes.len() + chunk.len() > max_bytes {
                return Err(ApiError::TooLarge { limit: max_bytes });
            }
            bytes.extend_from_slice(&chunk);
        }

        let image = UploadedImage::new(bytes, declared)?;
        check_magic(&image)?;
        return Ok(image);
    }

    Err(ApiError::MissingFile)
}

// Browsers sometimes send `application/octet-stream`; fall back to the file name.
fn declared_mime(field: &Field) -> Result<ImageMime, InferenceError> {
    let by_content_type = field
        .content_type()
        .map(|mime| ImageMime::from_content_type(mime.essence_str()));

    match by_content_type {
        Some(Ok(mime)) => Ok(mime),
        other => {
            let file_name = field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .map(str::to_owned);
            match (file_name, other) {
                (Some(name), _) => ImageMime::from_file_name(&name),
                (None, Some(Err(e))) => Err(e),
                (None, _) => Err(InferenceError::UploadRejected {
                    reason: "the upload has no content type or file name".into(),
                }),
            }
        }
    }
}

fn check_magic(image: &UploadedImage) -> Result<(), InferenceError> {
    let sniffed = image::guess_format(&image.bytes).ok();
    let matches = matches!(
        (image.mime, sniffed),
        (ImageMime::Jpeg, Some(ImageFormat::Jpeg)) | (ImageMime::Png, Some(ImageFormat::Png))
    );

    if matches {
        Ok(())
    } else {
        Err(InferenceError::UploadRejected {
            reason: format!("the file content is not a valid {} image", image.mime.extension()),
        })
    }
}
