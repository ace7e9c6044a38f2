//! `/uploads` 静态文件服务
//!
//! 仅提供读取，文件由运维放入 `upload.dir`。

use actix_web::{HttpResponse, Result as ActixResult, http::header};
use std::path::{Component, Path, PathBuf};

use crate::config::AppConfig;
use crate::errors::TutorHubError;
use crate::models::{ApiResponse, ErrorCode};

pub struct UploadService;

/// 将请求路径规范化为 upload 目录内的相对路径
///
/// 拒绝 `..`、绝对路径、反斜杠与 NUL。
pub fn sanitize_upload_path(raw: &str) -> Option<PathBuf> {
    if raw.is_empty() || raw.starts_with('/') || raw.contains('\\') || raw.contains('\0') {
        return None;
    }

    let mut clean = PathBuf::new();
    for component in Path::new(raw).components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }

    if clean.as_os_str().is_empty() {
        None
    } else {
        Some(clean)
    }
}

/// 根据扩展名推断 MIME 类型
fn get_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "ico" => "image/x-icon",
        "pdf" => "application/pdf",
        "json" => "application/json; charset=utf-8",
        "txt" => "text/plain; charset=utf-8",
        "csv" => "text/csv; charset=utf-8",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mp3" => "audio/mpeg",
        _ => "application/octet-stream",
    }
}

impl UploadService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub async fn serve(&self, raw_path: &str) -> ActixResult<HttpResponse> {
        let Some(relative) = sanitize_upload_path(raw_path) else {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::FilePathInvalid,
                "Invalid file path",
            )));
        };

        let full_path = Path::new(&AppConfig::get().upload.dir).join(&relative);

        let is_file = tokio::fs::metadata(&full_path)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false);
        if !is_file {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FileNotFound,
                "File not found",
            )));
        }

        match tokio::fs::read(&full_path).await {
            Ok(buf) => Ok(HttpResponse::Ok()
                .insert_header((header::CONTENT_TYPE, get_mime_type(&relative)))
                .insert_header((header::CACHE_CONTROL, "public, max-age=3600"))
                .body(buf)),
            Err(e) => {
                tracing::error!("{}", TutorHubError::file_operation(format!("{e}")));
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "File read failed",
                    )),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_accepts_nested_paths() {
        assert_eq!(
            sanitize_upload_path("avatars/ada.png"),
            Some(PathBuf::from("avatars/ada.png"))
        );
        assert_eq!(
            sanitize_upload_path("./logo.svg"),
            Some(PathBuf::from("logo.svg"))
        );
    }

    #[test]
    fn test_sanitize_rejects_traversal() {
        assert_eq!(sanitize_upload_path("../secret.txt"), None);
        assert_eq!(sanitize_upload_path("avatars/../../etc/passwd"), None);
        assert_eq!(sanitize_upload_path("/etc/passwd"), None);
        assert_eq!(sanitize_upload_path("avatars\\ada.png"), None);
        assert_eq!(sanitize_upload_path("ada\0.png"), None);
        assert_eq!(sanitize_upload_path(""), None);
        assert_eq!(sanitize_upload_path("."), None);
    }

    #[test]
    fn test_mime_by_extension() {
        assert_eq!(get_mime_type(Path::new("a/b.PNG")), "image/png");
        assert_eq!(get_mime_type(Path::new("doc.pdf")), "application/pdf");
        assert_eq!(
            get_mime_type(Path::new("archive.bin")),
            "application/octet-stream"
        );
    }
}
