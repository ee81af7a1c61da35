//! Image API routes.
//!
//! - `GET /api/images/{name}` serves a file from the configured image directory.
//! - `GET /api/placeholder/{width}/{height}` renders a grey SVG box.
//!
//! Both live under `/api` and so are never gated.

use std::path::Path;

use axum::{
    extract::{Path as UrlPath, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::http::server::AppState;

/// Extensions probed in order, with their content types.
const IMAGE_TYPES: [(&str, &str); 5] = [
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("webp", "image/webp"),
    ("svg", "image/svg+xml"),
];

const MAX_PLACEHOLDER_SIDE: u32 = 4000;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("invalid image name")]
    InvalidName,

    #[error("image not found")]
    NotFound,

    #[error("placeholder dimensions must be between 1 and 4000")]
    InvalidDimensions,

    #[error("failed to read image: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ImageError {
    fn into_response(self) -> Response {
        let status = match &self {
            ImageError::InvalidName | ImageError::InvalidDimensions => StatusCode::BAD_REQUEST,
            ImageError::NotFound => StatusCode::NOT_FOUND,
            ImageError::Io(e) => {
                tracing::error!(error = %e, "Image read failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        // IO details stay in the log.
        let message = match self {
            ImageError::Io(_) => "failed to read image".to_string(),
            other => other.to_string(),
        };
        (status, message).into_response()
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Find and read `{dir}/{name}.{ext}` for the first known extension present.
pub async fn read_image(dir: &Path, name: &str) -> Result<(&'static str, Vec<u8>), ImageError> {
    if !is_valid_name(name) {
        return Err(ImageError::InvalidName);
    }

    for (ext, content_type) in IMAGE_TYPES {
        let path = dir.join(format!("{name}.{ext}"));
        match tokio::fs::read(&path).await {
            Ok(bytes) => return Ok((content_type, bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(ImageError::Io(e)),
        }
    }

    Err(ImageError::NotFound)
}

pub async fn serve_image(
    State(state): State<AppState>,
    UrlPath(name): UrlPath<String>,
) -> Result<Response, ImageError> {
    let (content_type, bytes) = read_image(&state.image_dir, &name).await?;

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        bytes,
    )
        .into_response())
}

/// Render a neutral placeholder image of the given size.
pub fn placeholder_svg(width: u32, height: u32) -> Result<String, ImageError> {
    let valid = 1..=MAX_PLACEHOLDER_SIDE;
    if !valid.contains(&width) || !valid.contains(&height) {
        return Err(ImageError::InvalidDimensions);
    }

    let font_size = (width.min(height) / 8).max(8);
    Ok(format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}"><rect width="100%" height="100%" fill="#e5e7eb"/><text x="50%" y="50%" dominant-baseline="middle" text-anchor="middle" font-family="sans-serif" font-size="{font_size}" fill="#9ca3af">{width}x{height}</text></svg>"##
    ))
}

pub async fn serve_placeholder(
    UrlPath((width, height)): UrlPath<(u32, u32)>,
) -> Result<Response, ImageError> {
    let svg = placeholder_svg(width, height)?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=31536000, immutable"),
        ],
        svg,
    )
        .into_response())
}
