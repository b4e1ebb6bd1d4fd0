// static_files.rs
use crate::errors::ServerError;
use crate::responses::bytes_response;
use astra::Response;
use std::path::{Component, Path, PathBuf};

pub const PUBLIC_DIR: &str = "public";

/// Request paths that map into `public/`. `/static` holds the stylesheet,
/// the image roots hold covers and per-listing photos, and the two JSON
/// documents are the catalog endpoints the loader fetches.
pub fn is_static_path(path: &str) -> bool {
    path.starts_with("/static/")
        || path.starts_with("/images/")
        || path.starts_with("/assets/images/")
        || path == "/listings.json"
        || path == "/shared/listings.json"
        || path == "/favicon.ico"
}

pub fn serve(path: &str) -> Result<Response, ServerError> {
    let relative = sanitize(path)?;
    let full = Path::new(PUBLIC_DIR).join(&relative);

    let bytes = std::fs::read(&full).map_err(|_| ServerError::NotFound)?;
    let mime = content_type(&relative);

    Ok(bytes_response(bytes, mime.as_ref()))
}

/// Strips the leading slash and rejects traversal components.
fn sanitize(path: &str) -> Result<PathBuf, ServerError> {
    let relative = Path::new(path.trim_start_matches('/'));

    for component in relative.components() {
        match component {
            Component::Normal(_) => {}
            _ => return Err(ServerError::BadRequest("bad asset path".into())),
        }
    }

    Ok(relative.to_path_buf())
}

fn content_type(path: &Path) -> mime::Mime {
    match path.extension().and_then(|e| e.to_str()) {
        Some("css") => mime::TEXT_CSS_UTF_8,
        Some("js") => mime::TEXT_JAVASCRIPT,
        Some("json") => mime::APPLICATION_JSON,
        Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG,
        Some("png") => mime::IMAGE_PNG,
        Some("svg") => mime::IMAGE_SVG,
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}
