use crate::api::thumbnail::error::ThumbnailError;
use crate::utils::escape_path;
use tracing::debug;

/// Checks the requested storage path against the scope guard.
///
/// # Errors
///
/// `MissingPath` when no path was given, `ForbiddenPath` when it doesn't start with `allowed_prefix`.
pub fn validate_thumbnail_path<'a>(
    path: Option<&'a str>,
    allowed_prefix: &str,
) -> Result<&'a str, ThumbnailError> {
    let path = path.ok_or(ThumbnailError::MissingPath)?;
    if !path.starts_with(allowed_prefix) {
        debug!("rejecting forbidden src_path: {}", path);
        return Err(ThumbnailError::ForbiddenPath(path.to_owned()));
    }
    Ok(path)
}

/// Builds the upstream thumbnail URL. `base_url` must end with a `/`.
#[must_use]
pub fn thumbnail_url(base_url: &str, path: &str, size: &str) -> String {
    format!("{base_url}{}?size={size}", escape_path(path))
}
