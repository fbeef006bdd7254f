//! Target URL validation.
//!
//! Target URLs are stored exactly as submitted; this module only decides whether
//! a string is acceptable. No normalization is applied, so `https://a.com` and
//! `https://a.com/` are distinct targets.

use crate::error::AppError;
use url::Url;

/// Validates that `input` is an absolute `http` or `https` URL with a host.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] for unparsable input, relative URLs,
/// other schemes (`javascript:`, `ftp:`, ...), or surrounding whitespace.
pub fn validate_target_url(input: &str) -> Result<(), AppError> {
    if input.trim() != input {
        return Err(AppError::invalid_url(
            input,
            "URL must not have leading or trailing whitespace",
        ));
    }

    let url = Url::parse(input).map_err(|e| AppError::invalid_url(input, e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AppError::invalid_url(
                input,
                format!("Unsupported scheme '{other}', only http and https are allowed"),
            ));
        }
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(AppError::invalid_url(input, "URL must have a host"));
    }

    Ok(())
}
