//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::is_well_formed;

/// Redirects a short code to its target URL, counting the click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The click is recorded before the redirect is issued, in the same atomic
/// update that yields the target URL. Malformed codes are answered with 404
/// without touching storage.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    if !is_well_formed(&code) {
        return Err(AppError::not_found(code));
    }

    let link = state.link_service.record_click(&code).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, link.target_url)]))
}
