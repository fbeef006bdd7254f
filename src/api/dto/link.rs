//! DTOs for link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request to create a short link.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The URL to redirect to (absolute `http` or `https`).
    #[validate(length(min = 1, max = 2048, message = "target_url must be 1-2048 characters"))]
    pub target_url: String,

    /// Optional custom short code. Its format is checked by the link service,
    /// after the target URL.
    pub custom_code: Option<String>,
}

/// JSON representation of a link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub code: String,
    pub target_url: String,
    pub short_url: String,
    pub total_clicks: i64,
    pub creation_count: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LinkResponse {
    /// Builds the response, deriving `short_url` from the public base URL.
    pub fn from_link(link: Link, base_url: &str) -> Self {
        let short_url = format!("{}/{}", base_url.trim_end_matches('/'), link.code);

        Self {
            code: link.code,
            target_url: link.target_url,
            short_url,
            total_clicks: link.total_clicks,
            creation_count: link.creation_count,
            last_clicked: link.last_clicked,
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}

/// Response for the link listing endpoint.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub total: usize,
    pub links: Vec<LinkResponse>,
}
