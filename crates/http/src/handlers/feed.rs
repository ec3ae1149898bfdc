use axum::{
    extract::State,
    http::{
        header::{CONTENT_TYPE, IF_MODIFIED_SINCE, LAST_MODIFIED},
        HeaderMap, StatusCode,
    },
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use std::sync::Arc;

use asides_core::{http_date, parse_http_date};

use crate::api_error::ApiError;
use crate::AppState;

const ATOM_CONTENT_TYPE: &str = "application/atom+xml";

/// Conditional-GET check at the one-second resolution of HTTP dates.
fn not_modified(headers: &HeaderMap, last_modified: DateTime<Utc>) -> bool {
    headers
        .get(IF_MODIFIED_SINCE)
        .and_then(|v| v.to_str().ok())
        .and_then(parse_http_date)
        .is_some_and(|since| last_modified.timestamp() <= since.timestamp())
}

pub async fn atom_feed(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let feed = state.service.feed(&state.urls).await?;

    let Some(modified) = feed.last_modified else {
        return Ok(([(CONTENT_TYPE, ATOM_CONTENT_TYPE)], feed.xml).into_response());
    };

    let last_modified = http_date(modified);
    if not_modified(&headers, modified) {
        return Ok((StatusCode::NOT_MODIFIED, [(LAST_MODIFIED, last_modified)]).into_response());
    }
    Ok((
        [(CONTENT_TYPE, ATOM_CONTENT_TYPE.to_owned()), (LAST_MODIFIED, last_modified)],
        feed.xml,
    )
        .into_response())
}
