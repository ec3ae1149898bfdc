use axum::{
    extract::{rejection::FormRejection, Path, Query, State},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE, LOCATION},
        HeaderMap, StatusCode,
    },
    response::{IntoResponse, Response},
    Form, Json,
};
use std::sync::Arc;

use asides_core::Aside;
use asides_service::{render_aside_xml, AuthError, ServiceError};

use crate::api_error::ApiError;
use crate::format::{parse_aside_path, AsideFormat};
use crate::request_types::BodyParams;
use crate::AppState;

const DUPLICATE_BODY: &str = "Error: Duplicate body\n";
const UPDATE_FAILED: &str = "Error updating aside.\n";

/// Form field wins over the query string. A request without a form content
/// type falls back to the query string alone.
fn body_param(
    query: BodyParams,
    form: Result<Form<BodyParams>, FormRejection>,
) -> Result<String, ApiError> {
    let form = match form {
        Ok(Form(params)) => params,
        Err(FormRejection::InvalidFormContentType(_)) => BodyParams::default(),
        Err(rejection) => return Err(ApiError::BadRequest(rejection.body_text())),
    };
    Ok(form.body.or(query.body).unwrap_or_default())
}

fn aside_id(segment: &str) -> Result<(i64, AsideFormat), ApiError> {
    parse_aside_path(segment).ok_or(ApiError::NotFound)
}

pub async fn create_aside(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BodyParams>,
    form: Result<Form<BodyParams>, FormRejection>,
) -> Result<Response, ApiError> {
    let body = body_param(query, form)?;
    let aside = match state.service.create(&body).await {
        Ok(aside) => aside,
        Err(ServiceError::DuplicateBody | ServiceError::InvalidInput(_)) => {
            return Err(ApiError::PreconditionFailed(DUPLICATE_BODY.to_owned()));
        },
        Err(e) => return Err(e.into()),
    };
    let message = format!("Created aside {} with text \"{}\"\n", aside.id, aside.body);
    Ok((StatusCode::CREATED, [(LOCATION, state.urls.aside_url(aside.id))], message)
        .into_response())
}

pub async fn get_aside(
    State(state): State<Arc<AppState>>,
    Path(segment): Path<String>,
) -> Result<Response, ApiError> {
    let (id, format) = aside_id(&segment)?;
    let aside = state.service.get(id).await?;
    Ok(render(&aside, format))
}

fn render(aside: &Aside, format: AsideFormat) -> Response {
    match format {
        AsideFormat::Json => Json(aside).into_response(),
        AsideFormat::Xml => {
            ([(CONTENT_TYPE, format.content_type())], render_aside_xml(aside)).into_response()
        },
    }
}

pub async fn update_aside(
    State(state): State<Arc<AppState>>,
    Path(segment): Path<String>,
    Query(query): Query<BodyParams>,
    form: Result<Form<BodyParams>, FormRejection>,
) -> Result<Response, ApiError> {
    let (id, _) = aside_id(&segment)?;
    let body = body_param(query, form)?;
    match state.service.update(id, &body).await {
        Ok(_) => Ok((StatusCode::ACCEPTED, "Aside updated").into_response()),
        Err(ServiceError::DuplicateBody | ServiceError::InvalidInput(_)) => {
            Err(ApiError::PreconditionFailed(UPDATE_FAILED.to_owned()))
        },
        Err(e) => Err(e.into()),
    }
}

pub async fn delete_aside(
    State(state): State<Arc<AppState>>,
    Path(segment): Path<String>,
) -> Result<Response, ApiError> {
    let (id, _) = aside_id(&segment)?;
    state.service.delete(id).await?;
    Ok((StatusCode::OK, "Deleted\n").into_response())
}

pub async fn list_recent(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Aside>>, ApiError> {
    Ok(Json(state.service.recent().await?))
}

pub async fn delete_all_asides(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let header = headers
        .get(AUTHORIZATION)
        .map(|value| value.to_str().map_err(|_| AuthError::Malformed))
        .transpose()?;
    let grant = state.auth.check(header)?;
    state.service.delete_all(grant).await?;
    Ok(StatusCode::NO_CONTENT)
}
