use std::sync::Arc;

use axum::{
    body,
    extract::{FromRequest, Multipart, Request, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use shared::{
    domain::FormPayload,
    error::{ApiError, ErrorCode},
    protocol::{healthz_route, submit_route, UpstreamReply},
};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{debug, error, info, warn};

use crate::{app_state::AppState, relay::with_access_key};

pub const MISSING_ACCESS_KEY_MESSAGE: &str = "Missing Web3Forms access key";

type ApiRejection = (StatusCode, Json<ApiError>);

pub fn build_router(state: Arc<AppState>) -> Router {
    let max_body_bytes = state.max_body_bytes;
    Router::new()
        .route(healthz_route(), get(healthz))
        .route(submit_route(), any(submit))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn submit(State(state): State<Arc<AppState>>, request: Request) -> Response {
    if request.method() != Method::POST {
        debug!(method = %request.method(), "rejecting non-POST submission");
        return (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response();
    }

    match relay_submission(&state, request).await {
        Ok(reply) => upstream_response(reply),
        Err(rejection) => rejection.into_response(),
    }
}

async fn relay_submission(
    state: &AppState,
    request: Request,
) -> Result<UpstreamReply, ApiRejection> {
    let payload = read_form(request, state.max_body_bytes).await?;

    let access_key = state.access_key.as_ref().ok_or_else(|| {
        error!("submission received but no Web3Forms access key is configured");
        internal(ErrorCode::MissingAccessKey, MISSING_ACCESS_KEY_MESSAGE)
    })?;

    let fields = payload.len();
    let payload = with_access_key(payload, access_key);
    let reply = state.upstream.submit(&payload).await.map_err(|e| {
        warn!(error = %e, "upstream submission failed");
        internal(ErrorCode::Upstream, e.to_string())
    })?;

    info!(fields, status = reply.status, "form relayed");
    Ok(reply)
}

fn upstream_response(reply: UpstreamReply) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body_text().to_owned(),
    )
        .into_response()
}

fn internal(code: ErrorCode, message: impl Into<String>) -> ApiRejection {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError::new(code, message)),
    )
}

/// Reads URL-encoded or multipart text fields. File parts are skipped.
async fn read_form(request: Request, limit: usize) -> Result<FormPayload, ApiRejection> {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(request, &())
            .await
            .map_err(|e| internal(ErrorCode::InvalidForm, e.body_text()))?;
        return read_multipart(multipart).await;
    }

    if content_type.starts_with("application/x-www-form-urlencoded") {
        let bytes = body::to_bytes(request.into_body(), limit)
            .await
            .map_err(|e| internal(ErrorCode::InvalidForm, e.to_string()))?;
        return Ok(url::form_urlencoded::parse(&bytes).collect());
    }

    Err(internal(
        ErrorCode::InvalidForm,
        format!("unsupported content type '{content_type}'"),
    ))
}

async fn read_multipart(mut multipart: Multipart) -> Result<FormPayload, ApiRejection> {
    let mut payload = FormPayload::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| internal(ErrorCode::InvalidForm, e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        if field.file_name().is_some() {
            debug!(%name, "skipping file part");
            continue;
        }
        let value = field
            .text()
            .await
            .map_err(|e| internal(ErrorCode::InvalidForm, e.body_text()))?;
        payload.insert(name, value);
    }
    Ok(payload)
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
