use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Local;
use rent_quote::error::AppError;
use rent_quote::quote::export::{schedule_csv, schedule_disposition, schedule_mime};
use rent_quote::quote::{generate_schedule, QuoteRequest, QuoteSummary};
use serde_json::json;
use tracing::{debug, info};

pub(crate) fn quote_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/quotes", post(quote_endpoint))
        .route("/api/v1/quotes/schedule", post(schedule_endpoint))
        .layer(Extension(state))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn quote_endpoint(
    Extension(state): Extension<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteSummary>, AppError> {
    let validated = request.validate(state.quote.default_installments)?;
    let summary = QuoteSummary::new(&validated.property, validated.contract_installments)?;

    info!(
        property_type = summary.property_type.tag(),
        monthly_rent = summary.monthly_rent,
        installments = summary.contract_installments,
        "quote computed"
    );

    Ok(Json(summary))
}

pub(crate) async fn schedule_endpoint(
    Extension(state): Extension<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Response, AppError> {
    let validated = request.validate(state.quote.default_installments)?;
    let monthly_rent = validated.property.monthly_rent();
    let issued_on = Local::now().date_naive();

    let rows = generate_schedule(monthly_rent, validated.contract_installments, issued_on)?;
    let body = schedule_csv(&rows)?;

    debug!(
        property_type = validated.property.category().tag(),
        monthly_rent,
        installments = validated.contract_installments,
        %issued_on,
        "schedule exported"
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, schedule_mime().to_string()),
            (header::CONTENT_DISPOSITION, schedule_disposition()),
        ],
        body,
    )
        .into_response())
}
