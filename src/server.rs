//! HTTP surface of the clinic site.
//!
//! Routes:
//! - `GET  /health`
//! - `POST /api/symptoms`
//! - `GET  /api/schedules`
//! - `GET  /api/gallery?category=<all|facilities|equipment|team>`
//! - `POST /api/feedback`
//! - `GET  /api/clinic`

use crate::core::listing::{filter_gallery, GalleryCard, GalleryCategory, ScheduleCard};
use crate::core::symptoms::{match_symptoms, Recommendation, SymptomReport};
use crate::core::{ClinicBackend, ClinicInfo, ConfigProvider, Feedback};
use crate::utils::error::ClinicError;
use crate::utils::validation;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub const DISCLAIMER: &str = "This is an automated suggestion system. Please consult with a \
qualified medical professional for accurate diagnosis and treatment.";

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    backend: Arc<dyn ClinicBackend>,
    clinic: Arc<ClinicInfo>,
}

impl AppState {
    pub fn new(backend: Arc<dyn ClinicBackend>, clinic: ClinicInfo) -> Self {
        Self {
            backend,
            clinic: Arc::new(clinic),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct SymptomRequest {
    pub symptoms: String,
}

#[derive(Debug, Serialize)]
pub struct SymptomResponse {
    #[serde(flatten)]
    pub recommendation: Recommendation,
    pub disclaimer: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct GalleryQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageRes {
    pub message: String,
}

/// Error body returned to the browser.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(error: ClinicError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: error.user_friendly_message(),
        }
    }

    fn upstream(error: ClinicError, message: &str) -> Self {
        tracing::error!(
            "Upstream failure: {} (category: {:?}, severity: {:?})",
            error,
            error.category(),
            error.severity()
        );
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: message.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/symptoms", post(check_symptoms))
        .route("/api/schedules", get(list_schedules))
        .route("/api/gallery", get(list_gallery))
        .route("/api/feedback", post(submit_feedback))
        .route("/api/clinic", get(clinic_info))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn serve<C: ConfigProvider + ?Sized>(
    config: &C,
    backend: Arc<dyn ClinicBackend>,
) -> anyhow::Result<()> {
    let addr = validation::validate_socket_addr("bind", config.bind_address())?;
    let app = router(AppState::new(backend, config.clinic_info()));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Clinic site listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

async fn health() -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Clinic site is alive".into(),
    })
}

async fn check_symptoms(Json(req): Json<SymptomRequest>) -> Json<SymptomResponse> {
    let report = SymptomReport::new(req.symptoms);
    Json(SymptomResponse {
        recommendation: match_symptoms(&report),
        disclaimer: DISCLAIMER,
    })
}

async fn list_schedules(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScheduleCard>>, ApiError> {
    let schedules = state.backend.fetch_schedules().await.map_err(|e| {
        ApiError::upstream(e, "Failed to fetch doctor schedules. Please try again later.")
    })?;

    let cards = schedules
        .iter()
        .map(|s| ScheduleCard::from_schedule(s, state.backend.as_ref(), &state.clinic.location))
        .collect();
    Ok(Json(cards))
}

async fn list_gallery(
    State(state): State<AppState>,
    Query(query): Query<GalleryQuery>,
) -> Result<Json<Vec<GalleryCard>>, ApiError> {
    let category = match query.category.as_deref() {
        Some(raw) => raw.parse::<GalleryCategory>().map_err(ApiError::bad_request)?,
        None => GalleryCategory::All,
    };

    let images = state.backend.fetch_gallery().await.map_err(|e| {
        ApiError::upstream(e, "Failed to load gallery images. Please try again later.")
    })?;

    let cards = filter_gallery(&images, category)
        .into_iter()
        .map(|image| GalleryCard::from_image(image, state.backend.as_ref()))
        .collect();
    Ok(Json(cards))
}

async fn submit_feedback(
    State(state): State<AppState>,
    Json(feedback): Json<Feedback>,
) -> Result<Json<MessageRes>, ApiError> {
    for (field, value) in [
        ("patient_name", &feedback.patient_name),
        ("feedback_text", &feedback.feedback_text),
    ] {
        if value.trim().is_empty() {
            return Err(ApiError::bad_request(ClinicError::ValidationError {
                message: format!("{} is required", field),
            }));
        }
    }

    state
        .backend
        .submit_feedback(&feedback)
        .await
        .map_err(|e| ApiError::upstream(e, "Failed to submit feedback."))?;

    Ok(Json(MessageRes {
        message: "Thank you for your feedback!".into(),
    }))
}

async fn clinic_info(State(state): State<AppState>) -> Json<ClinicInfo> {
    Json(state.clinic.as_ref().clone())
}
