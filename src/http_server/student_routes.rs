//! Student HTTP Routes
//!
//! Thin handlers mapping the REST surface onto [`StudentService`] calls.
//! Failures are `ServiceError`s; axum turns them into status codes and
//! `{"detail": ...}` bodies through `IntoResponse`.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::errors::ServiceError;
use crate::model::{Student, StudentPayload};
use crate::service::search::{SearchCriteria, SearchOptions, SearchResults};
use crate::service::StudentService;

// ==================
// Shared State
// ==================

/// State shared across handlers.
///
/// One service instance, constructed at startup and injected here; handlers
/// never build their own.
pub struct AppState {
    pub service: StudentService,
}

impl AppState {
    pub fn new(service: StudentService) -> Self {
        Self { service }
    }
}

// ==================
// Request Types
// ==================

/// Sort and pagination query parameters for search
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQueryParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

// ==================
// Routes
// ==================

/// Create student routes
pub fn student_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list_students_handler).post(create_student_handler))
        .route("/search", post(search_students_handler))
        .route(
            "/:id",
            get(retrieve_student_handler)
                .put(update_student_handler)
                .delete(delete_student_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// Map a malformed JSON body onto the structured error shape, so callers get
/// a 400 with a detail body instead of axum's default rejection
fn bad_body(rejection: JsonRejection) -> ServiceError {
    ServiceError::InvalidParameter(rejection.body_text())
}

async fn list_students_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Student>>, ServiceError> {
    let students = state.service.list_all().await?;
    Ok(Json(students))
}

async fn create_student_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<StudentPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Student>), ServiceError> {
    let Json(payload) = payload.map_err(bad_body)?;
    let student = state.service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

async fn retrieve_student_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Student>, ServiceError> {
    let student = state.service.retrieve(id).await?;
    Ok(Json(student))
}

async fn update_student_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    payload: Result<Json<StudentPayload>, JsonRejection>,
) -> Result<Json<Student>, ServiceError> {
    let Json(payload) = payload.map_err(bad_body)?;
    let student = state.service.update(id, payload).await?;
    Ok(Json(student))
}

async fn delete_student_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Student>, ServiceError> {
    let student = state.service.delete(id).await?;
    Ok(Json(student))
}

async fn search_students_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQueryParams>,
    criteria: Result<Json<SearchCriteria>, JsonRejection>,
) -> Result<Json<SearchResults>, ServiceError> {
    let Json(criteria) = criteria.map_err(bad_body)?;
    let options = SearchOptions::resolve(
        params.sort_by.as_deref(),
        params.sort_order.as_deref(),
        params.page,
        params.page_size,
    )?;
    let results = state.service.search(criteria, options).await?;
    Ok(Json(results))
}
