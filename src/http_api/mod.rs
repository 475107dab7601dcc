use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use parking_lot::RwLock;
use serde::Serialize;
use serde_json::json;

use crate::{
    EmployeeMaster, EmployeeRoster, ProfitSummary, ProjectData, validation::validate_project,
};

#[derive(Clone)]
pub struct AppState {
    project: Arc<RwLock<ProjectData>>,
    roster: Arc<RwLock<EmployeeRoster>>,
}

impl AppState {
    pub fn new(project: ProjectData, roster: EmployeeRoster) -> Self {
        Self {
            project: Arc::new(RwLock::new(project)),
            roster: Arc::new(RwLock::new(roster)),
        }
    }

    pub fn with_shared(
        project: Arc<RwLock<ProjectData>>,
        roster: Arc<RwLock<EmployeeRoster>>,
    ) -> Self {
        Self { project, roster }
    }

    fn project(&self) -> Arc<RwLock<ProjectData>> {
        self.project.clone()
    }

    fn roster(&self) -> Arc<RwLock<EmployeeRoster>> {
        self.roster.clone()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    NotFound(String),
    Invalid(String),
}

impl ApiError {
    fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    fn invalid(message: impl Into<String>) -> Self {
        ApiError::Invalid(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => {
                let body = Json(ErrorBody {
                    error: "not_found",
                    message,
                });
                (StatusCode::NOT_FOUND, body).into_response()
            }
            ApiError::Invalid(message) => {
                let body = Json(ErrorBody {
                    error: "invalid_request",
                    message,
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/project", get(get_project).put(update_project))
        .route("/project/reset", post(reset_project))
        .route("/summary", get(get_summary))
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/:id",
            axum::routing::put(update_employee).delete(delete_employee),
        )
        .with_state(state)
}

pub async fn serve(
    addr: SocketAddr,
    project: ProjectData,
    roster: EmployeeRoster,
) -> std::io::Result<()> {
    let state = AppState::new(project, roster);
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn get_project(State(state): State<AppState>) -> Json<ProjectData> {
    let project = state.project();
    let snapshot = {
        let guard = project.read();
        guard.clone()
    };
    Json(snapshot)
}

async fn update_project(
    State(state): State<AppState>,
    Json(payload): Json<ProjectData>,
) -> Result<Json<ProjectData>, ApiError> {
    validate_project(&payload).map_err(|err| ApiError::invalid(err.to_string()))?;
    let project = state.project();
    {
        let mut guard = project.write();
        *guard = payload;
    }
    let current = {
        let guard = project.read();
        guard.clone()
    };
    Ok(Json(current))
}

async fn reset_project(State(state): State<AppState>) -> Json<ProjectData> {
    let project = state.project();
    {
        let mut guard = project.write();
        guard.reset();
    }
    let current = {
        let guard = project.read();
        guard.clone()
    };
    Json(current)
}

async fn get_summary(State(state): State<AppState>) -> Json<ProfitSummary> {
    let project = state.project();
    let summary = {
        let guard = project.read();
        ProfitSummary::compute(&guard)
    };
    Json(summary)
}

async fn list_employees(State(state): State<AppState>) -> Json<Vec<EmployeeMaster>> {
    let roster = state.roster();
    let employees = {
        let guard = roster.read();
        guard.employees.clone()
    };
    Json(employees)
}

async fn create_employee(
    State(state): State<AppState>,
    Json(employee): Json<EmployeeMaster>,
) -> Result<(StatusCode, Json<EmployeeMaster>), ApiError> {
    let roster = state.roster();
    let created = {
        let mut guard = roster.write();
        if !employee.id.is_empty() && guard.find(&employee.id).is_some() {
            return Err(ApiError::invalid(format!(
                "employee {} already exists",
                employee.id
            )));
        }
        let next = guard.add(employee);
        let created = next
            .employees
            .last()
            .cloned()
            .ok_or_else(|| ApiError::invalid("employee not found after creation"))?;
        *guard = next;
        created
    };
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    Json(employee): Json<EmployeeMaster>,
) -> Result<Json<EmployeeMaster>, ApiError> {
    let roster = state.roster();
    let updated = {
        let mut guard = roster.write();
        if guard.find(&employee_id).is_none() {
            return Err(ApiError::not_found(format!(
                "employee {employee_id} not found"
            )));
        }
        let next = guard.update(&employee_id, employee);
        let updated = next
            .find(&employee_id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("employee not found after update"))?;
        *guard = next;
        updated
    };
    Ok(Json(updated))
}

async fn delete_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let roster = state.roster();
    {
        let mut guard = roster.write();
        if guard.find(&employee_id).is_none() {
            return Err(ApiError::not_found(format!(
                "employee {employee_id} not found"
            )));
        }
        *guard = guard.remove(&employee_id);
    }
    Ok(StatusCode::NO_CONTENT)
}
