//! JSON access to the employee directory, in the Fire22 response envelope.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::fire22::ApiResponse;
use crate::models::{Department, EmployeeData, Tier};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct DirectoryQuery {
    pub department: Option<String>,
    /// Kept as text so a non-numeric tier gets the same error as an out-of-range one.
    pub tier: Option<String>,
}

fn parse_tier(raw: &str) -> Result<Tier, AppError> {
    raw.trim()
        .parse::<u8>()
        .ok()
        .and_then(|t| Tier::new(t).ok())
        .ok_or_else(|| AppError::Validation(format!("tier must be between 1 and 5, got '{raw}'")))
}

/// GET /api/employees?department=&tier=
pub async fn handle_list_employees(
    State(state): State<AppState>,
    query: Result<Query<DirectoryQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<EmployeeData>>>, AppError> {
    let Query(params) = query.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let department = params
        .department
        .as_deref()
        .map(|slug| {
            Department::from_slug(slug)
                .ok_or_else(|| AppError::Validation(format!("unknown department '{slug}'")))
        })
        .transpose()?;
    let tier = params.tier.as_deref().map(parse_tier).transpose()?;

    let employees = state
        .directory
        .filter(department, tier)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(ApiResponse::ok(employees)))
}

/// GET /api/employees/:id
pub async fn handle_get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    match state.directory.get(&id) {
        Some(employee) => Json(ApiResponse::ok(employee.clone())).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<EmployeeData>::err(format!(
                "Employee '{id}' not found"
            ))),
        )
            .into_response(),
    }
}
