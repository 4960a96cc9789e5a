use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Map, Value};

use crate::errors::AppError;
use crate::models::employee::Employee;
use crate::state::AppState;
use crate::store::preview_update;
use crate::validation::validate_employee;

pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";
pub const EMPLOYEE_DELETED: &str = "Employee deleted successfully";

/// GET /employees
pub async fn list_employees(State(state): State<AppState>) -> Json<Vec<Employee>> {
    Json(state.employees.list())
}

/// POST /employees
pub async fn create_employee(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Employee>), AppError> {
    validate_employee(&payload)?;
    // A validated payload always has the Employee shape.
    let employee: Employee =
        serde_json::from_value(payload).context("validated employee payload failed to parse")?;
    let created = state.employees.create(employee);
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /employees/:id
///
/// The patch is validated against a preview of the merged record, so a
/// partial patch only fails for the fields it actually degrades.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<Value>,
) -> Result<Json<Employee>, AppError> {
    let existing = state
        .employees
        .get(&id)
        .ok_or(AppError::NotFound(EMPLOYEE_NOT_FOUND))?;

    let patch: Map<String, Value> = patch.as_object().cloned().unwrap_or_default();
    let merged = preview_update(&existing, &patch)?;
    validate_employee(&merged)?;

    let updated = state
        .employees
        .update(&id, &patch)
        .map_err(|_| AppError::NotFound(EMPLOYEE_NOT_FOUND))?;
    Ok(Json(updated))
}

/// DELETE /employees/:id
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    state
        .employees
        .delete(&id)
        .map_err(|_| AppError::NotFound(EMPLOYEE_NOT_FOUND))?;
    Ok(Json(json!({ "message": EMPLOYEE_DELETED })))
}

/// GET /employees/search/name/:name
pub async fn search_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<Vec<Employee>> {
    Json(state.employees.search(&name, |e| vec![e.name.clone()]))
}

/// GET /employees/search/surname/:surname
pub async fn search_by_surname(
    State(state): State<AppState>,
    Path(surname): Path<String>,
) -> Json<Vec<Employee>> {
    Json(state.employees.search(&surname, |e| vec![e.surname.clone()]))
}

/// GET /employees/search/skill/:skill
/// Matches when ANY skill entry contains the needle.
pub async fn search_by_skill(
    State(state): State<AppState>,
    Path(skill): Path<String>,
) -> Json<Vec<Employee>> {
    Json(state.employees.search(&skill, Employee::skill_terms))
}
