use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Map, Value};

use crate::errors::AppError;
use crate::models::skill::Skill;
use crate::state::AppState;
use crate::store::preview_update;
use crate::validation::validate_skill;

pub const SKILL_NOT_FOUND: &str = "Skill not found";
pub const SKILL_DELETED: &str = "Skill deleted successfully";

/// GET /skills
pub async fn list_skills(State(state): State<AppState>) -> Json<Vec<Skill>> {
    Json(state.skills.list())
}

/// POST /skills
pub async fn create_skill(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Skill>), AppError> {
    validate_skill(&payload)?;
    let skill: Skill =
        serde_json::from_value(payload).context("validated skill payload failed to parse")?;
    let created = state.skills.create(skill);
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /skills/:id
pub async fn update_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<Value>,
) -> Result<Json<Skill>, AppError> {
    let existing = state
        .skills
        .get(&id)
        .ok_or(AppError::NotFound(SKILL_NOT_FOUND))?;

    let patch: Map<String, Value> = patch.as_object().cloned().unwrap_or_default();
    let merged = preview_update(&existing, &patch)?;
    validate_skill(&merged)?;

    let updated = state
        .skills
        .update(&id, &patch)
        .map_err(|_| AppError::NotFound(SKILL_NOT_FOUND))?;
    Ok(Json(updated))
}

/// DELETE /skills/:id
pub async fn delete_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    state
        .skills
        .delete(&id)
        .map_err(|_| AppError::NotFound(SKILL_NOT_FOUND))?;
    Ok(Json(json!({ "message": SKILL_DELETED })))
}
