use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::db;
use crate::error::AppError;
use crate::models::Project;
use crate::params::{ProjectParams, RawParams};
use crate::state::SharedState;

/// Anything that is not an integer id can never match a row.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse().map_err(|_| AppError::project_not_found(raw))
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Project>>, AppError> {
    let projects = db::projects::list(&state.pool).await?;
    Ok(Json(projects))
}

pub async fn create(
    State(state): State<SharedState>,
    params: ProjectParams,
) -> Result<(StatusCode, Json<Project>), AppError> {
    let project =
        db::projects::create(&state.pool, params.name(), params.url(), params.info()).await?;

    tracing::info!(project_id = project.id, "project created: {project}");

    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Project>, AppError> {
    let id = parse_id(&raw_id)?;
    let project = db::projects::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::project_not_found(id))?;
    Ok(Json(project))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
    raw: RawParams,
) -> Result<Json<Project>, AppError> {
    let id = parse_id(&raw_id)?;

    // A missing project is reported before the body gets a chance to fail.
    if db::projects::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::project_not_found(id));
    }
    let params = raw.parse()?;

    // The row may have been deleted since the lookup.
    let project =
        db::projects::update(&state.pool, id, params.name(), params.url(), params.info())
            .await?
            .ok_or_else(|| AppError::project_not_found(id))?;

    tracing::info!(project_id = id, "project updated");

    Ok(Json(project))
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = parse_id(&raw_id)?;

    if !db::projects::delete(&state.pool, id).await? {
        return Err(AppError::project_not_found(id));
    }

    tracing::info!(project_id = id, "project deleted");

    Ok(Json(serde_json::json!({
        "message": format!("Project with id {id} has been deleted")
    })))
}
