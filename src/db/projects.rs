use crate::models::Project;

pub async fn list<'e, E: sqlx::PgExecutor<'e>>(executor: E) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects ORDER BY id")
        .fetch_all(executor)
        .await
}

/// Missing fields are bound as NULL and rejected by the column constraints.
pub async fn create<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    name: Option<&str>,
    url: Option<&str>,
    info: Option<&str>,
) -> Result<Project, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "INSERT INTO projects (name, url, info) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(name)
    .bind(url)
    .bind(info)
    .fetch_one(executor)
    .await
}

pub async fn find_by_id<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    id: i64,
) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// Overwrites every mutable column and bumps `updated_on`.
/// Returns `None` when no row has this id.
pub async fn update<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    id: i64,
    name: Option<&str>,
    url: Option<&str>,
    info: Option<&str>,
) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "UPDATE projects SET name = $2, url = $3, info = $4, updated_on = now()
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(name)
    .bind(url)
    .bind(info)
    .fetch_optional(executor)
    .await
}

/// Returns whether a row was removed.
pub async fn delete<'e, E: sqlx::PgExecutor<'e>>(executor: E, id: i64) -> Result<bool, sqlx::Error> {
    let deleted = sqlx::query_scalar::<_, i32>("DELETE FROM projects WHERE id = $1 RETURNING id")
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(deleted.is_some())
}
