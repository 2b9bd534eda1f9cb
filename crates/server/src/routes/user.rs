use axum::{http::StatusCode, Json};
use shared::{
    api::{error::ServerError, payloads::NewUserRequest},
    model::{User, ValidateModel},
};
use tracing::{info, instrument};

use crate::{db::DatabaseConnection, routes::FormOrJson};

#[instrument(skip(conn))]
pub async fn new_user(
    DatabaseConnection(conn): DatabaseConnection,
    FormOrJson(req): FormOrJson<NewUserRequest>,
) -> Result<(StatusCode, Json<User>), ServerError> {
    let new_user = req.validate()?;

    let user = conn
        .interact(move |conn| User::create(conn, new_user))
        .await??;

    info!(user_id = %user.id, username = %user.username, "Registered user");
    Ok((StatusCode::CREATED, Json(user)))
}

#[instrument(skip(conn))]
pub async fn users(
    DatabaseConnection(conn): DatabaseConnection,
) -> Result<Json<Vec<User>>, ServerError> {
    let users = conn.interact(|conn| User::fetch_all(conn)).await??;

    Ok(Json(users))
}
