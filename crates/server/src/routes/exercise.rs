use axum::{http::StatusCode, Json};
use shared::{
    api::{
        error::ServerError,
        payloads::{AddExerciseRequest, AddedExercise, LogQuery},
    },
    model::{Exercise, ExerciseLog, User, ValidateModel},
    not_found_error, other_error, validation_error,
};
use tracing::{debug, info, instrument};

use crate::{
    db::DatabaseConnection,
    routes::{FormOrJson, ValidQuery},
};

#[instrument(skip(conn))]
pub async fn add_exercise(
    DatabaseConnection(conn): DatabaseConnection,
    FormOrJson(req): FormOrJson<AddExerciseRequest>,
) -> Result<(StatusCode, Json<AddedExercise>), ServerError> {
    let new_exercise = req.validate()?;

    let added = conn
        .interact(move |conn| {
            let user_id = new_exercise.user_id;
            if !User::exists(conn, &user_id)? {
                return Err(not_found_error!("User ID not found"));
            }

            let exercise = Exercise::create(conn, new_exercise)?;
            let user = User::fetch_by_id(conn, &user_id)?
                .ok_or_else(|| other_error!("User {user_id} vanished while adding an exercise"))?;

            Ok::<_, ServerError>(AddedExercise::new(user, exercise))
        })
        .await??;

    info!(exercise_id = %added.id, username = %added.username, "Added exercise");
    Ok((StatusCode::CREATED, Json(added)))
}

#[instrument(skip(conn))]
pub async fn exercise_log(
    DatabaseConnection(conn): DatabaseConnection,
    ValidQuery(filter): ValidQuery<LogQuery>,
) -> Result<Json<ExerciseLog>, ServerError> {
    let log = conn
        .interact(move |conn| {
            if !User::exists(conn, &filter.user_id)? {
                return Err(validation_error!("User ID is a mandatory field"));
            }
            Exercise::fetch_log(conn, &filter)
        })
        .await??;

    debug!(count = log.len(), "Fetched exercise log");
    Ok(Json(ExerciseLog::from(log)))
}
