use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{is_unsigned_integer, parse_unsigned, FormValue};
use crate::{
    api::error::ServerError,
    model::{DateInput, DateRange, Exercise, LogFilter, NewExercise, User, ValidateModel},
    types::{Timestamp, Uuid},
    validation_error,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddExerciseRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<FormValue>,
    #[serde(default)]
    pub date: Option<String>,
}

impl ValidateModel for AddExerciseRequest {
    type Valid = NewExercise;

    /// Everything but the user's existence, which needs the store
    fn validate(self) -> Result<NewExercise, ServerError> {
        let (user_id, description, duration) = match (self.user_id, self.description, self.duration) {
            (Some(user_id), Some(description), Some(duration))
                if !user_id.is_empty() && !description.is_empty() && !duration.is_empty() =>
            {
                (user_id, description, duration)
            }
            _ => return Err(validation_error!("Please fill in all mandatory fields")),
        };

        let user_id = Uuid::parse(&user_id).map_err(|_| validation_error!("User ID is invalid"))?;

        let duration = parse_unsigned::<u32>(&duration.as_text())
            .filter(|d| *d > 0)
            .ok_or_else(|| validation_error!("Duration is invalid"))?;

        let date = match self.date.as_deref() {
            None | Some("") => Utc::now(),
            Some(date) => DateInput::parse(date)
                .ok_or_else(|| validation_error!("Given Date is invalid"))?
                .start(),
        };

        Ok(NewExercise::new(user_id, description, duration, date))
    }
}

/// Response to a successful add, the exercise along with who it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddedExercise {
    pub username: String,
    pub description: String,
    pub duration: u32,
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub date: Timestamp,
}

impl AddedExercise {
    pub fn new(user: User, exercise: Exercise) -> Self {
        Self {
            username: user.username,
            description: exercise.description,
            duration: exercise.duration,
            id: exercise.id,
            date: exercise.date,
        }
    }
}

/// Largest limit the store can bind. Anything above lists everything anyway
pub const MAX_LIMIT: u64 = i64::MAX as u64;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogQuery {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

impl ValidateModel for LogQuery {
    type Valid = LogFilter;

    fn validate(self) -> Result<LogFilter, ServerError> {
        let user_id = self
            .user_id
            .as_deref()
            .and_then(|id| Uuid::parse(id).ok())
            .ok_or_else(|| validation_error!("User ID is a mandatory field"))?;

        let limit = match self.limit.as_deref() {
            None | Some("") => None,
            // Too many digits for a u64 is still a number, just a large one
            Some(limit) if is_unsigned_integer(limit) => {
                Some(limit.parse::<u64>().unwrap_or(u64::MAX).min(MAX_LIMIT))
            }
            Some(_) => return Err(validation_error!("Limit must be a number")),
        };
        // A zero limit doesn't limit anything
        let limit = limit.filter(|l| *l > 0);

        let range = match (self.from.as_deref(), self.to.as_deref()) {
            (Some(from), Some(to)) if !from.is_empty() && !to.is_empty() => {
                match (DateInput::parse(from), DateInput::parse(to)) {
                    (Some(from), Some(to)) => Some(DateRange::new(from, to)),
                    _ => return Err(validation_error!("From and to must be dates")),
                }
            }
            _ => None,
        };

        Ok(LogFilter {
            user_id,
            range,
            limit,
        })
    }
}
