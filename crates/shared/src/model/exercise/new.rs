use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "backend")]
use exemplar::Model;

use crate::types::{Timestamp, Uuid};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("exercise"))]
pub struct NewExercise {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub duration: u32,
    pub date: Timestamp,
}

impl NewExercise {
    pub fn new<T: Into<String>>(
        user_id: Uuid,
        description: T,
        duration: u32,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            description: description.into(),
            duration,
            date: date.into(),
        }
    }
}
