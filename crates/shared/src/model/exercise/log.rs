use serde::{Deserialize, Serialize};

use crate::{
    model::{DateRange, Exercise},
    types::Uuid,
};

/// Which of a user's exercises to list
#[derive(Debug, Clone, PartialEq)]
pub struct LogFilter {
    pub user_id: Uuid,
    /// Only applied when both bounds were given
    pub range: Option<DateRange>,
    pub limit: Option<u64>,
}

impl LogFilter {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            range: None,
            limit: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLog {
    pub log: Vec<Exercise>,
    pub count: usize,
}

impl From<Vec<Exercise>> for ExerciseLog {
    fn from(log: Vec<Exercise>) -> Self {
        let count = log.len();
        Self { log, count }
    }
}
