use serde::{Deserialize, Serialize};

use crate::types::{Timestamp, Uuid};

#[cfg(feature = "backend")]
use {
    crate::{api::error::ServerError, model::{LogFilter, NewExercise}},
    exemplar::Model,
    rusqlite::{Connection, OptionalExtension},
    sea_query::{enum_def, Alias, Expr, Order, Query, SqliteQueryBuilder},
    sea_query_rusqlite::RusqliteBinder,
    tracing::instrument,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("exercise"))]
#[cfg_attr(feature = "backend", enum_def)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    /// Minutes
    pub duration: u32,
    pub date: Timestamp,
}

#[cfg(feature = "backend")]
impl Exercise {
    const COLUMNS: [ExerciseIden; 5] = [
        ExerciseIden::Id,
        ExerciseIden::UserId,
        ExerciseIden::Description,
        ExerciseIden::Duration,
        ExerciseIden::Date,
    ];

    pub fn fetch_by_id(conn: &Connection, id: &Uuid) -> Result<Option<Exercise>, ServerError> {
        let (sql, values) = Query::select()
            .columns(Self::COLUMNS)
            .from(ExerciseIden::Table)
            .and_where(Expr::col(ExerciseIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_row(&*values.as_params(), Exercise::from_row)
            .optional()?;
        Ok(res)
    }

    /// Exercises belonging to `filter.user_id`, oldest entry first
    #[instrument(skip(conn))]
    pub fn fetch_log(conn: &Connection, filter: &LogFilter) -> Result<Vec<Exercise>, ServerError> {
        let mut query = Query::select();
        query
            .columns(Self::COLUMNS)
            .from(ExerciseIden::Table)
            .and_where(Expr::col(ExerciseIden::UserId).eq(&filter.user_id));

        if let Some(range) = &filter.range {
            query
                .and_where(Expr::col(ExerciseIden::Date).gte(Timestamp::from(range.from)))
                .and_where(Expr::col(ExerciseIden::Date).lte(Timestamp::from(range.to)));
        }

        query.order_by(Alias::new("rowid"), Order::Asc);

        if let Some(limit) = filter.limit {
            query.limit(limit);
        }

        let (sql, values) = query.build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_map(&*values.as_params(), Exercise::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(res)
    }

    #[instrument(skip(conn))]
    pub fn create(conn: &mut Connection, new_exercise: NewExercise) -> Result<Exercise, ServerError> {
        let tx = conn.transaction()?;
        let exercise = {
            new_exercise.insert(&tx)?;
            Exercise::fetch_by_id(&tx, &new_exercise.id)?.ok_or_else(|| {
                crate::other_error!("Exercise {} missing after insert", new_exercise.id)
            })?
        };
        tx.commit()?;

        Ok(exercise)
    }
}
