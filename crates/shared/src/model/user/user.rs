use serde::{Deserialize, Serialize};

use crate::types::Uuid;

#[cfg(feature = "backend")]
use {
    crate::{api::error::ServerError, model::NewUser},
    exemplar::Model,
    rusqlite::{Connection, OptionalExtension},
    sea_query::{enum_def, Alias, Expr, Order, Query, SqliteQueryBuilder},
    sea_query_rusqlite::RusqliteBinder,
    tracing::instrument,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("user"))]
#[cfg_attr(feature = "backend", enum_def)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
}

#[cfg(feature = "backend")]
impl User {
    pub fn fetch_by_id(conn: &Connection, id: &Uuid) -> Result<Option<User>, ServerError> {
        let (sql, values) = Query::select()
            .columns([UserIden::Id, UserIden::Username])
            .from(UserIden::Table)
            .and_where(Expr::col(UserIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let user = stmt
            .query_row(&*values.as_params(), User::from_row)
            .optional()?;
        Ok(user)
    }

    pub fn exists(conn: &Connection, id: &Uuid) -> Result<bool, ServerError> {
        let (sql, values) = Query::select()
            .column(UserIden::Id)
            .from(UserIden::Table)
            .and_where(Expr::col(UserIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        Ok(stmt.exists(&*values.as_params())?)
    }

    /// All users in the order they registered
    pub fn fetch_all(conn: &Connection) -> Result<Vec<User>, ServerError> {
        let (sql, values) = Query::select()
            .columns([UserIden::Id, UserIden::Username])
            .from(UserIden::Table)
            .order_by(Alias::new("rowid"), Order::Asc)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let users = stmt
            .query_map(&*values.as_params(), User::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(users)
    }

    /// Inserts the user. A taken username comes back as
    /// [`ServerError::Conflict`] from the unique index.
    #[instrument(skip(conn))]
    pub fn create(conn: &mut Connection, new_user: NewUser) -> Result<User, ServerError> {
        let tx = conn.transaction()?;
        let user = {
            new_user.insert(&tx)?;
            User::fetch_by_id(&tx, &new_user.id)?.ok_or_else(|| {
                crate::other_error!("User {} missing after insert", new_user.id)
            })?
        };
        tx.commit()?;

        Ok(user)
    }
}
