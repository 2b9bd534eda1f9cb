use std::{fmt, ops::Deref};

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "backend")]
use rusqlite::{
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
    ToSql,
};

/// Fixed width so stored values sort the same as text and as time
const STORAGE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// A UTC instant kept to millisecond precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Utc::now().into()
    }

    pub fn to_storage_string(&self) -> String {
        self.0.format(STORAGE_FORMAT).to_string()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value.trunc_subsecs(3))
    }
}

impl Deref for Timestamp {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(feature = "backend")]
impl ToSql for Timestamp {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::Owned(self.to_storage_string().into()))
    }
}

#[cfg(feature = "backend")]
impl FromSql for Timestamp {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        DateTime::parse_from_rfc3339(value.as_str()?)
            .map(|date| Timestamp::from(date.with_timezone(&Utc)))
            .map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

#[cfg(feature = "backend")]
impl From<Timestamp> for sea_query::Value {
    fn from(value: Timestamp) -> Self {
        value.to_storage_string().into()
    }
}

#[cfg(test)]
mod test {
    use chrono::{Duration, TimeZone, Utc};

    use super::Timestamp;

    #[test]
    fn test_truncates_to_millis() {
        let date = Utc.with_ymd_and_hms(2024, 1, 5, 7, 30, 15).unwrap() + Duration::nanoseconds(250_999_999);
        let ts = Timestamp::from(date);
        assert_eq!(ts.to_storage_string(), "2024-01-05T07:30:15.250Z");
        assert_eq!(*ts, Utc.with_ymd_and_hms(2024, 1, 5, 7, 30, 15).unwrap() + Duration::milliseconds(250));
    }

    #[test]
    fn test_storage_order_matches_time_order() {
        let early = Timestamp::from(Utc.with_ymd_and_hms(2024, 1, 5, 7, 30, 15).unwrap());
        let late = Timestamp::from(*early + Duration::milliseconds(5));
        assert!(early < late);
        assert!(early.to_storage_string() < late.to_storage_string());
    }
}
