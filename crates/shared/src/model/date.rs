use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Years that fit the four digit storage format
const YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// A date as given in a request. A bare calendar day is kept apart from a
/// full timestamp so a range ending on a day can include the whole day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateInput {
    Day(NaiveDate),
    Instant(DateTime<Utc>),
}

impl DateInput {
    /// Accepts `2024-01-31`, RFC 3339 timestamps and offset-less
    /// `2024-01-31T10:00:00` (read as UTC). Anything outside years
    /// 0000 to 9999 once in UTC is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        Self::parse_any_year(value.trim()).filter(|input| {
            YEARS.contains(&input.start().year()) && YEARS.contains(&input.end().year())
        })
    }

    fn parse_any_year(value: &str) -> Option<Self> {
        if let Ok(date) = DateTime::parse_from_rfc3339(value) {
            return Some(Self::Instant(date.with_timezone(&Utc)));
        }
        if let Ok(day) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            return Some(Self::Day(day));
        }
        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
            .map(|date| Self::Instant(date.and_utc()))
    }

    /// First instant covered
    pub fn start(&self) -> DateTime<Utc> {
        match self {
            Self::Day(day) => day.and_time(NaiveTime::MIN).and_utc(),
            Self::Instant(date) => *date,
        }
    }

    /// Last instant covered
    pub fn end(&self) -> DateTime<Utc> {
        match self {
            Self::Day(_) => self
                .start()
                .checked_add_signed(Duration::days(1))
                .map_or(DateTime::<Utc>::MAX_UTC, |next| next - Duration::nanoseconds(1)),
            Self::Instant(date) => *date,
        }
    }
}

/// Inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl DateRange {
    pub fn new(from: DateInput, to: DateInput) -> Self {
        Self {
            from: from.start(),
            to: to.end(),
        }
    }

    pub fn contains(&self, date: &DateTime<Utc>) -> bool {
        &self.from <= date && date <= &self.to
    }
}

#[cfg(test)]
mod test {
    use chrono::{TimeZone, Utc};

    use super::{DateInput, DateRange};

    #[test]
    fn test_parse_day() {
        let input = DateInput::parse("2024-03-05").unwrap();
        assert_eq!(input.start(), Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap());
        assert!(input.end() < Utc.with_ymd_and_hms(2024, 3, 6, 0, 0, 0).unwrap());
        assert!(input.end() > Utc.with_ymd_and_hms(2024, 3, 5, 23, 59, 59).unwrap());
    }

    #[test]
    fn test_parse_timestamps() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 5, 10, 30, 0).unwrap();
        assert_eq!(
            DateInput::parse("2024-03-05T10:30:00Z"),
            Some(DateInput::Instant(expected))
        );
        assert_eq!(
            DateInput::parse("2024-03-05T12:30:00+02:00"),
            Some(DateInput::Instant(expected))
        );
        assert_eq!(
            DateInput::parse("2024-03-05T10:30:00"),
            Some(DateInput::Instant(expected))
        );
        assert_eq!(
            DateInput::parse(" 2024-03-05 10:30:00 "),
            Some(DateInput::Instant(expected))
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(DateInput::parse("yesterday"), None);
        assert_eq!(DateInput::parse("2024-02-30"), None);
        assert_eq!(DateInput::parse("2024-13-01"), None);
        assert_eq!(DateInput::parse(""), None);
    }

    #[test]
    fn test_parse_rejects_years_outside_four_digits() {
        for value in [
            "+10000-01-01",
            "-0001-01-01",
            "+262142-12-31",
            "+10000-01-01T00:00:00",
            "9999-12-31T23:00:00-02:00",
            "0000-01-01T00:30:00+01:00",
        ] {
            assert_eq!(DateInput::parse(value), None, "{value}");
        }
    }

    #[test]
    fn test_parse_year_bounds() {
        let last = DateInput::parse("9999-12-31").unwrap();
        assert_eq!(last.start(), Utc.with_ymd_and_hms(9999, 12, 31, 0, 0, 0).unwrap());
        assert!(last.end() > Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap());

        let first = DateInput::parse("0000-01-01").unwrap();
        assert_eq!(first.start(), Utc.with_ymd_and_hms(0, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_end_of_last_representable_day() {
        let day = DateInput::Day(chrono::NaiveDate::MAX);
        assert_eq!(day.end(), chrono::DateTime::<Utc>::MAX_UTC);
    }

    #[test]
    fn test_range_contains_whole_days() {
        let range = DateRange::new(
            DateInput::parse("2024-01-01").unwrap(),
            DateInput::parse("2024-01-31").unwrap(),
        );
        assert!(range.contains(&Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
        assert!(range.contains(&Utc.with_ymd_and_hms(2024, 1, 31, 23, 0, 0).unwrap()));
        assert!(!range.contains(&Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()));
        assert!(!range.contains(&Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap()));
    }
}
