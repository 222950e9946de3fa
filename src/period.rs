//! The symbolic time windows used to filter the dashboard.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month};

use crate::Error;

/// The window of time the dashboard statistics are computed over.
///
/// A period only ever has a lower bound. The window always extends through
/// "now", so future-dated transactions are never filtered out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Period {
    /// The current calendar day.
    Day,
    /// The current ISO week, starting on Monday.
    Week,
    /// The current calendar month.
    Month,
    /// The current calendar year.
    Year,
    /// No lower bound.
    All,
}

impl Default for Period {
    fn default() -> Self {
        Self::Month
    }
}

impl Period {
    /// The value used for this period in queries and saved preferences.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::All => "all",
        }
    }

    /// Human-readable label for this period.
    pub fn label(self) -> &'static str {
        match self {
            Self::Day => "День",
            Self::Week => "Неделя",
            Self::Month => "Месяц",
            Self::Year => "Год",
            Self::All => "Всё время",
        }
    }

    /// The inclusive lower bound of the window containing `today`, or `None`
    /// for [Period::All].
    pub fn start_date(self, today: Date) -> Option<Date> {
        match self {
            Self::Day => Some(today),
            Self::Week => {
                let weekday_number = today.weekday().number_from_monday() as i64;
                Some(today - Duration::days(weekday_number - 1))
            }
            Self::Month => Some(today.replace_day(1).expect("invalid month start date")),
            Self::Year => Some(
                Date::from_calendar_date(today.year(), Month::January, 1)
                    .expect("invalid year start date"),
            ),
            Self::All => None,
        }
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_query_value())
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            "all" => Ok(Self::All),
            other => Err(Error::UnknownPeriod(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::Period;

    #[test]
    fn day_starts_today() {
        let today = date!(2024 - 01 - 15);

        assert_eq!(Period::Day.start_date(today), Some(today));
    }

    #[test]
    fn week_starts_on_monday() {
        // A Thursday.
        let today = date!(2024 - 01 - 18);

        assert_eq!(
            Period::Week.start_date(today),
            Some(date!(2024 - 01 - 15))
        );
    }

    #[test]
    fn week_start_on_a_monday_is_that_monday() {
        let monday = date!(2024 - 01 - 15);

        assert_eq!(Period::Week.start_date(monday), Some(monday));
    }

    #[test]
    fn week_start_crosses_month_boundaries() {
        // Friday 1 March 2024; the week began Monday 26 February.
        let today = date!(2024 - 03 - 01);

        assert_eq!(
            Period::Week.start_date(today),
            Some(date!(2024 - 02 - 26))
        );
    }

    #[test]
    fn month_starts_on_the_first() {
        assert_eq!(
            Period::Month.start_date(date!(2024 - 02 - 29)),
            Some(date!(2024 - 02 - 01))
        );
    }

    #[test]
    fn year_starts_in_january() {
        assert_eq!(
            Period::Year.start_date(date!(2024 - 08 - 07)),
            Some(date!(2024 - 01 - 01))
        );
    }

    #[test]
    fn all_has_no_lower_bound() {
        assert_eq!(Period::All.start_date(date!(2024 - 08 - 07)), None);
    }

    #[test]
    fn query_values_round_trip() {
        for period in [
            Period::Day,
            Period::Week,
            Period::Month,
            Period::Year,
            Period::All,
        ] {
            let parsed: Period = period.as_query_value().parse().expect("should parse");
            assert_eq!(parsed, period);
        }
    }
}
