//! Request-side types for the performance ranking query.
//!
//! Genre, date unit and result size all come from closed sets; anything
//! outside the set is rejected before a query is built.

use chrono::{DateTime, Days, Months, NaiveDate, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Rejection kinds raised while validating ranking/browse parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankingError {
    #[error("Ranking size must be one of 10, 20, 50 or 100")]
    InvalidSize,

    #[error("Unknown genre: {0}")]
    InvalidGenre(String),

    #[error("Date unit must be one of day, week or month")]
    InvalidDateUnit(String),

    #[error("Performance id is not a valid UUID: {0}")]
    InvalidIdentifier(String),
}

/// Performance genres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Concert,
    Musical,
    Play,
    Classic,
}

impl Genre {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Concert => "concert",
            Self::Musical => "musical",
            Self::Play => "play",
            Self::Classic => "classic",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = RankingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "concert" => Ok(Self::Concert),
            "musical" => Ok(Self::Musical),
            "play" => Ok(Self::Play),
            "classic" => Ok(Self::Classic),
            other => Err(RankingError::InvalidGenre(other.to_string())),
        }
    }
}

/// Window length for a ranking query, anchored at a cursor date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateUnit {
    Day,
    Week,
    Month,
}

impl FromStr for DateUnit {
    type Err = RankingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(RankingError::InvalidDateUnit(other.to_string())),
        }
    }
}

/// Result size from the closed set {10, 20, 50, 100}.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingSize(u64);

impl RankingSize {
    pub const ALLOWED: [u64; 4] = [10, 20, 50, 100];

    pub fn new(size: u64) -> Result<Self, RankingError> {
        if Self::ALLOWED.contains(&size) {
            Ok(Self(size))
        } else {
            Err(RankingError::InvalidSize)
        }
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Half-open date window `[start, end)` evaluated at start-of-day UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Window of one `unit` starting at `date`.
    ///
    /// Saturates at the calendar boundary rather than failing; a cursor
    /// date near `NaiveDate::MAX` is not reachable through the API.
    #[must_use]
    pub fn from_unit(date: NaiveDate, unit: DateUnit) -> Self {
        let end = match unit {
            DateUnit::Day => date.checked_add_days(Days::new(1)),
            DateUnit::Week => date.checked_add_days(Days::new(7)),
            DateUnit::Month => date.checked_add_months(Months::new(1)),
        }
        .unwrap_or(NaiveDate::MAX);

        Self { start: date, end }
    }

    /// RFC 3339 UTC timestamp of the window start (inclusive).
    #[must_use]
    pub fn start_rfc3339(&self) -> String {
        at_start_of_day(self.start).to_rfc3339()
    }

    /// RFC 3339 UTC timestamp of the window end (exclusive).
    #[must_use]
    pub fn end_rfc3339(&self) -> String {
        at_start_of_day(self.end).to_rfc3339()
    }
}

fn at_start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0)
        .unwrap_or_default()
        .and_utc()
}

/// Performance identifiers on the wire are UUID strings.
pub fn parse_performance_id(raw: &str) -> Result<Uuid, RankingError> {
    Uuid::parse_str(raw).map_err(|_| RankingError::InvalidIdentifier(raw.to_string()))
}
