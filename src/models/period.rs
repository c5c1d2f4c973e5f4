//! Budget period resolution
//!
//! A budget period either follows the calendar month or runs from an anchor
//! day of one month to the same day of the next. Everything here is derived
//! from an explicit reference instant; nothing reads the wall clock.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PaceError, PaceResult};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// How the active period is determined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PeriodMode {
    /// From the 1st to the last day of the current month
    #[default]
    CalendarMonth,
    /// From an anchor day-of-month to the same day next month
    CustomAnchored,
}

impl fmt::Display for PeriodMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CalendarMonth => write!(f, "calendar month"),
            Self::CustomAnchored => write!(f, "custom reset day"),
        }
    }
}

/// Day of the month on which a custom period resets
///
/// Limited to 1-28 so that the day exists in every month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct AnchorDay(u32);

impl AnchorDay {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 28;

    /// Validate and wrap a day-of-month
    pub fn new(day: u32) -> PaceResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&day) {
            Ok(Self(day))
        } else {
            Err(PaceError::invalid_anchor_day(day))
        }
    }

    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Start of the anchored period that contains `today`
    ///
    /// If the anchor day is still ahead this month, the period began on the
    /// anchor day of the previous month.
    pub fn period_start(&self, today: NaiveDate) -> PaceResult<NaiveDate> {
        let (year, month) = if self.0 > today.day() {
            if today.month() == 1 {
                (today.year() - 1, 12)
            } else {
                (today.year(), today.month() - 1)
            }
        } else {
            (today.year(), today.month())
        };

        NaiveDate::from_ymd_opt(year, month, self.0).ok_or_else(|| {
            PaceError::Configuration(format!(
                "no day {} in {:04}-{:02}",
                self.0, year, month
            ))
        })
    }
}

impl TryFrom<u32> for AnchorDay {
    type Error = PaceError;

    fn try_from(day: u32) -> Result<Self, Self::Error> {
        Self::new(day)
    }
}

impl From<AnchorDay> for u32 {
    fn from(day: AnchorDay) -> Self {
        day.0
    }
}

impl fmt::Display for AnchorDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rounding applied to fractional elapsed days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    #[default]
    Floor,
    Ceil,
}

impl Rounding {
    pub fn apply(self, days: f64) -> f64 {
        match self {
            Self::Floor => days.floor(),
            Self::Ceil => days.ceil(),
        }
    }
}

/// The active budget period relative to a reference instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodWindow {
    /// First day of the period; its midnight is the period's first instant
    pub start_date: NaiveDate,
    pub period_length_days: u32,
    pub days_elapsed: u32,
    pub days_remaining: u32,
}

impl PeriodWindow {
    /// Resolve the period containing `now`
    ///
    /// `anchor_day` is only inspected for [`PeriodMode::CustomAnchored`].
    pub fn resolve(
        mode: PeriodMode,
        anchor_day: u32,
        now: NaiveDateTime,
        rounding: Rounding,
    ) -> PaceResult<Self> {
        let today = now.date();

        let start_date = match mode {
            PeriodMode::CalendarMonth => first_of_month(today),
            PeriodMode::CustomAnchored => AnchorDay::new(anchor_day)?.period_start(today)?,
        };

        let next_start = start_date
            .checked_add_months(Months::new(1))
            .ok_or_else(|| {
                PaceError::Configuration(format!("period starting {} is out of range", start_date))
            })?;

        let period_length_days = (next_start - start_date).num_days() as u32;

        let since_start = now - start_date.and_time(NaiveTime::MIN);
        let elapsed = rounding.apply(since_start.num_seconds() as f64 / SECONDS_PER_DAY);
        let days_elapsed = elapsed.clamp(0.0, period_length_days as f64) as u32;

        Ok(Self {
            start_date,
            period_length_days,
            days_elapsed,
            days_remaining: period_length_days.saturating_sub(days_elapsed),
        })
    }

    /// Last day of the period (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.start_date + chrono::Duration::days(self.period_length_days as i64 - 1)
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date()
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month
    date.with_day(1).unwrap_or(date)
}
