// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Five/six field cron expression parsing and matching
//!
//! Field order is `minute hour day-of-month month day-of-week [second]`.
//! Each field is a comma list of `*`, `n` or `a-b`, each optionally
//! followed by `/step`. Months and weekdays also accept three-letter
//! names, weekday `7` is Sunday, and day-of-month `L` is the last day of
//! the month.

use super::{CronError, FieldSpec, DAY_OF_MONTH, DAY_OF_WEEK, FIELDS, MONTH, SECOND};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use std::str::FromStr;

/// How far a search may wander before giving up, in years
const SEARCH_YEARS: i32 = 50;

const MONTH_NAMES: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];
const WEEKDAY_NAMES: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

/// Set of allowed values for one field, as a bitmask over 0..64
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct FieldSet(u64);

impl FieldSet {
    fn single(value: u32) -> Self {
        let mut set = Self::default();
        set.insert(value);
        set
    }

    fn insert(&mut self, value: u32) {
        if value < 64 {
            self.0 |= 1 << value;
        }
    }

    pub(crate) fn contains(self, value: u32) -> bool {
        value < 64 && self.0 & (1 << value) != 0
    }

    /// Smallest member `>= value`
    pub(crate) fn next_from(self, value: u32) -> Option<u32> {
        if value >= 64 {
            return None;
        }
        let rest = self.0 >> value;
        (rest != 0).then(|| value + rest.trailing_zeros())
    }

    /// Largest member `<= value`
    pub(crate) fn prev_from(self, value: u32) -> Option<u32> {
        let mask = if value >= 63 {
            u64::MAX
        } else {
            (1u64 << (value + 1)) - 1
        };
        let rest = self.0 & mask;
        (rest != 0).then(|| 63 - rest.leading_zeros())
    }
}

/// A parsed cron expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronSchedule {
    minutes: FieldSet,
    hours: FieldSet,
    days: FieldSet,
    months: FieldSet,
    weekdays: FieldSet,
    seconds: FieldSet,
    last_day: bool,
    days_restricted: bool,
    weekdays_restricted: bool,
    has_seconds: bool,
}

impl CronSchedule {
    /// Parse a five or six field expression
    pub fn parse(expr: &str) -> Result<Self, CronError> {
        let lowered = expr.to_lowercase();
        let fields: Vec<&str> = lowered.split_whitespace().collect();
        if !(5..=6).contains(&fields.len()) {
            return Err(CronError::BadCron(format!(
                "expected 5 or 6 fields, got {} in {:?}",
                fields.len(),
                expr
            )));
        }

        let (minutes, _) = parse_field(fields[0], 0)?;
        let (hours, _) = parse_field(fields[1], 1)?;
        let (days, last_day) = parse_field(fields[DAY_OF_MONTH], DAY_OF_MONTH)?;
        let (months, _) = parse_field(fields[MONTH], MONTH)?;
        let (mut weekdays, _) = parse_field(fields[DAY_OF_WEEK], DAY_OF_WEEK)?;
        let seconds = match fields.get(SECOND) {
            Some(field) => parse_field(field, SECOND)?.0,
            None => FieldSet::single(0),
        };

        // Sunday is both 0 and 7
        if weekdays.contains(7) {
            weekdays.insert(0);
            weekdays.0 &= !(1 << 7);
        }

        Ok(Self {
            minutes,
            hours,
            days,
            months,
            weekdays,
            seconds,
            last_day,
            days_restricted: is_restricted(fields[DAY_OF_MONTH]),
            weekdays_restricted: is_restricted(fields[DAY_OF_WEEK]),
            has_seconds: fields.len() == 6,
        })
    }

    /// Whether the expression carries a seconds field
    pub fn has_seconds(&self) -> bool {
        self.has_seconds
    }

    /// Check whether `dt` is a firing time
    pub fn matches(&self, dt: &NaiveDateTime) -> bool {
        self.months.contains(dt.month())
            && self.matches_day(dt.date())
            && self.hours.contains(dt.hour())
            && self.minutes.contains(dt.minute())
            && self.seconds.contains(dt.second())
    }

    /// When both day fields are restricted either may match, as in cron
    fn matches_day(&self, date: NaiveDate) -> bool {
        let is_last_day = date.succ_opt().is_none_or(|next| next.month() != date.month());
        let dom = self.days.contains(date.day()) || (self.last_day && is_last_day);
        let dow = self.weekdays.contains(date.weekday().num_days_from_sunday());
        if self.days_restricted && self.weekdays_restricted {
            dom || dow
        } else {
            dom && dow
        }
    }

    /// First firing time strictly after `after`
    pub fn next_after(&self, after: NaiveDateTime) -> Result<NaiveDateTime, CronError> {
        let limit = after.year() + SEARCH_YEARS;
        let mut t = found(
            after
                .with_nanosecond(0)
                .and_then(|t| t.checked_add_signed(chrono::TimeDelta::seconds(1))),
        )?;

        loop {
            if t.year() > limit {
                return Err(CronError::NoMatch);
            }
            let date = t.date();
            let (hour, minute, second) = (t.hour(), t.minute(), t.second());

            match self.months.next_from(date.month()) {
                Some(month) if month == date.month() => {}
                Some(month) => {
                    t = found(start_of(NaiveDate::from_ymd_opt(date.year(), month, 1)))?;
                    continue;
                }
                None => {
                    t = found(start_of(NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)))?;
                    continue;
                }
            }

            if !self.matches_day(date) {
                t = found(start_of(date.succ_opt()))?;
                continue;
            }

            let Some(h) = self.hours.next_from(hour) else {
                t = found(start_of(date.succ_opt()))?;
                continue;
            };
            if h != hour {
                t = found(date.and_hms_opt(h, 0, 0))?;
                continue;
            }

            let Some(m) = self.minutes.next_from(minute) else {
                t = found(hour_after(date, hour))?;
                continue;
            };
            if m != minute {
                t = found(date.and_hms_opt(hour, m, 0))?;
                continue;
            }

            let Some(s) = self.seconds.next_from(second) else {
                t = found(minute_after(date, hour, minute))?;
                continue;
            };
            return found(date.and_hms_opt(hour, minute, s));
        }
    }

    /// Last firing time strictly before `before`
    pub fn prev_before(&self, before: NaiveDateTime) -> Result<NaiveDateTime, CronError> {
        let limit = before.year() - SEARCH_YEARS;
        let truncated = found(before.with_nanosecond(0))?;
        let mut t = if truncated < before {
            truncated
        } else {
            found(truncated.checked_sub_signed(chrono::TimeDelta::seconds(1)))?
        };

        loop {
            if t.year() < limit {
                return Err(CronError::NoMatch);
            }
            let date = t.date();
            let (hour, minute, second) = (t.hour(), t.minute(), t.second());

            match self.months.prev_from(date.month()) {
                Some(month) if month == date.month() => {}
                Some(month) => {
                    t = found(end_of(last_day_of(date.year(), month)))?;
                    continue;
                }
                None => {
                    t = found(end_of(NaiveDate::from_ymd_opt(date.year() - 1, 12, 31)))?;
                    continue;
                }
            }

            if !self.matches_day(date) {
                t = found(end_of(date.pred_opt()))?;
                continue;
            }

            let Some(h) = self.hours.prev_from(hour) else {
                t = found(end_of(date.pred_opt()))?;
                continue;
            };
            if h != hour {
                t = found(date.and_hms_opt(h, 59, 59))?;
                continue;
            }

            let Some(m) = self.minutes.prev_from(minute) else {
                t = found(hour_before(date, hour))?;
                continue;
            };
            if m != minute {
                t = found(date.and_hms_opt(hour, m, 59))?;
                continue;
            }

            let Some(s) = self.seconds.prev_from(second) else {
                t = found(minute_before(date, hour, minute))?;
                continue;
            };
            return found(date.and_hms_opt(hour, minute, s));
        }
    }
}

impl FromStr for CronSchedule {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_restricted(field: &str) -> bool {
    field != "*" && field != "?"
}

/// Parse one field; the flag reports a day-of-month `L`
fn parse_field(field: &str, idx: usize) -> Result<(FieldSet, bool), CronError> {
    let spec = &FIELDS[idx];
    let mut set = FieldSet::default();
    let mut last_day = false;

    for part in field.split(',') {
        if idx == DAY_OF_MONTH && part == "l" {
            last_day = true;
            continue;
        }
        parse_part(part, idx, spec, &mut set)?;
    }

    Ok((set, last_day))
}

fn parse_part(part: &str, idx: usize, spec: &FieldSpec, set: &mut FieldSet) -> Result<(), CronError> {
    let (range, step) = match part.split_once('/') {
        Some((range, step)) => match step.parse::<u32>() {
            Ok(step) if step > 0 => (range, Some(step)),
            _ => {
                return Err(CronError::BadCron(format!(
                    "invalid step in {} field: {:?}",
                    spec.name, part
                )))
            }
        },
        None => (part, None),
    };

    let (lo, hi) = if range == "*" || range == "?" {
        (spec.min, spec.max)
    } else if let Some((begin, end)) = range.split_once('-') {
        (value(begin, idx, spec)?, value(end, idx, spec)?)
    } else {
        let v = value(range, idx, spec)?;
        match step {
            Some(_) => (v, spec.max),
            None => (v, v),
        }
    };

    // Weekday 7 is an alias for Sunday
    let max = if idx == DAY_OF_WEEK { 7 } else { spec.max };
    if lo < spec.min || hi > max || lo > hi {
        return Err(CronError::BadCron(format!(
            "{:?} is out of range for {} field ({}-{})",
            part, spec.name, spec.min, spec.max
        )));
    }

    for v in (lo..=hi).step_by(step.unwrap_or(1) as usize) {
        set.insert(v);
    }
    Ok(())
}

fn value(token: &str, idx: usize, spec: &FieldSpec) -> Result<u32, CronError> {
    if let Ok(n) = token.parse::<u32>() {
        return Ok(n);
    }
    if !token.is_empty() && token.chars().all(|c| c.is_ascii_alphabetic()) {
        let (names, first): (&[&str], u32) = match idx {
            MONTH => (&MONTH_NAMES[..], 1),
            DAY_OF_WEEK => (&WEEKDAY_NAMES[..], 0),
            _ => (&[][..], 0),
        };
        return names
            .iter()
            .position(|name| *name == token)
            .map(|pos| pos as u32 + first)
            .ok_or_else(|| CronError::NotAlpha(format!("{:?} in {} field", token, spec.name)));
    }
    Err(CronError::BadCron(format!(
        "invalid value {:?} in {} field",
        token, spec.name
    )))
}

fn found(t: Option<NaiveDateTime>) -> Result<NaiveDateTime, CronError> {
    t.ok_or(CronError::NoMatch)
}

fn start_of(date: Option<NaiveDate>) -> Option<NaiveDateTime> {
    date?.and_hms_opt(0, 0, 0)
}

fn end_of(date: Option<NaiveDate>) -> Option<NaiveDateTime> {
    date?.and_hms_opt(23, 59, 59)
}

fn last_day_of(year: i32, month: u32) -> Option<NaiveDate> {
    let (year, month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()
}

fn hour_after(date: NaiveDate, hour: u32) -> Option<NaiveDateTime> {
    if hour >= 23 {
        start_of(date.succ_opt())
    } else {
        date.and_hms_opt(hour + 1, 0, 0)
    }
}

fn minute_after(date: NaiveDate, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    if minute >= 59 {
        hour_after(date, hour)
    } else {
        date.and_hms_opt(hour, minute + 1, 0)
    }
}

fn hour_before(date: NaiveDate, hour: u32) -> Option<NaiveDateTime> {
    if hour == 0 {
        end_of(date.pred_opt())
    } else {
        date.and_hms_opt(hour - 1, 59, 59)
    }
}

fn minute_before(date: NaiveDate, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    if minute == 0 {
        hour_before(date, hour)
    } else {
        date.and_hms_opt(hour, minute - 1, 59)
    }
}
