use mealdeck_shared::{Error, Result};
use time::{Date, Duration, Month, OffsetDateTime};
use time_tz::{ToTimezone, timezones};

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Furthest week, in either direction, that can be planned (about a century).
pub const MAX_WEEK_OFFSET: i64 = 5_200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDay {
    pub name: String,
    pub date: Date,
    pub display_date: String,
}

/// Seven days from Sunday to Saturday. Derived from a week offset, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekInfo {
    pub start: Date,
    pub end: Date,
    pub display_range: String,
    pub days: Vec<WeekDay>,
}

/// Current calendar day in the given IANA timezone, or in the host's local
/// offset when none is given. Falls back to UTC when the local offset cannot
/// be determined.
pub fn today(timezone: Option<&str>) -> Date {
    let now = match timezone.and_then(timezones::get_by_name) {
        Some(tz) => OffsetDateTime::now_utc().to_timezone(tz),
        None => OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc()),
    };

    now.date()
}

pub fn compute_week(offset: i64, timezone: Option<&str>) -> Result<WeekInfo> {
    compute_week_from(today(timezone), offset)
}

/// Week `offset` weeks away from the one containing `today`, anchored on the
/// most recent Sunday (today itself when it is a Sunday). Offsets beyond
/// [`MAX_WEEK_OFFSET`], or weeks that fall outside the calendar, are rejected.
pub fn compute_week_from(today: Date, offset: i64) -> Result<WeekInfo> {
    if !(-MAX_WEEK_OFFSET..=MAX_WEEK_OFFSET).contains(&offset) {
        return Err(Error::WeekOutOfRange(offset));
    }

    let since_sunday = today.weekday().number_days_from_sunday() as i64;
    let (start, end) = today
        .checked_sub(Duration::days(since_sunday))
        .and_then(|sunday| sunday.checked_add(Duration::weeks(offset)))
        .and_then(|start| Some((start, start.checked_add(Duration::days(6))?)))
        .ok_or(Error::WeekOutOfRange(offset))?;

    let days = DAY_NAMES
        .iter()
        .zip(0..)
        .map(|(name, i)| {
            let date = start + Duration::days(i);
            WeekDay {
                name: (*name).to_owned(),
                date,
                display_date: format_date(date),
            }
        })
        .collect();

    Ok(WeekInfo {
        start,
        end,
        display_range: format_range(start, end),
        days,
    })
}

fn short_month(month: Month) -> String {
    month.to_string().chars().take(3).collect()
}

/// `Jan 5`
pub fn format_date(date: Date) -> String {
    format!("{} {}", short_month(date.month()), date.day())
}

/// `January 5 - 11` within a month, `January 26 - February 1` across months.
pub fn format_range(start: Date, end: Date) -> String {
    if start.month() == end.month() {
        return format!("{} {} - {}", start.month(), start.day(), end.day());
    }

    format!(
        "{} {} - {} {}",
        start.month(),
        start.day(),
        end.month(),
        end.day()
    )
}
