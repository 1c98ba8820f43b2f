//! Date ordering, future-date and expiration-urgency rules

use crate::clock::Clock;
use crate::error::{ComplianceError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use shared_types::{ExpirationCategory, ExpirationStatus, TemporalWindow};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Upper bound (inclusive) of the critical bucket, in days
pub const CRITICAL_WITHIN_DAYS: i64 = 30;
/// Upper bound (inclusive) of the warning bucket, in days
pub const WARNING_WITHIN_DAYS: i64 = 60;
/// Upper bound (inclusive) of the notice bucket, in days
pub const NOTICE_WITHIN_DAYS: i64 = 90;

/// Parse an RFC 3339 instant or a plain `YYYY-MM-DD` date (midnight UTC)
pub fn parse_instant(field: &str, value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ComplianceError::DateOrderViolation(format!("Invalid {}: {}", field, value)))
}

/// `end`, when present, must fall strictly after `start`
pub fn validate_date_ordering(start: &str, end: Option<&str>) -> Result<TemporalWindow> {
    let start_date = parse_instant("start date", start)?;
    let end_date = match end {
        Some(raw) => Some(parse_instant("end date", raw)?),
        None => None,
    };
    let window = TemporalWindow {
        start_date,
        end_date,
    };
    validate_window(&window)?;
    Ok(window)
}

pub fn validate_window(window: &TemporalWindow) -> Result<()> {
    match window.end_date {
        Some(end) if end <= window.start_date => Err(ComplianceError::DateOrderViolation(
            "End date must be after start date".to_string(),
        )),
        _ => Ok(()),
    }
}

/// Reject dates later than the clock's current instant
pub fn validate_not_in_future(date: DateTime<Utc>, clock: &dyn Clock) -> Result<()> {
    if date > clock.now() {
        return Err(ComplianceError::invalid("date", "cannot be in the future"));
    }
    Ok(())
}

/// Whole days until `end`, rounded up; negative once expired
fn days_until(end: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (end - now).num_milliseconds();
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}

/// Bucket an agreement by how soon it expires.
///
/// | days until expiration | category  |
/// |-----------------------|-----------|
/// | no end date           | ok        |
/// | < 0 (expired)         | critical  |
/// | 0..=30                | critical  |
/// | 31..=60               | warning   |
/// | 61..=90               | notice    |
/// | > 90                  | ok        |
pub fn categorize_expiration(
    end_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> ExpirationStatus {
    let Some(end) = end_date else {
        return ExpirationStatus {
            category: ExpirationCategory::Ok,
            days_until_expiration: None,
            message: "No expiration date set".to_string(),
        };
    };

    let days = days_until(end, now);
    let (category, message) = if days < 0 {
        (
            ExpirationCategory::Critical,
            format!("Expired {} days ago", days.abs()),
        )
    } else if days <= CRITICAL_WITHIN_DAYS {
        (
            ExpirationCategory::Critical,
            format!("Expires in {} days - URGENT renewal needed", days),
        )
    } else if days <= WARNING_WITHIN_DAYS {
        (
            ExpirationCategory::Warning,
            format!("Expires in {} days - Renewal recommended", days),
        )
    } else if days <= NOTICE_WITHIN_DAYS {
        (ExpirationCategory::Notice, format!("Expires in {} days", days))
    } else {
        (ExpirationCategory::Ok, format!("Expires in {} days", days))
    };

    ExpirationStatus {
        category,
        days_until_expiration: Some(days),
        message,
    }
}

/// [`categorize_expiration`] evaluated at the clock's current instant
pub fn categorize_expiration_now(
    end_date: Option<DateTime<Utc>>,
    clock: &dyn Clock,
) -> ExpirationStatus {
    categorize_expiration(end_date, clock.now())
}
