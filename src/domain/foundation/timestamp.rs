//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Creates a new timestamp by adding the specified number of days.
    ///
    /// Negative values subtract days. Saturates at the representable range.
    pub fn add_days(&self, days: i64) -> Self {
        match Duration::try_days(days).and_then(|d| self.0.checked_add_signed(d)) {
            Some(dt) => Self(dt),
            None if days < 0 => Self(DateTime::<Utc>::MIN_UTC),
            None => Self(DateTime::<Utc>::MAX_UTC),
        }
    }

    /// Creates a new timestamp by subtracting the specified number of days.
    pub fn minus_days(&self, days: i64) -> Self {
        match days.checked_neg() {
            Some(days) => self.add_days(days),
            None => Self(DateTime::<Utc>::MAX_UTC),
        }
    }

    /// Whole days from `self` until `later`, floored at zero.
    pub fn days_until(&self, later: &Timestamp) -> u32 {
        let days = later.0.signed_duration_since(self.0).num_days();
        u32::try_from(days.max(0)).unwrap_or(u32::MAX)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn fixed() -> Timestamp {
        let dt = DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        Timestamp::from_datetime(dt)
    }

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn add_and_minus_days_are_inverse() {
        let ts = fixed();
        assert_eq!(ts.add_days(14).minus_days(14), ts);
        assert!(ts.add_days(1).is_after(&ts));
        assert!(ts.minus_days(1).is_before(&ts));
    }

    #[test]
    fn days_until_counts_whole_days() {
        let ts = fixed();
        assert_eq!(ts.days_until(&ts.add_days(14)), 14);
    }

    #[test]
    fn add_days_saturates_instead_of_overflowing() {
        let ts = fixed();
        assert_eq!(ts.add_days(i64::MAX).as_datetime(), &DateTime::<Utc>::MAX_UTC);
        assert_eq!(ts.add_days(i64::MIN).as_datetime(), &DateTime::<Utc>::MIN_UTC);
        assert_eq!(ts.minus_days(i64::MIN).as_datetime(), &DateTime::<Utc>::MAX_UTC);
        assert!(ts.days_until(&ts.add_days(i64::MAX)) > 1_000_000);
    }

    #[test]
    fn days_until_is_zero_for_past() {
        let ts = fixed();
        assert_eq!(ts.days_until(&ts.minus_days(3)), 0);
    }

    #[test]
    fn timestamp_serializes_to_json() {
        let json = serde_json::to_string(&fixed()).unwrap();
        assert!(json.contains("2024-01-15"));
    }

    #[test]
    fn timestamp_deserializes_from_json() {
        let ts: Timestamp = serde_json::from_str("\"2024-01-15T10:30:00Z\"").unwrap();
        assert_eq!(ts.as_datetime().year(), 2024);
    }
}
