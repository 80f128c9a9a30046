use std::fmt;
use chrono::Utc;
use serde::Serialize;

const MICROS_PER_SEC: i64 = 1_000_000;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

/// (exclusive upper bound in seconds, unit length in seconds, unit), ascending.
const DURATION_BUCKETS: [(u64, u64, DurationUnit); 4] = [
    (MINUTE, 1, DurationUnit::Seconds),
    (HOUR, MINUTE, DurationUnit::Minutes),
    (DAY, HOUR, DurationUnit::Hours),
    (u64::MAX, DAY, DurationUnit::Days),
];

impl DurationUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationUnit::Seconds => "seconds",
            DurationUnit::Minutes => "minutes",
            DurationUnit::Hours => "hours",
            DurationUnit::Days => "days",
        }
    }

    /// Picks the bucket for `elapsed_secs` and truncates it into that unit
    pub fn bucket(elapsed_secs: u64) -> (u64, DurationUnit) {
        let (_, unit_secs, unit) = DURATION_BUCKETS
            .iter()
            .copied()
            .find(|&(limit, _, _)| elapsed_secs < limit)
            .unwrap_or(DURATION_BUCKETS[DURATION_BUCKETS.len() - 1]);
        (elapsed_secs / unit_secs, unit)
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Distance between now and a last ping, bucketed for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelativeTime {
    pub value: u64,
    pub unit: DurationUnit,
    /// Last ping lies ahead of now (client clock ahead of ours)
    pub future: bool,
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.future {
            write!(f, "in {} {}", self.value, self.unit)
        } else {
            write!(f, "{} {} ago", self.value, self.unit)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Liveness {
    Online,
    SeenRecently,
    Offline,
}

/// Exclusive upper bounds in seconds of signed elapsed time. Anything past
/// the last entry is offline. Status and icon both read this table.
const LIVENESS_THRESHOLDS: [(i64, Liveness); 2] = [
    (15 * MINUTE as i64, Liveness::Online),
    (DAY as i64, Liveness::SeenRecently),
];

impl Liveness {
    /// Classifies signed elapsed time; negative values (future pings) are online
    pub fn from_elapsed_micros(elapsed_micros: i64) -> Self {
        LIVENESS_THRESHOLDS
            .iter()
            .find(|&&(limit_secs, _)| elapsed_micros < limit_secs.saturating_mul(MICROS_PER_SEC))
            .map(|&(_, liveness)| liveness)
            .unwrap_or(Liveness::Offline)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Liveness::Online => "online",
            Liveness::SeenRecently => "seen-recently",
            Liveness::Offline => "offline",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Liveness::Online => "🌕",
            Liveness::SeenRecently => "🌓",
            Liveness::Offline => "🌑",
        }
    }
}

impl fmt::Display for Liveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current wall-clock time in microseconds since the epoch
pub fn now_micros() -> i64 {
    Utc::now().timestamp_micros()
}

pub fn relative_time_at(last_ping: i64, now: i64) -> RelativeTime {
    let elapsed_secs = now.saturating_sub(last_ping).unsigned_abs() / MICROS_PER_SEC as u64;
    let (value, unit) = DurationUnit::bucket(elapsed_secs);
    RelativeTime {
        value,
        unit,
        future: now < last_ping,
    }
}

/// Label such as "5 minutes ago" or "in 2 minutes"
pub fn last_seen(last_ping: i64) -> String {
    last_seen_at(last_ping, now_micros())
}

pub fn last_seen_at(last_ping: i64, now: i64) -> String {
    relative_time_at(last_ping, now).to_string()
}

pub fn liveness(last_ping: i64) -> Liveness {
    liveness_at(last_ping, now_micros())
}

pub fn liveness_at(last_ping: i64, now: i64) -> Liveness {
    Liveness::from_elapsed_micros(now.saturating_sub(last_ping))
}

pub fn online_status(last_ping: i64) -> &'static str {
    online_status_at(last_ping, now_micros())
}

pub fn online_status_at(last_ping: i64, now: i64) -> &'static str {
    liveness_at(last_ping, now).as_str()
}

pub fn online_icon(last_ping: i64) -> &'static str {
    online_icon_at(last_ping, now_micros())
}

pub fn online_icon_at(last_ping: i64, now: i64) -> &'static str {
    liveness_at(last_ping, now).icon()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000 * MICROS_PER_SEC;

    fn secs_ago(secs: i64) -> i64 {
        NOW - secs * MICROS_PER_SEC
    }

    #[test]
    fn test_last_seen_bucket_boundaries() {
        let cases = [
            (0, "0 seconds ago"),
            (59, "59 seconds ago"),
            (60, "1 minutes ago"),
            (3599, "59 minutes ago"),
            (3600, "1 hours ago"),
            (86399, "23 hours ago"),
            (86400, "1 days ago"),
            (10 * 86400 + 5, "10 days ago"),
        ];

        for (elapsed, expected) in cases {
            assert_eq!(
                last_seen_at(secs_ago(elapsed), NOW),
                expected,
                "Wrong label for {} seconds elapsed",
                elapsed
            );
        }
    }

    #[test]
    fn test_last_seen_truncates_sub_second() {
        assert_eq!(last_seen_at(NOW - 999_999, NOW), "0 seconds ago");
        assert_eq!(last_seen_at(secs_ago(119) - 999_999, NOW), "1 minutes ago");
    }

    #[test]
    fn test_last_seen_future() {
        assert_eq!(last_seen_at(secs_ago(-120), NOW), "in 2 minutes");
        assert_eq!(last_seen_at(NOW + 1, NOW), "in 0 seconds");
    }

    #[test]
    fn test_relative_time_fields() {
        let rel = relative_time_at(secs_ago(7200), NOW);
        assert_eq!(rel.value, 2);
        assert_eq!(rel.unit, DurationUnit::Hours);
        assert!(!rel.future);
    }

    #[test]
    fn test_relative_time_extreme_inputs() {
        let rel = relative_time_at(i64::MIN, i64::MAX);
        assert_eq!(rel.unit, DurationUnit::Days);
        assert!(!rel.future);
    }

    #[test]
    fn test_liveness_thresholds() {
        let cases = [
            (14 * 60 + 59, Liveness::Online),
            (15 * 60, Liveness::SeenRecently),
            (15 * 60 + 1, Liveness::SeenRecently),
            (23 * 3600 + 59 * 60, Liveness::SeenRecently),
            (24 * 3600, Liveness::Offline),
            (24 * 3600 + 60, Liveness::Offline),
        ];

        for (elapsed, expected) in cases {
            assert_eq!(
                liveness_at(secs_ago(elapsed), NOW),
                expected,
                "Wrong status for {} seconds elapsed",
                elapsed
            );
        }
    }

    #[test]
    fn test_future_ping_is_online() {
        assert_eq!(online_status_at(secs_ago(-3 * 86400), NOW), "online");
        assert_eq!(online_icon_at(secs_ago(-3 * 86400), NOW), "🌕");
    }

    #[test]
    fn test_icon_matches_status() {
        let cases = [
            (14 * 60 + 59, "online", "🌕"),
            (15 * 60 + 1, "seen-recently", "🌓"),
            (23 * 3600 + 59 * 60, "seen-recently", "🌓"),
            (24 * 3600 + 60, "offline", "🌑"),
        ];

        for (elapsed, status, icon) in cases {
            assert_eq!(online_status_at(secs_ago(elapsed), NOW), status);
            assert_eq!(online_icon_at(secs_ago(elapsed), NOW), icon);
        }
    }

    #[test]
    fn test_repeated_calls_are_stable() {
        let ping = secs_ago(4242);
        assert_eq!(last_seen_at(ping, NOW), last_seen_at(ping, NOW));
        assert_eq!(online_status_at(ping, NOW), online_status_at(ping, NOW));
        assert_eq!(online_icon_at(ping, NOW), online_icon_at(ping, NOW));
    }

    #[test]
    fn test_wall_clock_variants() {
        let ping = now_micros() - 3 * 86400 * MICROS_PER_SEC;
        assert_eq!(last_seen(ping), "3 days ago");
        assert_eq!(online_status(ping), "offline");
        assert_eq!(online_icon(ping), "🌑");
        assert_eq!(liveness(now_micros()), Liveness::Online);
    }

    #[test]
    fn test_liveness_serializes_kebab_case() {
        let json = serde_json::to_string(&Liveness::SeenRecently).unwrap();
        assert_eq!(json, "\"seen-recently\"");
    }
}
