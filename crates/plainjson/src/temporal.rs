//! Date-time representation and the round-trip formatting shared by
//! conversion and JSON emission.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Timelike, Utc};

/// A point in time carrying exactly the offset knowledge the host had for
/// it. `Local` knows its UTC offset, `Utc` is pinned to UTC, `Floating` has
/// no offset at all and renders without any zone marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Timestamp {
    Local(DateTime<FixedOffset>),
    Utc(DateTime<Utc>),
    Floating(NaiveDateTime),
}

impl Timestamp {
    /// Round-trip form with seven fractional-second digits: numeric offset
    /// suffix for `Local`, literal `Z` for `Utc`, nothing for `Floating`.
    pub fn to_round_trip(&self) -> String {
        match self {
            Timestamp::Local(dt) => format!(
                "{}.{:07}{}",
                dt.format("%Y-%m-%dT%H:%M:%S"),
                dt.nanosecond() / 100,
                dt.format("%:z"),
            ),
            Timestamp::Utc(dt) => format!(
                "{}.{:07}Z",
                dt.format("%Y-%m-%dT%H:%M:%S"),
                dt.nanosecond() / 100,
            ),
            Timestamp::Floating(dt) => format!(
                "{}.{:07}",
                dt.format("%Y-%m-%dT%H:%M:%S"),
                dt.nanosecond() / 100,
            ),
        }
    }
}

impl core::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_round_trip())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn utc_keeps_z_suffix() {
        let dt = Utc
            .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .unwrap()
            .with_nanosecond(678_901_200)
            .unwrap();
        assert_eq!(
            Timestamp::Utc(dt).to_round_trip(),
            "2024-01-02T03:04:05.6789012Z"
        );
    }

    #[test]
    fn floating_has_no_suffix() {
        let dt = Utc
            .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .unwrap()
            .with_nanosecond(678_901_200)
            .unwrap();
        assert_eq!(
            Timestamp::Floating(dt.naive_utc()).to_round_trip(),
            "2024-01-02T03:04:05.6789012"
        );
    }

    #[test]
    fn local_carries_numeric_offset() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let dt = offset.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(
            Timestamp::Local(dt).to_round_trip(),
            "2024-06-01T12:00:00.0000000+02:00"
        );
    }

    #[test]
    fn whole_seconds_pad_the_fraction() {
        let dt = Utc.with_ymd_and_hms(2020, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(
            Timestamp::Utc(dt).to_round_trip(),
            "2020-12-31T23:59:59.0000000Z"
        );
    }
}
