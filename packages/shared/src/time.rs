//! Wall-clock helpers.

use chrono::{DateTime, Local, TimeZone, Utc};

/// Current Unix timestamp in milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format a Unix millisecond timestamp as `HH:MM:SS` in the local time zone.
pub fn format_clock_time(millis: i64) -> String {
    format_clock_time_in(millis, &Local)
}

/// Format a Unix millisecond timestamp as `HH:MM:SS` in the given time zone.
///
/// Out-of-range timestamps fall back to the Unix epoch.
pub fn format_clock_time_in<Tz: TimeZone>(millis: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let utc = DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or(DateTime::UNIX_EPOCH);
    utc.with_timezone(tz).format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_format_clock_time_in_utc() {
        // テスト項目: UTC で HH:MM:SS 形式に整形される
        // given (前提条件):
        let millis = 1_672_498_800_000; // 2022-12-31T15:00:00Z

        // when (操作):
        let formatted = format_clock_time_in(millis, &Utc);

        // then (期待する結果):
        assert_eq!(formatted, "15:00:00");
    }

    #[test]
    fn test_format_clock_time_in_fixed_offset() {
        // テスト項目: 固定オフセット（JST）が反映される
        // given (前提条件):
        let jst = FixedOffset::east_opt(9 * 3600).unwrap();
        let millis = 1_672_498_805_000; // 2022-12-31T15:00:05Z

        // when (操作):
        let formatted = format_clock_time_in(millis, &jst);

        // then (期待する結果):
        assert_eq!(formatted, "00:00:05");
    }

    #[test]
    fn test_format_clock_time_local_shape() {
        // テスト項目: ローカル時刻でも 8 文字の HH:MM:SS になる
        // when (操作):
        let formatted = format_clock_time(now_millis());

        // then (期待する結果):
        assert_eq!(formatted.len(), 8);
        assert_eq!(formatted.as_bytes()[2], b':');
        assert_eq!(formatted.as_bytes()[5], b':');
    }
}
