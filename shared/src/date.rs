//! 时间处理模块
//!
//! 统一使用 `chrono::DateTime<Utc>` 作为传输与比较的时间类型；
//! 浏览器表单给出的本地时间（`datetime-local` / `date` 输入框）在这里换算为 UTC。
//! 在 wasm32 上 `chrono` 通过 `wasmbind` 读取浏览器的时钟与时区。

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// `datetime-local` 输入框可能产生的格式
const LOCAL_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];
const LOCAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// 当前时间
#[inline]
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// 解析用户输入的过期时间
///
/// 依次尝试：RFC 3339、本地日期时间、本地日期（当天零点）。
/// 全部失败时返回 `None`。
pub fn parse_expiration(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in LOCAL_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return local_to_utc(naive);
        }
    }

    NaiveDate::parse_from_str(input, LOCAL_DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .and_then(local_to_utc)
}

/// 本地时间换算为 UTC。夏令时重叠时取较早的时刻，跳过的时刻视为无效。
fn local_to_utc(naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// 以本地日历日期展示时间戳
pub fn format_local_date(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

/// `datetime-local` 输入框的 `min` 属性值（当前本地时间，精确到分钟）
pub fn local_input_min() -> String {
    Local::now().format(LOCAL_DATETIME_FORMATS[0]).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_with_offset() {
        let parsed = parse_expiration("2030-01-01T10:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2030, 1, 1, 8, 0, 0).unwrap());
    }

    #[test]
    fn parses_datetime_local_input_in_local_zone() {
        let naive = NaiveDateTime::parse_from_str("2030-06-01T12:30", "%Y-%m-%dT%H:%M").unwrap();
        let expected = Local
            .from_local_datetime(&naive)
            .earliest()
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(parse_expiration("2030-06-01T12:30"), Some(expected));
    }

    #[test]
    fn plain_date_means_local_midnight() {
        let parsed = parse_expiration("2030-06-01").unwrap();
        assert_eq!(format_local_date(&parsed), "2030-06-01");
    }

    #[test]
    fn input_min_is_accepted_by_the_parser() {
        assert!(parse_expiration(&local_input_min()).is_some());
    }

    #[test]
    fn garbage_and_blank_do_not_parse() {
        assert_eq!(parse_expiration(""), None);
        assert_eq!(parse_expiration("   "), None);
        assert_eq!(parse_expiration("next tuesday"), None);
        assert_eq!(parse_expiration("2030-13-45"), None);
    }
}
