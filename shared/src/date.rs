//! 活动日期与时间的展示格式
//!
//! 演示数据以字符串形式保存日期（`2024-12-15`）和时间（`14:00`），
//! 这里负责解析并转换为界面上的长格式。

use chrono::{NaiveDate, NaiveTime};

const DATE_INPUT: &str = "%Y-%m-%d";
const TIME_INPUT: &str = "%H:%M";

/// 解析 ISO 日期，失败返回 None
pub fn parse_event_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_INPUT).ok()
}

/// 解析 24 小时制时间，失败返回 None
pub fn parse_event_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, TIME_INPUT).ok()
}

/// `2024-12-15` -> `Sunday, December 15, 2024`
///
/// 无法解析时原样返回
pub fn format_event_date(s: &str) -> String {
    match parse_event_date(s) {
        Some(date) => date.format("%A, %B %-d, %Y").to_string(),
        None => s.to_string(),
    }
}

/// `14:00` -> `2:00 PM`
///
/// 无法解析时原样返回
pub fn format_event_time(s: &str) -> String {
    match parse_event_time(s) {
        Some(time) => time.format("%-I:%M %p").to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_event_date_long_form() {
        assert_eq!(format_event_date("2024-12-15"), "Sunday, December 15, 2024");
        assert_eq!(format_event_date("2024-11-15"), "Friday, November 15, 2024");
    }

    #[test]
    fn test_format_event_time_twelve_hour() {
        assert_eq!(format_event_time("14:00"), "2:00 PM");
        assert_eq!(format_event_time("09:00"), "9:00 AM");
        assert_eq!(format_event_time("15:30"), "3:30 PM");
    }

    #[test]
    fn test_unparseable_values_pass_through() {
        assert_eq!(format_event_date("TBD"), "TBD");
        assert_eq!(format_event_time("noon"), "noon");
    }
}
