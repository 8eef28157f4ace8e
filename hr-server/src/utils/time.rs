//! 时间工具函数
//!
//! 日期统一使用 `YYYY-MM-DD` 字符串 (日粒度)，
//! 时间戳统一使用 Unix millis (`i64`)。

use chrono::{Months, NaiveDate, Utc};

use super::{AppError, AppResult};

/// 当前 Unix millis
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// 日期加一个自然月 (用于工资周期结束日)
///
/// 月末溢出时收缩到目标月份最后一天 (1-31 加一月 → 2-28/29)。
pub fn one_month_after(date: NaiveDate) -> NaiveDate {
    date.checked_add_months(Months::new(1)).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-01-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert!(parse_date("01/01/2024").is_err());
    }

    #[test]
    fn test_one_month_after_clamps_month_end() {
        let jan31 = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(
            one_month_after(jan31),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        let jan1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(
            one_month_after(jan1),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
        );
    }
}
