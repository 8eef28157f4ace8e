//! Attendance Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::AttendanceStatus;
use surrealdb::RecordId;

use super::serde_helpers;
use super::EmployeeBrief;

/// Attendance record for one employee on one calendar day
///
/// 不变式：每个员工每个日历日至多一条记录
/// (存储层唯一索引 + 创建路径同日预检查双重保障)。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub employee: RecordId,
    /// 日粒度日期 (YYYY-MM-DD)
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<i64>,
    #[serde(default)]
    pub created_at: i64,
}

/// Attendance record with employee display fields resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceWithEmployee {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub employee: EmployeeBrief,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<i64>,
    #[serde(default)]
    pub created_at: i64,
}

/// Mark attendance payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceCreate {
    pub employee: Option<String>,
    pub date: Option<String>,
    pub status: Option<AttendanceStatus>,
    /// 缺省为当前时间
    pub check_in: Option<i64>,
}
