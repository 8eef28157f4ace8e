//! Performance Review Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;
use super::{AccountBrief, EmployeeBrief};

/// Performance review submitted by a reviewer account for an employee
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub employee: RecordId,
    #[serde(with = "serde_helpers::record_id")]
    pub reviewer: RecordId,
    /// 1 到 5 的整数评分
    pub rating: i64,
    pub comments: String,
    /// 评审日期 (Unix millis)，缺省为创建时间
    pub review_date: i64,
    #[serde(default)]
    pub created_at: i64,
}

/// Review with employee and reviewer display fields resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceWithRefs {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub employee: EmployeeBrief,
    pub reviewer: AccountBrief,
    pub rating: i64,
    pub comments: String,
    pub review_date: i64,
    #[serde(default)]
    pub created_at: i64,
}

/// Create review payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceCreate {
    pub employee_id: Option<String>,
    pub rating: Option<i64>,
    pub comments: Option<String>,
}
