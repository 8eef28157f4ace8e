//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{Department, Role};
use surrealdb::RecordId;

use super::serde_helpers;
use super::Account;

/// Employee ID type
pub type EmployeeId = RecordId;

/// Employee profile, linked 1–1 to an [`Account`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<EmployeeId>,
    #[serde(with = "serde_helpers::record_id")]
    pub account: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// 自动分配的员工编号 ("EMP0001", ...)
    pub employee_code: String,
    pub job_title: String,
    pub department: Department,
    pub salary: f64,
    pub joining_date: NaiveDate,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Employee profile with its account resolved (role populated for display)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeWithAccount {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<EmployeeId>,
    pub account: Account,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub employee_code: String,
    pub job_title: String,
    pub department: Department,
    pub salary: f64,
    pub joining_date: NaiveDate,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Employee display fields (resolved on payroll/performance/attendance listings)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeBrief {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<EmployeeId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub job_title: String,
}

/// Create employee payload (account + profile + seed payroll)
///
/// 必填字段用 Option 接收，缺失时由 handler 逐字段报错。
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub joining_date: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<Department>,
    pub salary: Option<f64>,
    /// Omitted → "employee"
    pub role: Option<Role>,
}

/// Update employee payload
///
/// 每个字段独立可选：缺省字段保持原值，显式传 0 等假值也会被应用。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<Department>,
    pub salary: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_distinguishes_omitted_from_zero() {
        let omitted: EmployeeUpdate = serde_json::from_str("{}").unwrap();
        assert!(omitted.salary.is_none());

        let zeroed: EmployeeUpdate = serde_json::from_str(r#"{"salary": 0}"#).unwrap();
        assert_eq!(zeroed.salary, Some(0.0));
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let update: EmployeeUpdate =
            serde_json::from_str(r#"{"firstName": "Ana", "jobTitle": "Engineer"}"#).unwrap();
        assert_eq!(update.first_name.as_deref(), Some("Ana"));
        assert_eq!(update.job_title.as_deref(), Some("Engineer"));
    }
}
