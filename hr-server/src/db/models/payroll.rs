//! Payroll Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::PayrollStatus;
use surrealdb::RecordId;

use super::serde_helpers;
use super::EmployeeBrief;

/// Payroll record for one pay period
///
/// 不变式：落库时 `netSalary == grossSalary - deductions` 恒成立
/// (创建和任一字段更新后都会重算)。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payroll {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub employee: RecordId,
    pub period_start_date: NaiveDate,
    pub period_end_date: NaiveDate,
    pub gross_salary: f64,
    pub deductions: f64,
    pub net_salary: f64,
    #[serde(default)]
    pub status: PayrollStatus,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Payroll record with employee display fields resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollWithEmployee {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub employee: EmployeeBrief,
    pub period_start_date: NaiveDate,
    pub period_end_date: NaiveDate,
    pub gross_salary: f64,
    pub deductions: f64,
    pub net_salary: f64,
    #[serde(default)]
    pub status: PayrollStatus,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Create payroll payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollCreate {
    pub employee: Option<String>,
    pub period_start_date: Option<String>,
    pub period_end_date: Option<String>,
    pub gross_salary: Option<f64>,
    pub deductions: Option<f64>,
}

/// Update payroll payload (partial; net salary recomputed server-side)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollUpdate {
    pub gross_salary: Option<f64>,
    pub deductions: Option<f64>,
    pub status: Option<PayrollStatus>,
}
