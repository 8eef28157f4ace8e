//! Domain vocabulary shared across the API surface
//!
//! Wire format is camelCase JSON; the enum string forms below are the exact
//! values the client sends and receives.

use serde::{Deserialize, Serialize};

/// Account role
///
/// 角色没有层级关系：每个路由声明自己的允许列表，
/// admin 不会隐式获得其他角色的权限。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Hr,
    Manager,
    Employee,
}

impl Role {
    /// String form as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Hr => "hr",
            Role::Manager => "manager",
            Role::Employee => "employee",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Employee
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employee department
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    #[serde(rename = "HR")]
    Hr,
    Marketing,
    Sales,
    Management,
}

/// Payroll record status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayrollStatus {
    Pending,
    Paid,
}

impl Default for PayrollStatus {
    fn default() -> Self {
        PayrollStatus::Pending
    }
}

/// Attendance status for one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Leave,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"employee\"").unwrap(),
            Role::Employee
        );
    }

    #[test]
    fn test_department_hr_rename() {
        assert_eq!(serde_json::to_string(&Department::Hr).unwrap(), "\"HR\"");
        assert_eq!(
            serde_json::from_str::<Department>("\"Engineering\"").unwrap(),
            Department::Engineering
        );
    }

    #[test]
    fn test_status_defaults() {
        assert_eq!(PayrollStatus::default(), PayrollStatus::Pending);
        assert_eq!(Role::default(), Role::Employee);
    }
}
