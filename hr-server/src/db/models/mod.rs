//! Database Models

// Serde helpers
pub mod serde_helpers;

// Auth
pub mod account;

// HR Domain
pub mod attendance;
pub mod employee;
pub mod payroll;
pub mod performance;

// Re-exports
pub use account::{Account, AccountBrief, AccountId};
pub use attendance::{Attendance, AttendanceCreate, AttendanceWithEmployee};
pub use employee::{
    Employee, EmployeeBrief, EmployeeCreate, EmployeeId, EmployeeUpdate, EmployeeWithAccount,
};
pub use payroll::{Payroll, PayrollCreate, PayrollUpdate, PayrollWithEmployee};
pub use performance::{Performance, PerformanceCreate, PerformanceWithRefs};
