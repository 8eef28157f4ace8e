//! Shared types for the HRMS stack
//!
//! Common vocabulary and request/response types used in API communication.
//! These types are shared between hr-server and its API consumers.

pub mod client;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use types::{AttendanceStatus, Department, PayrollStatus, Role};
