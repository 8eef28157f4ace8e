//! Attendance Repository

use chrono::NaiveDate;
use shared::AttendanceStatus;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Attendance, AttendanceWithEmployee};
use crate::utils::time::now_millis;

/// Validated input for marking attendance
#[derive(Debug, Clone)]
pub struct NewAttendance {
    pub employee: RecordId,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub check_in: Option<i64>,
}

#[derive(Clone)]
pub struct AttendanceRepository {
    base: BaseRepository,
}

impl AttendanceRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all attendance records with employee display fields resolved
    pub async fn find_all(&self) -> RepoResult<Vec<AttendanceWithEmployee>> {
        let records: Vec<AttendanceWithEmployee> = self
            .base
            .db()
            .query("SELECT * FROM attendance ORDER BY date DESC FETCH employee")
            .await?
            .take(0)?;
        Ok(records)
    }

    /// Find the record for one employee on one calendar day
    pub async fn find_by_employee_and_date(
        &self,
        employee: &RecordId,
        date: NaiveDate,
    ) -> RepoResult<Option<Attendance>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM attendance WHERE employee = $employee AND date = $date LIMIT 1")
            .bind(("employee", employee.clone()))
            .bind(("date", date))
            .await?;
        let records: Vec<Attendance> = result.take(0)?;
        Ok(records.into_iter().next())
    }

    /// Mark attendance for one day
    ///
    /// 同日预检查先挡掉重复打卡；并发竞争由存储层唯一索引兜底，
    /// 冲突同样作为 Duplicate 上抛。
    pub async fn create(&self, data: NewAttendance) -> RepoResult<Attendance> {
        if self
            .find_by_employee_and_date(&data.employee, data.date)
            .await?
            .is_some()
        {
            return Err(RepoError::Duplicate(
                "Attendance already marked for this employee today".to_string(),
            ));
        }

        let now = now_millis();
        let check_in = data.check_in.unwrap_or(now);

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE attendance SET
                    employee = $employee,
                    date = $date,
                    status = $status,
                    checkIn = $check_in,
                    createdAt = $now
                RETURN AFTER"#,
            )
            .bind(("employee", data.employee))
            .bind(("date", data.date))
            .bind(("status", data.status))
            .bind(("check_in", check_in))
            .bind(("now", now))
            .await?;

        let created: Option<Attendance> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create attendance record".to_string()))
    }
}
