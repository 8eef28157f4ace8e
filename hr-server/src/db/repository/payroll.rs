//! Payroll Repository

use chrono::NaiveDate;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Payroll, PayrollUpdate, PayrollWithEmployee};
use crate::utils::time::now_millis;

/// Validated input for creating a payroll record
#[derive(Debug, Clone)]
pub struct NewPayroll {
    pub employee: RecordId,
    pub period_start_date: NaiveDate,
    pub period_end_date: NaiveDate,
    pub gross_salary: f64,
    pub deductions: f64,
}

#[derive(Clone)]
pub struct PayrollRepository {
    base: BaseRepository,
}

impl PayrollRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all payroll records with employee display fields resolved
    pub async fn find_all(&self) -> RepoResult<Vec<PayrollWithEmployee>> {
        let payrolls: Vec<PayrollWithEmployee> = self
            .base
            .db()
            .query("SELECT * FROM payroll ORDER BY periodStartDate FETCH employee")
            .await?
            .take(0)?;
        Ok(payrolls)
    }

    /// Find payroll records for one employee
    pub async fn find_by_employee(&self, employee: &RecordId) -> RepoResult<Vec<Payroll>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM payroll WHERE employee = $employee ORDER BY periodStartDate")
            .bind(("employee", employee.clone()))
            .await?;
        let payrolls: Vec<Payroll> = result.take(0)?;
        Ok(payrolls)
    }

    /// Create a payroll record; net salary derived from gross and deductions
    pub async fn create(&self, data: NewPayroll) -> RepoResult<Payroll> {
        let net_salary = data.gross_salary - data.deductions;
        let now = now_millis();

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE payroll SET
                    employee = $employee,
                    periodStartDate = $period_start,
                    periodEndDate = $period_end,
                    grossSalary = $gross,
                    deductions = $deductions,
                    netSalary = $net,
                    status = 'Pending',
                    createdAt = $now,
                    updatedAt = $now
                RETURN AFTER"#,
            )
            .bind(("employee", data.employee))
            .bind(("period_start", data.period_start_date))
            .bind(("period_end", data.period_end_date))
            .bind(("gross", data.gross_salary))
            .bind(("deductions", data.deductions))
            .bind(("net", net_salary))
            .bind(("now", now))
            .await?;

        let created: Option<Payroll> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create payroll record".to_string()))
    }

    /// Update a payroll record
    ///
    /// gross/deductions 任一变化都会重算 netSalary，落库值恒一致。
    pub async fn update(&self, id: &str, data: PayrollUpdate) -> RepoResult<Payroll> {
        let thing = self.base.parse_id(id)?;
        let mut existing: Payroll = self
            .base
            .db()
            .select(thing.clone())
            .await?
            .ok_or_else(|| RepoError::NotFound("Payroll record not found".to_string()))?;

        if let Some(v) = data.gross_salary {
            existing.gross_salary = v;
        }
        if let Some(v) = data.deductions {
            existing.deductions = v;
        }
        if let Some(v) = data.status {
            existing.status = v;
        }
        let net_salary = existing.gross_salary - existing.deductions;

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    grossSalary = $gross,
                    deductions = $deductions,
                    netSalary = $net,
                    status = $status,
                    updatedAt = $now
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("gross", existing.gross_salary))
            .bind(("deductions", existing.deductions))
            .bind(("net", net_salary))
            .bind(("status", existing.status))
            .bind(("now", now_millis()))
            .await?;

        result
            .take::<Option<Payroll>>(0)?
            .ok_or_else(|| RepoError::NotFound("Payroll record not found".to_string()))
    }
}
