//! Employee Repository
//!
//! 员工档案与其账号/子记录的读写。多文档写入 (建档、编辑级联、删除级联)
//! 全部包在存储层事务里，不会留下半完成状态。

use chrono::NaiveDate;
use serde::Deserialize;
use shared::{Department, Role};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;
use uuid::Uuid;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Account, Employee, EmployeeUpdate, EmployeeWithAccount};
use crate::utils::time::{now_millis, one_month_after};

/// Validated input for creating an account + profile + seed payroll
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub joining_date: NaiveDate,
    pub job_title: String,
    pub department: Department,
    pub salary: f64,
    pub role: Role,
}

#[derive(Debug, Deserialize)]
struct Counter {
    value: i64,
}

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all employees with account role resolved
    pub async fn find_all(&self) -> RepoResult<Vec<EmployeeWithAccount>> {
        let employees: Vec<EmployeeWithAccount> = self
            .base
            .db()
            .query("SELECT * FROM employee ORDER BY employeeCode FETCH account")
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Find employee by id with account resolved
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<EmployeeWithAccount>> {
        let thing = self.base.parse_id(id)?;
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM $thing FETCH account")
            .bind(("thing", thing))
            .await?;
        let employees: Vec<EmployeeWithAccount> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    /// Find employee by id without resolving the account link
    pub async fn find_raw_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let thing = self.base.parse_id(id)?;
        let employee: Option<Employee> = self.base.db().select(thing).await?;
        Ok(employee)
    }

    /// Find the profile linked to an account
    pub async fn find_by_account(&self, account_id: &str) -> RepoResult<Option<Employee>> {
        let account = self.base.parse_id(account_id)?;
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE account = $account LIMIT 1")
            .bind(("account", account))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    /// Find employee by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    /// Allocate the next employee code from an atomic counter document
    ///
    /// 单条 UPSERT 原子递增，并发建档不会分配到相同序号；
    /// 事务失败会烧掉一个序号 (编号允许有空洞)。
    async fn next_employee_code(&self) -> RepoResult<String> {
        let mut result = self
            .base
            .db()
            .query("UPSERT counter:employee SET value += 1 RETURN AFTER")
            .await?;
        let counters: Vec<Counter> = result.take(0)?;
        let value = counters
            .first()
            .map(|c| c.value)
            .ok_or_else(|| RepoError::Database("Failed to allocate employee code".to_string()))?;
        Ok(format!("EMP{:04}", value))
    }

    /// Create account + employee profile + seed payroll in one transaction
    ///
    /// Seed payroll: gross = salary, deductions = 0, status Pending,
    /// period = [joiningDate, joiningDate + 1 month).
    pub async fn create_with_account(&self, data: NewEmployee) -> RepoResult<EmployeeWithAccount> {
        // Check duplicate email across both tables before writing
        let account_repo = super::AccountRepository::new(self.base.db().clone());
        if account_repo.find_by_email(&data.email).await?.is_some()
            || self.find_by_email(&data.email).await?.is_some()
        {
            return Err(RepoError::Duplicate(
                "User with this email already exists".to_string(),
            ));
        }

        let employee_code = self.next_employee_code().await?;

        let hash_pass = Account::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Failed to hash password: {}", e)))?;

        let acc_id = RecordId::from_table_key("account", Uuid::new_v4().simple().to_string());
        let emp_id = RecordId::from_table_key("employee", Uuid::new_v4().simple().to_string());
        let pay_id = RecordId::from_table_key("payroll", Uuid::new_v4().simple().to_string());

        let display_name = format!("{} {}", data.first_name, data.last_name);
        let period_start = data.joining_date;
        let period_end = one_month_after(data.joining_date);
        let now = now_millis();

        self.base
            .db()
            .query(
                r#"BEGIN TRANSACTION;
                CREATE $acc_id SET
                    displayName = $display_name,
                    email = $email,
                    hashPass = $hash_pass,
                    role = $role,
                    createdAt = $now;
                CREATE $emp_id SET
                    account = $acc_id,
                    firstName = $first_name,
                    lastName = $last_name,
                    email = $email,
                    employeeCode = $employee_code,
                    jobTitle = $job_title,
                    department = $department,
                    salary = $salary,
                    joiningDate = $joining_date,
                    createdAt = $now,
                    updatedAt = $now;
                CREATE $pay_id SET
                    employee = $emp_id,
                    periodStartDate = $period_start,
                    periodEndDate = $period_end,
                    grossSalary = $salary,
                    deductions = 0,
                    netSalary = $salary,
                    status = 'Pending',
                    createdAt = $now,
                    updatedAt = $now;
                COMMIT TRANSACTION;"#,
            )
            .bind(("acc_id", acc_id))
            .bind(("emp_id", emp_id.clone()))
            .bind(("pay_id", pay_id))
            .bind(("display_name", display_name))
            .bind(("email", data.email))
            .bind(("hash_pass", hash_pass))
            .bind(("role", data.role))
            .bind(("first_name", data.first_name))
            .bind(("last_name", data.last_name))
            .bind(("employee_code", employee_code))
            .bind(("job_title", data.job_title))
            .bind(("department", data.department))
            .bind(("salary", data.salary))
            .bind(("joining_date", data.joining_date))
            .bind(("period_start", period_start))
            .bind(("period_end", period_end))
            .bind(("now", now))
            .await?
            .check()?;

        // Read back the committed profile with its account resolved
        self.find_by_id(&emp_id.to_string())
            .await?
            .ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    /// Update an employee profile
    ///
    /// 只应用请求里出现的字段；姓名/邮箱变更级联回关联账号，
    /// 与档案更新在同一个事务里落库。
    pub async fn update(&self, id: &str, data: EmployeeUpdate) -> RepoResult<EmployeeWithAccount> {
        let thing = self.base.parse_id(id)?;
        let mut existing = self
            .find_raw_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound("Employee not found".to_string()))?;

        // Merge provided fields over the stored profile
        if let Some(v) = data.first_name {
            existing.first_name = v;
        }
        if let Some(v) = data.last_name {
            existing.last_name = v;
        }
        if let Some(v) = data.email {
            existing.email = v;
        }
        if let Some(v) = data.job_title {
            existing.job_title = v;
        }
        if let Some(v) = data.department {
            existing.department = v;
        }
        if let Some(v) = data.salary {
            existing.salary = v;
        }

        let display_name = format!("{} {}", existing.first_name, existing.last_name);
        let now = now_millis();

        self.base
            .db()
            .query(
                r#"BEGIN TRANSACTION;
                UPDATE $emp_id SET
                    firstName = $first_name,
                    lastName = $last_name,
                    email = $email,
                    jobTitle = $job_title,
                    department = $department,
                    salary = $salary,
                    updatedAt = $now;
                UPDATE $acc_id SET
                    displayName = $display_name,
                    email = $email;
                COMMIT TRANSACTION;"#,
            )
            .bind(("emp_id", thing))
            .bind(("acc_id", existing.account.clone()))
            .bind(("first_name", existing.first_name))
            .bind(("last_name", existing.last_name))
            .bind(("email", existing.email))
            .bind(("job_title", existing.job_title))
            .bind(("department", existing.department))
            .bind(("salary", existing.salary))
            .bind(("display_name", display_name))
            .bind(("now", now))
            .await?
            .check()?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound("Employee not found".to_string()))
    }

    /// Delete a profile, its child records and the linked account
    ///
    /// 子记录 → 账号 → 档案的删除顺序在一个事务里完成。
    pub async fn delete_cascade(&self, id: &str) -> RepoResult<bool> {
        let thing = self.base.parse_id(id)?;
        let existing = self
            .find_raw_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound("Employee not found".to_string()))?;

        self.base
            .db()
            .query(
                r#"BEGIN TRANSACTION;
                DELETE payroll WHERE employee = $emp_id;
                DELETE performance WHERE employee = $emp_id;
                DELETE attendance WHERE employee = $emp_id;
                DELETE $acc_id;
                DELETE $emp_id;
                COMMIT TRANSACTION;"#,
            )
            .bind(("emp_id", thing))
            .bind(("acc_id", existing.account))
            .await?
            .check()?;

        Ok(true)
    }
}
