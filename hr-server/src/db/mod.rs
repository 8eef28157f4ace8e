//! Database Module
//!
//! Embedded SurrealDB document store: connection, namespace selection and
//! schema/index bootstrap.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::utils::AppError;

/// Database service — owns the embedded document store handle
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the on-disk database at `db_path`
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        let service = Self::bootstrap(db).await?;
        tracing::info!("Database ready at {db_path}");
        Ok(service)
    }

    /// In-memory database (测试场景)
    pub async fn new_memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open memory database: {e}")))?;
        Self::bootstrap(db).await
    }

    async fn bootstrap(db: Surreal<Db>) -> Result<Self, AppError> {
        db.use_ns("hrms")
            .use_db("hrms")
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        define_schema(&db).await?;

        Ok(Self { db })
    }
}

/// 定义表和唯一索引 (幂等，可重复执行)
///
/// 唯一索引承担存储层约束：
/// - 账号邮箱唯一
/// - 员工邮箱、员工编号唯一；一个账号至多一份员工档案
/// - 每个员工每个日历日至多一条考勤记录
async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query(
        r#"
        DEFINE TABLE IF NOT EXISTS account SCHEMALESS;
        DEFINE INDEX IF NOT EXISTS uniq_account_email ON TABLE account COLUMNS email UNIQUE;

        DEFINE TABLE IF NOT EXISTS employee SCHEMALESS;
        DEFINE INDEX IF NOT EXISTS uniq_employee_email ON TABLE employee COLUMNS email UNIQUE;
        DEFINE INDEX IF NOT EXISTS uniq_employee_account ON TABLE employee COLUMNS account UNIQUE;
        DEFINE INDEX IF NOT EXISTS uniq_employee_code ON TABLE employee COLUMNS employeeCode UNIQUE;

        DEFINE TABLE IF NOT EXISTS payroll SCHEMALESS;
        DEFINE TABLE IF NOT EXISTS performance SCHEMALESS;

        DEFINE TABLE IF NOT EXISTS attendance SCHEMALESS;
        DEFINE INDEX IF NOT EXISTS uniq_attendance_day ON TABLE attendance COLUMNS employee, date UNIQUE;

        DEFINE TABLE IF NOT EXISTS counter SCHEMALESS;
        "#,
    )
    .await
    .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?
    .check()
    .map_err(|e| AppError::database(format!("Schema definition rejected: {e}")))?;

    Ok(())
}
