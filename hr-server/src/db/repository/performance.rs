//! Performance Review Repository

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Performance, PerformanceWithRefs};
use crate::utils::time::now_millis;

/// Validated input for creating a review
#[derive(Debug, Clone)]
pub struct NewReview {
    pub employee: RecordId,
    pub reviewer: RecordId,
    pub rating: i64,
    pub comments: String,
}

#[derive(Clone)]
pub struct PerformanceRepository {
    base: BaseRepository,
}

impl PerformanceRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all reviews with employee and reviewer display fields resolved
    pub async fn find_all(&self) -> RepoResult<Vec<PerformanceWithRefs>> {
        let reviews: Vec<PerformanceWithRefs> = self
            .base
            .db()
            .query("SELECT * FROM performance ORDER BY reviewDate DESC FETCH employee, reviewer")
            .await?
            .take(0)?;
        Ok(reviews)
    }

    /// Find reviews for one employee (reviewer resolved for display)
    pub async fn find_by_employee(
        &self,
        employee: &RecordId,
    ) -> RepoResult<Vec<PerformanceWithRefs>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM performance WHERE employee = $employee \
                 ORDER BY reviewDate DESC FETCH employee, reviewer",
            )
            .bind(("employee", employee.clone()))
            .await?;
        let reviews: Vec<PerformanceWithRefs> = result.take(0)?;
        Ok(reviews)
    }

    /// Create a review; the referenced employee must exist
    pub async fn create(&self, data: NewReview) -> RepoResult<Performance> {
        // Referential existence check before writing
        let employee: Option<crate::db::models::Employee> =
            self.base.db().select(data.employee.clone()).await?;
        if employee.is_none() {
            return Err(RepoError::NotFound("Employee not found".to_string()));
        }

        let now = now_millis();

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE performance SET
                    employee = $employee,
                    reviewer = $reviewer,
                    rating = $rating,
                    comments = $comments,
                    reviewDate = $now,
                    createdAt = $now
                RETURN AFTER"#,
            )
            .bind(("employee", data.employee))
            .bind(("reviewer", data.reviewer))
            .bind(("rating", data.rating))
            .bind(("comments", data.comments))
            .bind(("now", now))
            .await?;

        let created: Option<Performance> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create review".to_string()))
    }
}
