//! MySQL-backed [`LeaveStore`].
//!
//! The submit path re-checks overlap inside a transaction with a locking
//! read, and the decision path is a conditional update on the pending
//! status, so the §5-style race windows close at the database.

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::error::StoreError;
use crate::model::{
    LeaveRequest, LeaveType, TransitionOutcome, ValidatedLeaveType, ValidatedRequest,
};
use crate::store::LeaveStore;

const LEAVE_REQUEST_COLUMNS: &str = "id, user_id, leave_type_id, start_date, end_date, \
     total_days, reason, comments, status, admin_comments, approved_by, approved_at, created_at";

pub struct MySqlLeaveStore {
    pool: MySqlPool,
}

impl MySqlLeaveStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = MySqlPool::connect(database_url).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl LeaveStore for MySqlLeaveStore {
    async fn find_leave_type(&self, id: u64) -> Result<Option<LeaveType>, StoreError> {
        let leave_type = sqlx::query_as::<_, LeaveType>(
            "SELECT id, name, kind, max_days, color, description, is_active \
             FROM leave_types WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(leave_type)
    }

    async fn find_leave_type_by_name(&self, name: &str) -> Result<Option<LeaveType>, StoreError> {
        let leave_type = sqlx::query_as::<_, LeaveType>(
            "SELECT id, name, kind, max_days, color, description, is_active \
             FROM leave_types WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(leave_type)
    }

    async fn list_leave_types(&self) -> Result<Vec<LeaveType>, StoreError> {
        let leave_types = sqlx::query_as::<_, LeaveType>(
            "SELECT id, name, kind, max_days, color, description, is_active \
             FROM leave_types WHERE is_active = TRUE \
             ORDER BY kind ASC, name ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(leave_types)
    }

    async fn insert_leave_type(&self, leave_type: &ValidatedLeaveType) -> Result<u64, StoreError> {
        let result = sqlx::query(
            "INSERT INTO leave_types (name, kind, max_days, color, description, is_active) \
             VALUES (?, ?, ?, ?, ?, TRUE)",
        )
        .bind(&leave_type.name)
        .bind(leave_type.kind)
        .bind(leave_type.max_days)
        .bind(&leave_type.color)
        .bind(&leave_type.description)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_id())
    }

    async fn deactivate_leave_type(&self, id: u64) -> Result<bool, StoreError> {
        let result = sqlx::query(
            "UPDATE leave_types SET is_active = FALSE WHERE id = ? AND is_active = TRUE",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_active_requests_for_user(
        &self,
        user_id: u64,
    ) -> Result<Vec<LeaveRequest>, StoreError> {
        let sql = format!(
            "SELECT {LEAVE_REQUEST_COLUMNS} FROM leave_requests \
             WHERE user_id = ? AND status IN ('pending', 'approved') \
             ORDER BY start_date ASC"
        );
        let requests = sqlx::query_as::<_, LeaveRequest>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(requests)
    }

    async fn find_request_by_id(&self, id: u64) -> Result<Option<LeaveRequest>, StoreError> {
        let sql = format!("SELECT {LEAVE_REQUEST_COLUMNS} FROM leave_requests WHERE id = ?");
        let request = sqlx::query_as::<_, LeaveRequest>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(request)
    }

    async fn insert_request(
        &self,
        user_id: u64,
        validated: &ValidatedRequest,
    ) -> Result<u64, StoreError> {
        let mut tx = self.pool.begin().await?;

        // Lock the user's active rows so a concurrent submission serializes
        // behind this one, then re-run the inclusive overlap predicate.
        let conflicts: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM leave_requests \
             WHERE user_id = ? AND status IN ('pending', 'approved') \
             AND start_date <= ? AND end_date >= ? \
             FOR UPDATE",
        )
        .bind(user_id)
        .bind(validated.end_date)
        .bind(validated.start_date)
        .fetch_one(&mut *tx)
        .await?;

        if conflicts > 0 {
            return Err(StoreError::OverlapConflict);
        }

        let result = sqlx::query(
            "INSERT INTO leave_requests \
             (user_id, leave_type_id, start_date, end_date, total_days, reason, comments, status) \
             VALUES (?, ?, ?, ?, ?, ?, ?, 'pending')",
        )
        .bind(user_id)
        .bind(validated.leave_type_id)
        .bind(validated.start_date)
        .bind(validated.end_date)
        .bind(validated.total_days)
        .bind(&validated.reason)
        .bind(&validated.comments)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(result.last_insert_id())
    }

    async fn update_request_status(
        &self,
        id: u64,
        outcome: &TransitionOutcome,
    ) -> Result<bool, StoreError> {
        let result = sqlx::query(
            "UPDATE leave_requests \
             SET status = ?, admin_comments = ?, approved_by = ?, approved_at = ? \
             WHERE id = ? AND status = 'pending'",
        )
        .bind(outcome.status)
        .bind(&outcome.admin_comments)
        .bind(outcome.approved_by)
        .bind(outcome.approved_at)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
