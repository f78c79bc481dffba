//! Persistence boundary.
//!
//! The engine never touches a database client directly; callers inject a
//! [`LeaveStore`] implementation. Besides plain lookups, implementations
//! carry the two atomicity obligations the engine cannot express itself:
//!
//! - [`LeaveStore::insert_request`] must serialize the overlap re-check and
//!   the insert per user, so two concurrent submissions cannot both pass.
//!   A losing racer gets [`StoreError::OverlapConflict`].
//! - [`LeaveStore::update_request_status`] must compare-and-swap on the
//!   `pending` status, so exactly one of two concurrent decisions wins.
//!   The loser sees `false`.

pub mod memory;
pub mod mysql;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::{
    LeaveRequest, LeaveType, TransitionOutcome, ValidatedLeaveType, ValidatedRequest,
};

#[async_trait]
pub trait LeaveStore: Send + Sync {
    async fn find_leave_type(&self, id: u64) -> Result<Option<LeaveType>, StoreError>;

    async fn find_leave_type_by_name(&self, name: &str) -> Result<Option<LeaveType>, StoreError>;

    /// Active leave types, ordered by kind then name.
    async fn list_leave_types(&self) -> Result<Vec<LeaveType>, StoreError>;

    async fn insert_leave_type(&self, leave_type: &ValidatedLeaveType) -> Result<u64, StoreError>;

    /// Soft-disables a leave type. Returns `false` if no active type with
    /// that id exists. Historical requests keep referencing it.
    async fn deactivate_leave_type(&self, id: u64) -> Result<bool, StoreError>;

    /// The user's requests with status pending or approved.
    async fn find_active_requests_for_user(
        &self,
        user_id: u64,
    ) -> Result<Vec<LeaveRequest>, StoreError>;

    async fn find_request_by_id(&self, id: u64) -> Result<Option<LeaveRequest>, StoreError>;

    /// Persists a validated submission as a `pending` request, re-checking
    /// overlap under the per-user write lock. Returns the new id.
    async fn insert_request(
        &self,
        user_id: u64,
        validated: &ValidatedRequest,
    ) -> Result<u64, StoreError>;

    /// Commits a transition outcome iff the request is still `pending`.
    async fn update_request_status(
        &self,
        id: u64,
        outcome: &TransitionOutcome,
    ) -> Result<bool, StoreError>;
}
