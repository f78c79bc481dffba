//! In-memory [`LeaveStore`] for tests and examples.
//!
//! A single mutex guards all state, which trivially gives the same
//! serialization guarantees the MySQL store gets from transactions: the
//! overlap re-check and insert happen under one lock acquisition, as does
//! the status compare-and-swap.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::error::StoreError;
use crate::model::{
    LeaveRequest, LeaveStatus, LeaveType, TransitionOutcome, ValidatedLeaveType, ValidatedRequest,
};
use crate::overlap;
use crate::store::LeaveStore;

#[derive(Default)]
struct Inner {
    leave_types: Vec<LeaveType>,
    requests: Vec<LeaveRequest>,
    next_leave_type_id: u64,
    next_request_id: u64,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("memory store mutex poisoned")
    }
}

#[async_trait]
impl LeaveStore for MemoryStore {
    async fn find_leave_type(&self, id: u64) -> Result<Option<LeaveType>, StoreError> {
        Ok(self.lock().leave_types.iter().find(|lt| lt.id == id).cloned())
    }

    async fn find_leave_type_by_name(&self, name: &str) -> Result<Option<LeaveType>, StoreError> {
        Ok(self
            .lock()
            .leave_types
            .iter()
            .find(|lt| lt.name == name)
            .cloned())
    }

    async fn list_leave_types(&self) -> Result<Vec<LeaveType>, StoreError> {
        let mut active: Vec<LeaveType> = self
            .lock()
            .leave_types
            .iter()
            .filter(|lt| lt.is_active)
            .cloned()
            .collect();
        active.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));
        Ok(active)
    }

    async fn insert_leave_type(&self, leave_type: &ValidatedLeaveType) -> Result<u64, StoreError> {
        let mut inner = self.lock();
        inner.next_leave_type_id += 1;
        let id = inner.next_leave_type_id;
        inner.leave_types.push(LeaveType {
            id,
            name: leave_type.name.clone(),
            kind: leave_type.kind,
            max_days: leave_type.max_days,
            color: leave_type.color.clone(),
            description: leave_type.description.clone(),
            is_active: true,
        });
        Ok(id)
    }

    async fn deactivate_leave_type(&self, id: u64) -> Result<bool, StoreError> {
        let mut inner = self.lock();
        match inner
            .leave_types
            .iter_mut()
            .find(|lt| lt.id == id && lt.is_active)
        {
            Some(lt) => {
                lt.is_active = false;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_active_requests_for_user(
        &self,
        user_id: u64,
    ) -> Result<Vec<LeaveRequest>, StoreError> {
        Ok(self
            .lock()
            .requests
            .iter()
            .filter(|r| r.user_id == user_id && r.status.is_active())
            .cloned()
            .collect())
    }

    async fn find_request_by_id(&self, id: u64) -> Result<Option<LeaveRequest>, StoreError> {
        Ok(self.lock().requests.iter().find(|r| r.id == id).cloned())
    }

    async fn insert_request(
        &self,
        user_id: u64,
        validated: &ValidatedRequest,
    ) -> Result<u64, StoreError> {
        let mut inner = self.lock();

        // Same re-check the MySQL store runs under its row lock.
        let active: Vec<LeaveRequest> = inner
            .requests
            .iter()
            .filter(|r| r.user_id == user_id && r.status.is_active())
            .cloned()
            .collect();
        if overlap::has_overlap(validated.start_date, validated.end_date, &active) {
            return Err(StoreError::OverlapConflict);
        }

        inner.next_request_id += 1;
        let id = inner.next_request_id;
        inner.requests.push(LeaveRequest {
            id,
            user_id,
            leave_type_id: validated.leave_type_id,
            start_date: validated.start_date,
            end_date: validated.end_date,
            total_days: validated.total_days,
            reason: validated.reason.clone(),
            comments: validated.comments.clone(),
            status: LeaveStatus::Pending,
            admin_comments: None,
            approved_by: None,
            approved_at: None,
            created_at: Some(Utc::now()),
        });
        Ok(id)
    }

    async fn update_request_status(
        &self,
        id: u64,
        outcome: &TransitionOutcome,
    ) -> Result<bool, StoreError> {
        let mut inner = self.lock();
        match inner
            .requests
            .iter_mut()
            .find(|r| r.id == id && r.status == LeaveStatus::Pending)
        {
            Some(request) => {
                request.status = outcome.status;
                request.admin_comments = outcome.admin_comments.clone();
                request.approved_by = Some(outcome.approved_by);
                request.approved_at = Some(outcome.approved_at);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
