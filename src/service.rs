//! Orchestration over a [`LeaveStore`]: fetch collaborator data, run the
//! pure engine, commit, log. Role gating (only admins decide) stays with
//! the caller, which knows who is authenticated.

use chrono::Utc;

use crate::error::{Error, LeaveTypeError, StoreError, TransitionError, ValidationError};
use crate::model::{LeaveAction, LeaveSubmission, LeaveType, NewLeaveType, TransitionOutcome};
use crate::store::LeaveStore;
use crate::transition::transition;
use crate::validate::{validate_new_leave_type, validate_submission};

pub struct LeaveService<S> {
    store: S,
}

impl<S: LeaveStore> LeaveService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates and persists a leave submission for `user_id`. Returns the
    /// new request's id; the request starts in `pending` state.
    pub async fn submit_leave_request(
        &self,
        user_id: u64,
        submission: &LeaveSubmission,
    ) -> Result<u64, Error> {
        let leave_type = match submission.leave_type_id {
            Some(id) => self.store.find_leave_type(id).await?,
            None => None,
        };
        let existing = self.store.find_active_requests_for_user(user_id).await?;

        let validated = validate_submission(submission, leave_type.as_ref(), &existing)?;

        match self.store.insert_request(user_id, &validated).await {
            Ok(id) => {
                tracing::info!(
                    user_id,
                    request_id = id,
                    total_days = validated.total_days,
                    "leave request submitted"
                );
                Ok(id)
            }
            // A concurrent submission got in between our read and the
            // insert; report it exactly like a pre-checked overlap.
            Err(StoreError::OverlapConflict) => Err(ValidationError::OverlappingRequest.into()),
            Err(e) => Err(e.into()),
        }
    }

    /// Applies an admin decision to a pending request. Exactly one of two
    /// concurrent decisions succeeds; the other sees `AlreadyProcessed`.
    pub async fn decide_leave_request(
        &self,
        request_id: u64,
        action: LeaveAction,
        actor: u64,
        admin_comments: Option<String>,
    ) -> Result<TransitionOutcome, Error> {
        let request = self
            .store
            .find_request_by_id(request_id)
            .await?
            .ok_or(TransitionError::NotFound)?;

        let outcome = transition(&request, action, actor, admin_comments, Utc::now())?;

        if !self.store.update_request_status(request_id, &outcome).await? {
            // Lost the compare-and-swap to a concurrent decision.
            return Err(TransitionError::AlreadyProcessed.into());
        }

        tracing::info!(request_id, actor, status = %outcome.status, "leave request decided");
        Ok(outcome)
    }

    pub async fn create_leave_type(&self, candidate: &NewLeaveType) -> Result<u64, Error> {
        let duplicate = match candidate.name.as_deref() {
            Some(name) => self.store.find_leave_type_by_name(name).await?,
            None => None,
        };

        let validated = validate_new_leave_type(candidate, duplicate.as_ref())?;
        let id = self.store.insert_leave_type(&validated).await?;
        tracing::info!(leave_type_id = id, name = %validated.name, "leave type created");
        Ok(id)
    }

    /// Active leave types, ordered by kind then name.
    pub async fn list_leave_types(&self) -> Result<Vec<LeaveType>, Error> {
        Ok(self.store.list_leave_types().await?)
    }

    /// Soft-disables a leave type. Existing requests keep their reference;
    /// only new submissions are refused.
    pub async fn deactivate_leave_type(&self, id: u64) -> Result<(), Error> {
        if !self.store.deactivate_leave_type(id).await? {
            return Err(LeaveTypeError::NotFound.into());
        }
        tracing::info!(leave_type_id = id, "leave type deactivated");
        Ok(())
    }
}
