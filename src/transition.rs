//! The pending → approved/rejected state machine.

use chrono::{DateTime, Utc};

use crate::error::TransitionError;
use crate::model::{LeaveAction, LeaveRequest, TransitionOutcome};

/// Applies an admin decision to a request.
///
/// Only a `pending` request may transition; anything already decided is
/// refused with `AlreadyProcessed`, never overwritten. The outcome records
/// the deciding admin and timestamp for rejections as well as approvals.
/// Nothing is persisted here: the caller commits the outcome with a
/// compare-and-swap on the pending status.
///
/// `decided_at` is supplied by the caller so this stays a pure function;
/// the service layer passes `Utc::now()`.
pub fn transition(
    request: &LeaveRequest,
    action: LeaveAction,
    actor: u64,
    admin_comments: Option<String>,
    decided_at: DateTime<Utc>,
) -> Result<TransitionOutcome, TransitionError> {
    if request.status.is_terminal() {
        return Err(TransitionError::AlreadyProcessed);
    }

    Ok(TransitionOutcome {
        status: action.target_status(),
        approved_by: actor,
        approved_at: decided_at,
        admin_comments,
    })
}
