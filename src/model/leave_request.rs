use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Lifecycle state of a leave request. `Pending` is the only state that
/// admits a transition; `Approved` and `Rejected` are terminal.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString, sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    /// Active requests (pending or approved) participate in overlap checks.
    pub fn is_active(self) -> bool {
        matches!(self, LeaveStatus::Pending | LeaveStatus::Approved)
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }
}

/// Admin decision on a pending request.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeaveAction {
    Approve,
    Reject,
}

impl LeaveAction {
    /// Parses an untrusted action string. Anything other than `approve` or
    /// `reject` is refused.
    pub fn parse(value: &str) -> Result<Self, crate::error::TransitionError> {
        value
            .parse()
            .map_err(|_| crate::error::TransitionError::InvalidAction)
    }

    pub fn target_status(self) -> LeaveStatus {
        match self {
            LeaveAction::Approve => LeaveStatus::Approved,
            LeaveAction::Reject => LeaveStatus::Rejected,
        }
    }
}

/// A single employee's leave application as persisted.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct LeaveRequest {
    pub id: u64,
    pub user_id: u64,
    pub leave_type_id: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Inclusive day count, computed at submission.
    pub total_days: i64,
    pub reason: String,
    pub comments: Option<String>,
    pub status: LeaveStatus,
    pub admin_comments: Option<String>,
    /// Deciding admin, recorded on approval and rejection alike.
    pub approved_by: Option<u64>,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Raw submission as it arrives from the employee's form. Fields are
/// optional here so the validator can report what is missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeaveSubmission {
    pub leave_type_id: Option<u64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub reason: Option<String>,
    pub comments: Option<String>,
}

/// A submission that passed validation, carrying the computed day count.
/// Persisted with status forced to `pending`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedRequest {
    pub leave_type_id: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: i64,
    pub reason: String,
    pub comments: Option<String>,
}

/// The new logical state produced by a successful transition. The caller
/// commits it atomically; this crate never persists on its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionOutcome {
    pub status: LeaveStatus,
    pub approved_by: u64,
    pub approved_at: DateTime<Utc>,
    pub admin_comments: Option<String>,
}
