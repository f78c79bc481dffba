use thiserror::Error;

/// Rejections produced while validating a leave submission. These are
/// semantic refusals, never transient faults; callers map them straight to
/// user-facing messages.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ValidationError {
    #[error("leave type, dates, and reason are required")]
    MissingFields,
    #[error("end date must be after start date")]
    InvalidDateRange,
    #[error("invalid leave type")]
    InvalidLeaveType,
    #[error("cannot request more than {max_days} days for this leave type")]
    ExceedsMaxDays { max_days: u32 },
    #[error("you have overlapping leave requests")]
    OverlappingRequest,
}

/// Rejections from the approve/reject state machine.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum TransitionError {
    #[error("status must be approved or rejected")]
    InvalidAction,
    #[error("leave request has already been processed")]
    AlreadyProcessed,
    #[error("leave request not found")]
    NotFound,
}

/// Rejections from leave-type administration.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum LeaveTypeError {
    #[error("name and type are required")]
    MissingFields,
    #[error("leave type with this name already exists")]
    DuplicateName,
    #[error("max days must be a positive number")]
    InvalidMaxDays,
    #[error("leave type not found")]
    NotFound,
}

/// Faults from the persistence collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    /// A concurrent submission won the per-user overlap race. The service
    /// maps this back to [`ValidationError::OverlappingRequest`].
    #[error("conflicting leave request committed concurrently")]
    OverlapConflict,
}

/// Umbrella error for the service boundary.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error(transparent)]
    LeaveType(#[from] LeaveTypeError),
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}
