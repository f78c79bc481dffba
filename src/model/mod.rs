pub mod leave_request;
pub mod leave_type;

pub use leave_request::{
    LeaveAction, LeaveRequest, LeaveStatus, LeaveSubmission, TransitionOutcome, ValidatedRequest,
};
pub use leave_type::{LeaveKind, LeaveType, NewLeaveType, ValidatedLeaveType};
