//! Leave-request validation and status-transition engine.
//!
//! The engine itself is three pure functions — [`validate::validate_submission`],
//! [`overlap::has_overlap`], and [`transition::transition`] — operating on
//! data the caller already fetched. [`service::LeaveService`] wires them to a
//! pluggable [`store::LeaveStore`], which carries the atomicity obligations
//! (per-user serialization on submit, compare-and-swap on decide).
//!
//! ```no_run
//! use leavedesk::config::Config;
//! use leavedesk::model::LeaveSubmission;
//! use leavedesk::service::LeaveService;
//! use leavedesk::store::mysql::MySqlLeaveStore;
//!
//! # async fn run() -> Result<(), leavedesk::Error> {
//! let config = Config::from_env();
//! let store = MySqlLeaveStore::connect(&config.database_url).await?;
//! let service = LeaveService::new(store);
//!
//! let submission = LeaveSubmission {
//!     leave_type_id: Some(1),
//!     start_date: "2026-02-15".parse().ok(),
//!     end_date: "2026-02-20".parse().ok(),
//!     reason: Some("family trip".into()),
//!     comments: None,
//! };
//! let request_id = service.submit_leave_request(7, &submission).await?;
//! # let _ = request_id;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod overlap;
pub mod service;
pub mod store;
pub mod transition;
pub mod validate;

pub use error::{Error, LeaveTypeError, StoreError, TransitionError, ValidationError};
pub use model::{
    LeaveAction, LeaveKind, LeaveRequest, LeaveStatus, LeaveSubmission, LeaveType, NewLeaveType,
    TransitionOutcome, ValidatedLeaveType, ValidatedRequest,
};
pub use service::LeaveService;
pub use store::LeaveStore;
