use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Category of a leave type: `special` marks festival/event leave.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize, Display,
    EnumString, sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum LeaveKind {
    Regular,
    Special,
}

/// A named category of leave, shared read-only by many requests.
///
/// Identifiers are immutable once created. Types are soft-disabled via
/// `is_active` rather than deleted, so historical requests keep a valid
/// reference.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct LeaveType {
    pub id: u64,
    pub name: String,
    pub kind: LeaveKind,
    /// Inclusive upper bound on a single request's total days.
    pub max_days: u32,
    pub color: String,
    pub description: Option<String>,
    pub is_active: bool,
}

/// Admin form payload for creating a leave type. Optional fields fall back
/// to defaults during validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewLeaveType {
    pub name: Option<String>,
    pub kind: Option<LeaveKind>,
    pub max_days: Option<u32>,
    pub color: Option<String>,
    pub description: Option<String>,
}

/// A leave type that passed admin validation, defaults applied, ready to
/// insert. New types always start active.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedLeaveType {
    pub name: String,
    pub kind: LeaveKind,
    pub max_days: u32,
    pub color: String,
    pub description: Option<String>,
}
