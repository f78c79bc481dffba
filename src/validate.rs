//! Submission and leave-type validation.
//!
//! Pure functions: the caller fetches the leave type and the user's active
//! requests from storage and hands them in. Nothing here does I/O or logs.

use chrono::NaiveDate;

use crate::error::{LeaveTypeError, ValidationError};
use crate::model::{
    LeaveRequest, LeaveSubmission, LeaveType, NewLeaveType, ValidatedLeaveType, ValidatedRequest,
};
use crate::overlap;

/// Default cap applied when an admin creates a leave type without one.
pub const DEFAULT_MAX_DAYS: u32 = 21;
/// Default display color for new leave types.
pub const DEFAULT_COLOR: &str = "#3b82f6";

/// Inclusive calendar-day count: `day_count(d, d) == 1`.
///
/// `NaiveDate` carries no time-of-day or offset, so this is immune to DST
/// drift by construction.
pub fn day_count(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Gates a leave submission before it may become a persisted `pending`
/// request.
///
/// `leave_type` is the resolved type for `candidate.leave_type_id` (absent
/// if unknown); `existing_active` is the submitting user's requests with
/// status pending or approved. Checks run in a fixed order and the first
/// failure wins:
///
/// 1. required fields present (a blank reason counts as missing)
/// 2. end date not before start date
/// 3. leave type exists and is active
/// 4. day count within the type's cap
/// 5. no overlap with an existing active request
pub fn validate_submission(
    candidate: &LeaveSubmission,
    leave_type: Option<&LeaveType>,
    existing_active: &[LeaveRequest],
) -> Result<ValidatedRequest, ValidationError> {
    let (Some(leave_type_id), Some(start_date), Some(end_date)) = (
        candidate.leave_type_id,
        candidate.start_date,
        candidate.end_date,
    ) else {
        return Err(ValidationError::MissingFields);
    };
    let reason = match candidate.reason.as_deref().map(str::trim) {
        Some(r) if !r.is_empty() => r.to_owned(),
        _ => return Err(ValidationError::MissingFields),
    };

    let total_days = day_count(start_date, end_date);
    if total_days <= 0 {
        return Err(ValidationError::InvalidDateRange);
    }

    let leave_type = match leave_type {
        Some(lt) if lt.is_active => lt,
        _ => return Err(ValidationError::InvalidLeaveType),
    };

    if total_days > i64::from(leave_type.max_days) {
        return Err(ValidationError::ExceedsMaxDays {
            max_days: leave_type.max_days,
        });
    }

    if overlap::has_overlap(start_date, end_date, existing_active) {
        return Err(ValidationError::OverlappingRequest);
    }

    Ok(ValidatedRequest {
        leave_type_id,
        start_date,
        end_date,
        total_days,
        reason,
        comments: candidate.comments.clone(),
    })
}

/// Gates the creation of a leave type.
///
/// `duplicate` is any already-stored type with the same name, looked up by
/// the caller. Defaults are applied here: `max_days` falls back to 21 and
/// `color` to `#3b82f6`, matching the admin form.
pub fn validate_new_leave_type(
    candidate: &NewLeaveType,
    duplicate: Option<&LeaveType>,
) -> Result<ValidatedLeaveType, LeaveTypeError> {
    let (Some(name), Some(kind)) = (candidate.name.as_deref().map(str::trim), candidate.kind)
    else {
        return Err(LeaveTypeError::MissingFields);
    };
    if name.is_empty() {
        return Err(LeaveTypeError::MissingFields);
    }

    if duplicate.is_some() {
        return Err(LeaveTypeError::DuplicateName);
    }

    let max_days = candidate.max_days.unwrap_or(DEFAULT_MAX_DAYS);
    if max_days == 0 {
        return Err(LeaveTypeError::InvalidMaxDays);
    }

    Ok(ValidatedLeaveType {
        name: name.to_owned(),
        kind,
        max_days,
        color: candidate
            .color
            .clone()
            .unwrap_or_else(|| DEFAULT_COLOR.to_owned()),
        description: candidate.description.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LeaveKind, LeaveStatus};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn annual(max_days: u32) -> LeaveType {
        LeaveType {
            id: 1,
            name: "Annual".into(),
            kind: LeaveKind::Regular,
            max_days,
            color: "#3b82f6".into(),
            description: None,
            is_active: true,
        }
    }

    fn submission(start: NaiveDate, end: NaiveDate) -> LeaveSubmission {
        LeaveSubmission {
            leave_type_id: Some(1),
            start_date: Some(start),
            end_date: Some(end),
            reason: Some("vacation".into()),
            comments: None,
        }
    }

    fn pending(start: NaiveDate, end: NaiveDate) -> LeaveRequest {
        LeaveRequest {
            id: 9,
            user_id: 7,
            leave_type_id: 1,
            start_date: start,
            end_date: end,
            total_days: day_count(start, end),
            reason: "trip".into(),
            comments: None,
            status: LeaveStatus::Pending,
            admin_comments: None,
            approved_by: None,
            approved_at: None,
            created_at: None,
        }
    }

    #[test]
    fn day_count_is_inclusive() {
        let day = d(2024, 2, 15);
        assert_eq!(day_count(day, day), 1);
        assert_eq!(day_count(day, d(2024, 2, 21)), 7);
    }

    #[test]
    fn clean_submission_passes_with_computed_days() {
        let validated =
            validate_submission(&submission(d(2024, 2, 15), d(2024, 2, 20)), Some(&annual(21)), &[])
                .unwrap();
        assert_eq!(validated.total_days, 6);
        assert_eq!(validated.start_date, d(2024, 2, 15));
        assert_eq!(validated.end_date, d(2024, 2, 20));
        assert_eq!(validated.reason, "vacation");
    }

    #[test]
    fn absent_or_blank_reason_is_missing() {
        let mut sub = submission(d(2024, 2, 15), d(2024, 2, 20));
        sub.reason = None;
        assert_eq!(
            validate_submission(&sub, Some(&annual(21)), &[]),
            Err(ValidationError::MissingFields)
        );
        sub.reason = Some("   ".into());
        assert_eq!(
            validate_submission(&sub, Some(&annual(21)), &[]),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn missing_leave_type_id_is_missing_fields_not_invalid_type() {
        let mut sub = submission(d(2024, 2, 15), d(2024, 2, 20));
        sub.leave_type_id = None;
        assert_eq!(
            validate_submission(&sub, None, &[]),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn end_before_start_is_invalid_range() {
        let sub = submission(d(2024, 2, 20), d(2024, 2, 15));
        assert_eq!(
            validate_submission(&sub, Some(&annual(21)), &[]),
            Err(ValidationError::InvalidDateRange)
        );
    }

    #[test]
    fn date_range_is_checked_before_leave_type() {
        // Inverted dates AND an unknown leave type: the range error wins.
        assert_eq!(
            validate_submission(&submission(d(2024, 2, 20), d(2024, 2, 15)), None, &[]),
            Err(ValidationError::InvalidDateRange)
        );
    }

    #[test]
    fn unknown_leave_type_is_rejected() {
        assert_eq!(
            validate_submission(&submission(d(2024, 2, 15), d(2024, 2, 20)), None, &[]),
            Err(ValidationError::InvalidLeaveType)
        );
    }

    #[test]
    fn inactive_leave_type_is_rejected() {
        let mut lt = annual(21);
        lt.is_active = false;
        assert_eq!(
            validate_submission(&submission(d(2024, 2, 15), d(2024, 2, 20)), Some(&lt), &[]),
            Err(ValidationError::InvalidLeaveType)
        );
    }

    #[test]
    fn cap_boundary_is_inclusive() {
        // 4-day range against a 4-day cap passes; 3-day cap refuses with the cap.
        let sub = submission(d(2024, 3, 1), d(2024, 3, 4));
        assert!(validate_submission(&sub, Some(&annual(4)), &[]).is_ok());
        assert_eq!(
            validate_submission(&sub, Some(&annual(3)), &[]),
            Err(ValidationError::ExceedsMaxDays { max_days: 3 })
        );
    }

    #[test]
    fn overlap_with_existing_pending_is_rejected() {
        let existing = vec![pending(d(2024, 2, 15), d(2024, 2, 20))];
        assert_eq!(
            validate_submission(
                &submission(d(2024, 2, 18), d(2024, 2, 25)),
                Some(&annual(21)),
                &existing
            ),
            Err(ValidationError::OverlappingRequest)
        );
    }

    #[test]
    fn rejected_request_with_same_range_does_not_block() {
        let mut existing = pending(d(2024, 2, 15), d(2024, 2, 20));
        existing.status = LeaveStatus::Rejected;
        assert!(
            validate_submission(
                &submission(d(2024, 2, 15), d(2024, 2, 20)),
                Some(&annual(21)),
                &[existing]
            )
            .is_ok()
        );
    }

    #[test]
    fn single_day_request_is_valid() {
        let validated =
            validate_submission(&submission(d(2024, 2, 15), d(2024, 2, 15)), Some(&annual(21)), &[])
                .unwrap();
        assert_eq!(validated.total_days, 1);
    }

    #[test]
    fn new_leave_type_defaults_applied() {
        let candidate = NewLeaveType {
            name: Some("Casual".into()),
            kind: Some(LeaveKind::Regular),
            ..Default::default()
        };
        let validated = validate_new_leave_type(&candidate, None).unwrap();
        assert_eq!(validated.max_days, DEFAULT_MAX_DAYS);
        assert_eq!(validated.color, DEFAULT_COLOR);
    }

    #[test]
    fn new_leave_type_requires_name_and_kind() {
        let no_kind = NewLeaveType {
            name: Some("Casual".into()),
            ..Default::default()
        };
        assert_eq!(
            validate_new_leave_type(&no_kind, None),
            Err(LeaveTypeError::MissingFields)
        );
        let no_name = NewLeaveType {
            kind: Some(LeaveKind::Special),
            ..Default::default()
        };
        assert_eq!(
            validate_new_leave_type(&no_name, None),
            Err(LeaveTypeError::MissingFields)
        );
    }

    #[test]
    fn new_leave_type_refuses_duplicate_name() {
        let candidate = NewLeaveType {
            name: Some("Annual".into()),
            kind: Some(LeaveKind::Regular),
            ..Default::default()
        };
        assert_eq!(
            validate_new_leave_type(&candidate, Some(&annual(21))),
            Err(LeaveTypeError::DuplicateName)
        );
    }

    #[test]
    fn new_leave_type_refuses_zero_cap() {
        let candidate = NewLeaveType {
            name: Some("Casual".into()),
            kind: Some(LeaveKind::Regular),
            max_days: Some(0),
            ..Default::default()
        };
        assert_eq!(
            validate_new_leave_type(&candidate, None),
            Err(LeaveTypeError::InvalidMaxDays)
        );
    }
}
