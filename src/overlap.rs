//! Inclusive-bounds interval overlap over calendar dates.

use chrono::NaiveDate;

use crate::model::LeaveRequest;

/// True iff the inclusive intervals `[s1, e1]` and `[s2, e2]` intersect.
///
/// Single-inequality form: it subsumes the endpoint-containment and
/// full-containment cases the legacy three-clause check spelled out.
pub fn ranges_overlap(s1: NaiveDate, e1: NaiveDate, s2: NaiveDate, e2: NaiveDate) -> bool {
    s1 <= e2 && s2 <= e1
}

/// True iff the candidate `[start, end]` conflicts with any active request.
///
/// Only `pending` and `approved` records count; a rejected request never
/// blocks a new submission, whatever its dates. Single-day intervals
/// participate like any other.
pub fn has_overlap(start: NaiveDate, end: NaiveDate, existing: &[LeaveRequest]) -> bool {
    existing
        .iter()
        .filter(|r| r.status.is_active())
        .any(|r| ranges_overlap(start, end, r.start_date, r.end_date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LeaveStatus;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn request(start: NaiveDate, end: NaiveDate, status: LeaveStatus) -> LeaveRequest {
        LeaveRequest {
            id: 1,
            user_id: 7,
            leave_type_id: 1,
            start_date: start,
            end_date: end,
            total_days: (end - start).num_days() + 1,
            reason: "vacation".into(),
            comments: None,
            status,
            admin_comments: None,
            approved_by: None,
            approved_at: None,
            created_at: None,
        }
    }

    #[test]
    fn disjoint_ranges_do_not_overlap() {
        assert!(!ranges_overlap(
            d(2024, 2, 1),
            d(2024, 2, 5),
            d(2024, 2, 6),
            d(2024, 2, 10)
        ));
    }

    #[test]
    fn touching_at_one_day_overlaps() {
        assert!(ranges_overlap(
            d(2024, 2, 1),
            d(2024, 2, 5),
            d(2024, 2, 5),
            d(2024, 2, 10)
        ));
    }

    #[test]
    fn containment_overlaps_both_ways() {
        // candidate contains existing
        assert!(ranges_overlap(
            d(2024, 2, 1),
            d(2024, 2, 28),
            d(2024, 2, 10),
            d(2024, 2, 12)
        ));
        // existing contains candidate
        assert!(ranges_overlap(
            d(2024, 2, 10),
            d(2024, 2, 12),
            d(2024, 2, 1),
            d(2024, 2, 28)
        ));
    }

    #[test]
    fn identical_single_day_intervals_overlap() {
        assert!(ranges_overlap(
            d(2024, 2, 15),
            d(2024, 2, 15),
            d(2024, 2, 15),
            d(2024, 2, 15)
        ));
    }

    #[test]
    fn candidate_partially_over_existing_pending() {
        let existing = vec![request(d(2024, 2, 15), d(2024, 2, 20), LeaveStatus::Pending)];
        assert!(has_overlap(d(2024, 2, 18), d(2024, 2, 25), &existing));
    }

    #[test]
    fn rejected_request_never_blocks() {
        let existing = vec![request(d(2024, 2, 15), d(2024, 2, 20), LeaveStatus::Rejected)];
        assert!(!has_overlap(d(2024, 2, 15), d(2024, 2, 20), &existing));
    }

    #[test]
    fn approved_request_blocks() {
        let existing = vec![request(d(2024, 2, 15), d(2024, 2, 20), LeaveStatus::Approved)];
        assert!(has_overlap(d(2024, 2, 20), d(2024, 2, 22), &existing));
    }
}
