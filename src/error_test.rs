use super::*;

#[test]
fn error_codes_are_stable() {
    assert_eq!(TrackerError::UnknownBug(BugId::from("7")).error_code(), "E_UNKNOWN_BUG");
    assert_eq!(
        TrackerError::SameList { bug_id: BugId::from("7"), list: ListKind::Sprint }.error_code(),
        "E_SAME_LIST"
    );
    assert_eq!(
        TrackerError::ListMismatch { bug_id: BugId::from("7"), reported: ListKind::Sprint, actual: ListKind::Backlog }
            .error_code(),
        "E_LIST_MISMATCH"
    );
    assert_eq!(
        TrackerError::SeparatorInId { bug_id: BugId::from("7,8"), separator: ",".to_owned() }.error_code(),
        "E_SEPARATOR_IN_ID"
    );
    assert_eq!(TrackerError::NoPendingChanges.error_code(), "E_NO_PENDING_CHANGES");
}

#[test]
fn only_empty_submit_is_retryable() {
    assert!(TrackerError::NoPendingChanges.retryable());
    assert!(!TrackerError::UnknownBug(BugId::from("7")).retryable());
    assert!(!TrackerError::SameList { bug_id: BugId::from("7"), list: ListKind::Backlog }.retryable());
}

#[test]
fn messages_name_the_bug_and_lists() {
    let err = TrackerError::ListMismatch { bug_id: BugId::from("42"), reported: ListKind::Backlog, actual: ListKind::Sprint };
    assert_eq!(err.to_string(), "bug 42 is on the sprint list, not backlog");
    assert_eq!(TrackerError::UnknownBug(BugId::from("9")).to_string(), "unknown bug: 9");
}
