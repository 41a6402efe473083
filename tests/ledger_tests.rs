use chrono::Duration;
use rattendance::errors::{AppError, Operation, Rejection};
use rattendance::models::{AttendanceStatus, BreakKind};
use rattendance::utils::time::parse_offset;

mod common;
use common::{at, ledger_at, with_cached_status};

fn rejection(err: AppError) -> Rejection {
    match err {
        AppError::Rejected(r) => r,
        other => panic!("expected a rejection, got {other:?}"),
    }
}

#[test]
fn test_status_follows_every_transition() {
    let mut ledger = ledger_at("2024-01-01T09:00:00Z");
    assert_eq!(ledger.status(), AttendanceStatus::CheckedOut);

    ledger.check_in().unwrap();
    assert_eq!(ledger.status(), AttendanceStatus::CheckedIn);

    ledger.clock().advance(Duration::minutes(30));
    ledger.start_break(BreakKind::Coffee).unwrap();
    assert_eq!(ledger.status(), AttendanceStatus::OnBreak);

    ledger.clock().advance(Duration::minutes(10));
    ledger.end_break().unwrap();
    assert_eq!(ledger.status(), AttendanceStatus::CheckedIn);

    ledger.clock().advance(Duration::hours(4));
    ledger.check_out().unwrap();
    assert_eq!(ledger.status(), AttendanceStatus::CheckedOut);
}

#[test]
fn test_check_in_creates_record_for_today() {
    let mut ledger = ledger_at("2024-01-01T09:00:00Z");
    let record = ledger.check_in().unwrap();

    assert_eq!(record.date.to_string(), "2024-01-01");
    assert_eq!(record.actor, "user123");
    assert_eq!(record.checked_in_at, at("2024-01-01T09:00:00Z"));
    assert!(record.checked_out_at.is_none());
    assert!(record.breaks.is_empty());
    assert_eq!(ledger.today_record(), Some(record));
}

#[test]
fn test_check_out_without_breaks() {
    let mut ledger = ledger_at("2024-01-01T09:00:00Z");
    ledger.check_in().unwrap();

    ledger.clock().set(at("2024-01-01T12:34:56Z"));
    let record = ledger.check_out().unwrap();

    assert_eq!(record.checked_out_at, Some(at("2024-01-01T12:34:56Z")));
    assert_eq!(record.total_break_millis, 0);
    // 3h 34m 56s → 214 whole minutes
    assert_eq!(record.total_worked_minutes, 214);
}

#[test]
fn test_partial_minutes_are_dropped() {
    let mut ledger = ledger_at("2024-01-01T09:00:00Z");
    ledger.check_in().unwrap();

    ledger.clock().advance(Duration::seconds(61));
    let record = ledger.check_out().unwrap();
    assert_eq!(record.total_worked_minutes, 1);

    let mut ledger = ledger_at("2024-01-01T09:00:00Z");
    ledger.check_in().unwrap();
    ledger.clock().advance(Duration::seconds(119));
    let record = ledger.check_out().unwrap();
    assert_eq!(record.total_worked_minutes, 1);
}

#[test]
fn test_lunch_day_scenario() {
    let mut ledger = ledger_at("2024-01-01T09:00:00Z");
    ledger.check_in().unwrap();

    ledger.clock().set(at("2024-01-01T09:30:00Z"));
    ledger.start_break(BreakKind::Lunch).unwrap();

    ledger.clock().set(at("2024-01-01T10:00:00Z"));
    let after_break = ledger.end_break().unwrap();
    assert_eq!(after_break.total_break_millis, 1_800_000);

    ledger.clock().set(at("2024-01-01T17:00:00Z"));
    let record = ledger.check_out().unwrap();

    assert_eq!(record.total_break_millis, 1_800_000);
    assert_eq!(record.total_worked_minutes, 450);
    assert_eq!(record.breaks.len(), 1);
    assert_eq!(record.breaks[0].kind, BreakKind::Lunch);
    assert_eq!(record.breaks[0].ended_at, Some(at("2024-01-01T10:00:00Z")));
}

#[test]
fn test_two_breaks_in_eight_hours() {
    let mut ledger = ledger_at("2024-01-01T08:00:00Z");
    ledger.check_in().unwrap();

    ledger.clock().set(at("2024-01-01T10:00:00Z"));
    ledger.start_break(BreakKind::Coffee).unwrap();
    ledger.clock().set(at("2024-01-01T10:15:00Z"));
    ledger.end_break().unwrap();

    ledger.clock().set(at("2024-01-01T12:30:00Z"));
    ledger.start_break(BreakKind::Lunch).unwrap();
    ledger.clock().set(at("2024-01-01T13:15:00Z"));
    ledger.end_break().unwrap();

    ledger.clock().set(at("2024-01-01T16:00:00Z"));
    let record = ledger.check_out().unwrap();

    assert_eq!(record.total_break_millis, 3_600_000);
    assert_eq!(record.total_worked_minutes, 420);
    let kinds: Vec<BreakKind> = record.breaks.iter().map(|b| b.kind).collect();
    assert_eq!(kinds, vec![BreakKind::Coffee, BreakKind::Lunch]);
}

#[test]
fn test_end_break_without_open_break_is_rejected() {
    let mut ledger = ledger_at("2024-01-01T09:00:00Z");
    ledger.check_in().unwrap();
    ledger.clock().advance(Duration::minutes(5));
    ledger.start_break(BreakKind::Other).unwrap();
    ledger.clock().advance(Duration::minutes(5));
    ledger.end_break().unwrap();

    let before = ledger.today_record().unwrap();

    ledger.clock().advance(Duration::minutes(5));
    let err = rejection(ledger.end_break().unwrap_err());
    assert_eq!(
        err,
        Rejection::InvalidState {
            operation: Operation::EndBreak,
            status: AttendanceStatus::CheckedIn,
        }
    );

    let after = ledger.today_record().unwrap();
    assert_eq!(after.total_break_millis, before.total_break_millis);
    assert_eq!(after, before);
    assert_eq!(ledger.status(), AttendanceStatus::CheckedIn);
}

#[test]
fn test_operations_rejected_while_checked_out() {
    let mut ledger = ledger_at("2024-01-01T09:00:00Z");

    let err = rejection(ledger.start_break(BreakKind::Lunch).unwrap_err());
    assert!(matches!(
        err,
        Rejection::InvalidState {
            operation: Operation::StartBreak,
            status: AttendanceStatus::CheckedOut
        }
    ));

    let err = rejection(ledger.check_out().unwrap_err());
    assert!(matches!(
        err,
        Rejection::InvalidState {
            operation: Operation::CheckOut,
            ..
        }
    ));

    let err = rejection(ledger.end_break().unwrap_err());
    assert!(matches!(err, Rejection::InvalidState { .. }));

    assert!(ledger.records().is_empty());
    assert_eq!(ledger.status(), AttendanceStatus::CheckedOut);
}

#[test]
fn test_operations_rejected_while_on_break() {
    let mut ledger = ledger_at("2024-01-01T09:00:00Z");
    ledger.check_in().unwrap();
    ledger.clock().advance(Duration::minutes(20));
    ledger.start_break(BreakKind::Lunch).unwrap();

    ledger.clock().advance(Duration::minutes(20));
    for err in [
        ledger.check_in().unwrap_err(),
        ledger.check_out().unwrap_err(),
        ledger.start_break(BreakKind::Coffee).unwrap_err(),
    ] {
        assert!(matches!(
            rejection(err),
            Rejection::InvalidState {
                status: AttendanceStatus::OnBreak,
                ..
            }
        ));
    }

    let record = ledger.today_record().unwrap();
    assert_eq!(record.breaks.len(), 1);
    assert!(record.breaks[0].is_open());
    assert_eq!(record.total_break_millis, 0);
}

#[test]
fn test_second_check_in_same_day_is_rejected() {
    let mut ledger = ledger_at("2024-01-01T09:00:00Z");
    ledger.check_in().unwrap();
    ledger.clock().set(at("2024-01-01T17:00:00Z"));
    ledger.check_out().unwrap();

    ledger.clock().set(at("2024-01-01T18:00:00Z"));
    let err = rejection(ledger.check_in().unwrap_err());
    assert_eq!(err.to_string(), "already checked in on 2024-01-01");
    assert!(matches!(err, Rejection::AlreadyCheckedIn(_)));

    assert_eq!(ledger.records().len(), 1);
    assert_eq!(ledger.status(), AttendanceStatus::CheckedOut);

    // next day is a fresh record
    ledger.clock().set(at("2024-01-02T09:00:00Z"));
    ledger.check_in().unwrap();
    assert_eq!(ledger.records().len(), 2);
}

#[test]
fn test_today_record_reads_are_stable() {
    let mut ledger = ledger_at("2024-01-01T09:00:00Z");
    assert_eq!(ledger.today_record(), None);

    ledger.check_in().unwrap();
    ledger.clock().advance(Duration::minutes(1));
    ledger.start_break(BreakKind::Coffee).unwrap();

    let first = ledger.today_record();
    let second = ledger.today_record();
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn test_stale_status_after_midnight_can_be_synced() {
    let mut ledger = ledger_at("2024-01-01T20:00:00Z");
    ledger.check_in().unwrap();

    ledger.clock().set(at("2024-01-02T08:00:00Z"));
    let err = rejection(ledger.check_out().unwrap_err());
    assert_eq!(
        err,
        Rejection::NoRecordForToday("2024-01-02".parse().unwrap())
    );
    assert_eq!(ledger.status(), AttendanceStatus::CheckedIn);

    assert_eq!(ledger.sync_status().unwrap(), AttendanceStatus::CheckedOut);
    assert_eq!(ledger.status(), AttendanceStatus::CheckedOut);

    ledger.check_in().unwrap();
    assert_eq!(ledger.today_record().unwrap().date.to_string(), "2024-01-02");

    // yesterday's session stays open
    let history = ledger.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].date.to_string(), "2024-01-01");
    assert_eq!(history[1].checked_out_at, None);
}

#[test]
fn test_sync_status_restores_on_break() {
    let mut ledger = ledger_at("2024-01-01T09:00:00Z");
    ledger.check_in().unwrap();
    ledger.clock().advance(Duration::minutes(30));
    ledger.start_break(BreakKind::Lunch).unwrap();

    let mut store = ledger.into_store();
    use rattendance::store::{STATUS_KEY, Store};
    store.set(STATUS_KEY, "checked-out").unwrap();

    let mut ledger = rattendance::core::Ledger::with_clock(
        store,
        rattendance::clock::FixedClock::new(at("2024-01-01T09:45:00Z")),
    );
    assert_eq!(ledger.status(), AttendanceStatus::CheckedOut);
    assert_eq!(ledger.sync_status().unwrap(), AttendanceStatus::OnBreak);

    let record = ledger.end_break().unwrap();
    assert_eq!(record.total_break_millis, 15 * 60_000);
}

#[test]
fn test_clock_going_backwards_is_rejected() {
    let mut ledger = ledger_at("2024-01-01T09:00:00Z");
    ledger.check_in().unwrap();

    ledger.clock().set(at("2024-01-01T08:59:00Z"));
    let err = rejection(ledger.start_break(BreakKind::Coffee).unwrap_err());
    assert_eq!(err, Rejection::TimeOutOfOrder);
    assert_eq!(ledger.status(), AttendanceStatus::CheckedIn);
    assert!(ledger.today_record().unwrap().breaks.is_empty());

    ledger.clock().set(at("2024-01-01T10:00:00Z"));
    ledger.start_break(BreakKind::Coffee).unwrap();
    ledger.clock().set(at("2024-01-01T09:50:00Z"));
    let err = rejection(ledger.end_break().unwrap_err());
    assert_eq!(err, Rejection::TimeOutOfOrder);
    assert_eq!(ledger.status(), AttendanceStatus::OnBreak);
}

#[test]
fn test_day_key_uses_reference_offset() {
    let mut ledger =
        ledger_at("2024-01-01T23:30:00Z").with_offset(parse_offset("+02:00").unwrap());
    let record = ledger.check_in().unwrap();
    assert_eq!(record.date.to_string(), "2024-01-02");

    // still the same local day two hours later
    ledger.clock().advance(Duration::hours(2));
    let record = ledger.check_out().unwrap();
    assert_eq!(record.total_worked_minutes, 120);
}

#[test]
fn test_history_is_newest_first_and_per_actor() {
    let mut ledger = ledger_at("2024-01-01T09:00:00Z");
    for day in ["2024-01-01", "2024-01-02", "2024-01-03"] {
        ledger.clock().set(at(&format!("{day}T09:00:00Z")));
        ledger.check_in().unwrap();
        ledger.clock().set(at(&format!("{day}T17:00:00Z")));
        ledger.check_out().unwrap();
    }

    let store = ledger.into_store();
    let mut other = rattendance::core::Ledger::with_clock(
        store,
        rattendance::clock::FixedClock::new(at("2024-01-02T10:00:00Z")),
    )
    .with_actor("someone-else");
    other.check_in().unwrap();

    let dates: Vec<String> = other
        .history()
        .iter()
        .map(|r| r.date.to_string())
        .collect();
    assert_eq!(dates, vec!["2024-01-02"]);

    let store = other.into_store();
    let ledger = rattendance::core::Ledger::with_clock(
        store,
        rattendance::clock::FixedClock::new(at("2024-01-03T18:00:00Z")),
    );
    let dates: Vec<String> = ledger
        .history()
        .iter()
        .map(|r| r.date.to_string())
        .collect();
    assert_eq!(dates, vec!["2024-01-03", "2024-01-02", "2024-01-01"]);
    assert_eq!(ledger.records().len(), 4);
}

#[test]
fn test_start_break_with_open_break_on_record_is_rejected() {
    let mut ledger = ledger_at("2024-01-01T09:00:00Z");
    ledger.check_in().unwrap();
    ledger.clock().advance(Duration::minutes(30));
    ledger.start_break(BreakKind::Coffee).unwrap();

    let mut ledger = with_cached_status(ledger, AttendanceStatus::CheckedIn);
    let before = ledger.today_record().unwrap();

    ledger.clock().advance(Duration::minutes(5));
    let err = rejection(ledger.start_break(BreakKind::Lunch).unwrap_err());
    assert_eq!(err, Rejection::BreakAlreadyOpen);

    assert_eq!(ledger.today_record().unwrap(), before);
    assert_eq!(ledger.status(), AttendanceStatus::CheckedIn);
}

#[test]
fn test_check_out_with_open_break_on_record_is_rejected() {
    let mut ledger = ledger_at("2024-01-01T09:00:00Z");
    ledger.check_in().unwrap();
    ledger.clock().advance(Duration::minutes(30));
    ledger.start_break(BreakKind::Lunch).unwrap();

    let mut ledger = with_cached_status(ledger, AttendanceStatus::CheckedIn);
    let before = ledger.today_record().unwrap();

    ledger.clock().advance(Duration::hours(7));
    let err = rejection(ledger.check_out().unwrap_err());
    assert_eq!(err, Rejection::BreakStillOpen);

    let after = ledger.today_record().unwrap();
    assert_eq!(after, before);
    assert_eq!(after.checked_out_at, None);
    assert_eq!(ledger.status(), AttendanceStatus::CheckedIn);
}

#[test]
fn test_closed_record_rejects_check_out_and_start_break() {
    let mut ledger = ledger_at("2024-01-01T09:00:00Z");
    ledger.check_in().unwrap();
    ledger.clock().advance(Duration::hours(8));
    let closed = ledger.check_out().unwrap();

    let mut ledger = with_cached_status(ledger, AttendanceStatus::CheckedIn);
    ledger.clock().advance(Duration::minutes(10));

    let err = rejection(ledger.check_out().unwrap_err());
    assert_eq!(err, Rejection::AlreadyCheckedOut(closed.date));

    let err = rejection(ledger.start_break(BreakKind::Coffee).unwrap_err());
    assert_eq!(err, Rejection::AlreadyCheckedOut(closed.date));

    assert_eq!(ledger.today_record().unwrap(), closed);
    assert_eq!(ledger.status(), AttendanceStatus::CheckedIn);
}

#[test]
fn test_end_break_with_no_open_break_on_record_changes_nothing() {
    let mut ledger = ledger_at("2024-01-01T09:00:00Z");
    ledger.check_in().unwrap();
    ledger.clock().advance(Duration::minutes(10));
    ledger.start_break(BreakKind::Coffee).unwrap();
    ledger.clock().advance(Duration::minutes(10));
    ledger.end_break().unwrap();

    let mut ledger = with_cached_status(ledger, AttendanceStatus::OnBreak);
    let before = ledger.today_record().unwrap();

    ledger.clock().advance(Duration::minutes(10));
    let err = rejection(ledger.end_break().unwrap_err());
    assert_eq!(err, Rejection::NoOpenBreak);

    let after = ledger.today_record().unwrap();
    assert_eq!(after.total_break_millis, 10 * 60_000);
    assert_eq!(after, before);
    assert_eq!(ledger.status(), AttendanceStatus::OnBreak);
}
