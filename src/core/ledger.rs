//! Attendance ledger: check-in / break / check-out transitions over a store.
//!
//! Every transition reads the whole record collection, changes it in memory
//! and writes the whole collection back, followed by the cached status.
//! A rejected transition writes nothing.

use crate::clock::{Clock, SystemClock};
use crate::core::calculator::accounting::{total_break_millis, worked_minutes};
use crate::errors::{AppResult, Operation, Rejection};
use crate::models::{AttendanceRecord, AttendanceStatus, BreakInterval, BreakKind};
use crate::store::{RECORDS_KEY, STATUS_KEY, Store, encode};
use crate::utils::date::day_of;
use crate::utils::time::utc;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

pub const DEFAULT_ACTOR: &str = "user123";

pub struct Ledger<S: Store, C: Clock = SystemClock> {
    store: S,
    clock: C,
    actor: String,
    offset: FixedOffset,
}

impl<S: Store> Ledger<S, SystemClock> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: Store, C: Clock> Ledger<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            actor: DEFAULT_ACTOR.to_string(),
            offset: utc(),
        }
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = actor.into();
        self
    }

    /// Offset used to decide which calendar day an instant belongs to.
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    pub fn actor(&self) -> &str {
        &self.actor
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // ------------------------------------------------
    // Reads
    // ------------------------------------------------

    /// Cached status; `CheckedOut` if never written.
    pub fn status(&self) -> AttendanceStatus {
        self.store.load(STATUS_KEY, AttendanceStatus::CheckedOut)
    }

    pub fn today(&self) -> NaiveDate {
        day_of(self.clock.now(), self.offset)
    }

    /// All persisted records, every actor and day, in insertion order.
    pub fn records(&self) -> Vec<AttendanceRecord> {
        self.store.load(RECORDS_KEY, Vec::new())
    }

    /// Records for a read-modify-write. Unlike [`Ledger::records`] an
    /// unreadable collection is an error.
    fn stored_records(&self) -> AppResult<Vec<AttendanceRecord>> {
        Ok(self.store.try_load(RECORDS_KEY)?.unwrap_or_default())
    }

    /// This actor's records, newest day first.
    pub fn history(&self) -> Vec<AttendanceRecord> {
        let mut own: Vec<AttendanceRecord> = self
            .records()
            .into_iter()
            .filter(|r| r.actor == self.actor)
            .collect();
        own.sort_by(|a, b| b.date.cmp(&a.date));
        own
    }

    pub fn today_record(&self) -> Option<AttendanceRecord> {
        let today = self.today();
        self.records()
            .into_iter()
            .find(|r| r.actor == self.actor && r.date == today)
    }

    // ------------------------------------------------
    // Transitions
    // ------------------------------------------------

    pub fn check_in(&mut self) -> AppResult<AttendanceRecord> {
        self.require(Operation::CheckIn, AttendanceStatus::CheckedOut)?;

        let now = self.clock.now();
        let today = day_of(now, self.offset);
        let mut records = self.stored_records()?;

        if records
            .iter()
            .any(|r| r.actor == self.actor && r.date == today)
        {
            return Err(Rejection::AlreadyCheckedIn(today).into());
        }

        let record = AttendanceRecord::check_in(&self.actor, today, now);
        records.push(record.clone());
        self.persist(&records, AttendanceStatus::CheckedIn)?;

        Ok(record)
    }

    pub fn check_out(&mut self) -> AppResult<AttendanceRecord> {
        self.require(Operation::CheckOut, AttendanceStatus::CheckedIn)?;

        self.update_today(|r, now| {
            if r.is_checked_out() {
                return Err(Rejection::AlreadyCheckedOut(r.date));
            }
            if r.open_break().is_some() {
                return Err(Rejection::BreakStillOpen);
            }
            ensure_not_before(now, latest_event(r))?;

            r.checked_out_at = Some(now);
            r.total_break_millis = total_break_millis(&r.breaks);
            r.total_worked_minutes = worked_minutes(r.checked_in_at, now, &r.breaks);

            Ok(AttendanceStatus::CheckedOut)
        })
    }

    pub fn start_break(&mut self, kind: BreakKind) -> AppResult<AttendanceRecord> {
        self.require(Operation::StartBreak, AttendanceStatus::CheckedIn)?;

        self.update_today(|r, now| {
            if r.is_checked_out() {
                return Err(Rejection::AlreadyCheckedOut(r.date));
            }
            if r.open_break().is_some() {
                return Err(Rejection::BreakAlreadyOpen);
            }
            ensure_not_before(now, latest_event(r))?;

            r.breaks.push(BreakInterval::open(kind, now));

            Ok(AttendanceStatus::OnBreak)
        })
    }

    pub fn end_break(&mut self) -> AppResult<AttendanceRecord> {
        self.require(Operation::EndBreak, AttendanceStatus::OnBreak)?;

        self.update_today(|r, now| {
            let open = r.open_break_mut().ok_or(Rejection::NoOpenBreak)?;
            ensure_not_before(now, open.started_at)?;
            open.ended_at = Some(now);

            r.total_break_millis = total_break_millis(&r.breaks);

            Ok(AttendanceStatus::CheckedIn)
        })
    }

    /// Recompute the cached status from today's record and store it.
    ///
    /// A record from an earlier day that was never checked out stays open;
    /// nothing closes it afterwards.
    pub fn sync_status(&mut self) -> AppResult<AttendanceStatus> {
        let status = AttendanceStatus::derive(self.today_record().as_ref());
        self.store.save(STATUS_KEY, &status)?;
        Ok(status)
    }

    // ------------------------------------------------
    // Helpers
    // ------------------------------------------------

    fn require(&self, operation: Operation, expected: AttendanceStatus) -> Result<(), Rejection> {
        let status = self.status();
        if status == expected {
            Ok(())
        } else {
            Err(Rejection::InvalidState { operation, status })
        }
    }

    /// Apply `change` to today's record and persist it with the status the
    /// closure returns. Nothing is written if the closure rejects.
    fn update_today<F>(&mut self, change: F) -> AppResult<AttendanceRecord>
    where
        F: FnOnce(&mut AttendanceRecord, DateTime<Utc>) -> Result<AttendanceStatus, Rejection>,
    {
        let now = self.clock.now();
        let today = day_of(now, self.offset);
        let mut records = self.stored_records()?;

        let idx = records
            .iter()
            .position(|r| r.actor == self.actor && r.date == today)
            .ok_or(Rejection::NoRecordForToday(today))?;

        let status = change(&mut records[idx], now)?;
        let updated = records[idx].clone();
        self.persist(&records, status)?;

        Ok(updated)
    }

    /// Records and status go out in a single `set_many`.
    fn persist(&mut self, records: &[AttendanceRecord], status: AttendanceStatus) -> AppResult<()> {
        let records = encode(&records)?;
        let status = encode(&status)?;
        self.store
            .set_many(&[(RECORDS_KEY, records.as_str()), (STATUS_KEY, status.as_str())])
    }
}

/// Latest instant already recorded on `r` (check-in or any break edge).
fn latest_event(r: &AttendanceRecord) -> DateTime<Utc> {
    r.breaks
        .iter()
        .flat_map(|b| [Some(b.started_at), b.ended_at])
        .flatten()
        .fold(r.checked_in_at, |acc, t| acc.max(t))
}

fn ensure_not_before(now: DateTime<Utc>, floor: DateTime<Utc>) -> Result<(), Rejection> {
    if now < floor {
        Err(Rejection::TimeOutOfOrder)
    } else {
        Ok(())
    }
}
