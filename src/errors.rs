//! Unified application error type.
//! All modules (db, core, cli, store) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::models::status::AttendanceStatus;
use chrono::NaiveDate;
use std::fmt;
use std::io;
use thiserror::Error;

/// The four ledger transitions, used to describe a rejected call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CheckIn,
    CheckOut,
    StartBreak,
    EndBreak,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::CheckIn => "check-in",
            Operation::CheckOut => "check-out",
            Operation::StartBreak => "start-break",
            Operation::EndBreak => "end-break",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transition that is not legal in the current state.
/// Nothing is persisted when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("cannot {operation} while {status}")]
    InvalidState {
        operation: Operation,
        status: AttendanceStatus,
    },

    #[error("already checked in on {0}")]
    AlreadyCheckedIn(NaiveDate),

    #[error("no attendance record for {0}")]
    NoRecordForToday(NaiveDate),

    #[error("already checked out on {0}")]
    AlreadyCheckedOut(NaiveDate),

    #[error("a break is already in progress")]
    BreakAlreadyOpen,

    #[error("no break in progress")]
    NoOpenBreak,

    #[error("a break is still in progress, end it before checking out")]
    BreakStillOpen,

    #[error("current time is earlier than the last recorded event")]
    TimeOutOfOrder,
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Stored value under '{key}' cannot be read: {source}")]
    Unreadable {
        key: String,
        source: serde_json::Error,
    },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid UTC offset: {0}")]
    InvalidOffset(String),

    // ---------------------------
    // Ledger
    // ---------------------------
    #[error("Rejected: {0}")]
    Rejected(#[from] Rejection),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
