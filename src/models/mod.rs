pub mod break_interval;
pub mod break_kind;
pub mod record;
pub mod status;

pub use break_interval::BreakInterval;
pub use break_kind::BreakKind;
pub use record::AttendanceRecord;
pub use status::AttendanceStatus;
