pub mod calculator;
pub mod export;
pub mod ledger;
pub mod log;

pub use ledger::Ledger;
