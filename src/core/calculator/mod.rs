pub mod accounting;
pub mod stats;
