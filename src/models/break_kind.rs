use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Kind of pause. The three tags are the ones found in stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BreakKind {
    Lunch,
    Coffee,
    Other,
}

impl BreakKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BreakKind::Lunch => "lunch",
            BreakKind::Coffee => "coffee",
            BreakKind::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BreakKind::Lunch => "Lunch Break",
            BreakKind::Coffee => "Coffee Break",
            BreakKind::Other => "Other Break",
        }
    }
}
