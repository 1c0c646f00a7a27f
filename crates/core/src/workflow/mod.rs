//! Document submission workflow

pub mod service;

use std::fmt;

pub use service::DocumentService;

/// Steps of a composite send, in the only order they can happen.
///
/// Confirmation is skipped when the caller did not ask for it. The first
/// failing step ends the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SendStage {
    Validated,
    Submitted,
    Confirmed,
    StatusChecked,
}

impl SendStage {
    /// The stage that follows this one, `None` once the status is known.
    pub const fn next(self, confirm: bool) -> Option<Self> {
        match self {
            Self::Validated => Some(Self::Submitted),
            Self::Submitted if confirm => Some(Self::Confirmed),
            Self::Submitted | Self::Confirmed => Some(Self::StatusChecked),
            Self::StatusChecked => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validated => "validated",
            Self::Submitted => "submitted",
            Self::Confirmed => "confirmed",
            Self::StatusChecked => "status_checked",
        }
    }
}

impl fmt::Display for SendStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
