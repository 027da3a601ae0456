//! Plain data row types written by output backends.

use std::fmt;

/// What happened to a vehicle in one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Park,
    Pick,
    Reject,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Park   => "park",
            EventKind::Pick   => "pick",
            EventKind::Reject => "reject",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One park, pick, or rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub step:          u64,
    pub kind:          EventKind,
    /// Issuing lot; `u32::MAX` for rejections.
    pub lot_id:        u32,
    /// Per-lot ticket number; `u64::MAX` for rejections.
    pub ticket_number: u64,
    pub plate:         String,
}

/// Free space in one lot at a snapshot step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancyRow {
    pub step:      u64,
    pub lot_id:    u32,
    pub capacity:  u64,
    pub available: u64,
}
