use std::fmt;
use std::sync::Arc;

use curator_core::DomainObject;
use serde::Serialize;

/// Lifecycle of a [`SampleProposal`](crate::SampleProposal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedulerState {
    /// No partition built yet.
    Idle,
    /// Built and able to serve.
    Ready,
    /// Everything in the live map has been served. Not terminal.
    Exhausted,
}

impl fmt::Display for SchedulerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Ready => "ready",
            Self::Exhausted => "exhausted",
        };
        f.write_str(s)
    }
}

/// One object handed to the reviewer, with its cluster for progress display.
#[derive(Debug, Clone)]
pub struct Served {
    pub object: Arc<DomainObject>,
    pub cluster_id: usize,
    /// Live cluster count of the map the object was served from.
    pub cluster_count: usize,
}

/// Result of [`serve_next`](crate::SampleProposal::serve_next).
#[derive(Debug, Clone)]
pub enum ServeOutcome {
    /// A fresh object.
    Next(Served),
    /// Everything has been served; the previously served object again.
    Exhausted(Served),
    /// Nothing has ever been served and nothing can be.
    NothingAvailable,
}

impl ServeOutcome {
    pub fn served(&self) -> Option<&Served> {
        match self {
            Self::Next(s) | Self::Exhausted(s) => Some(s),
            Self::NothingAvailable => None,
        }
    }

    /// Object to present, if any.
    pub fn object(&self) -> Option<&Arc<DomainObject>> {
        self.served().map(|s| &s.object)
    }

    pub fn is_fresh(&self) -> bool {
        matches!(self, Self::Next(_))
    }
}
