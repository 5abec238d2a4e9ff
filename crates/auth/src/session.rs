use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gabinete_core::UserId;

/// Identity carried by an authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub user_id: UserId,
    pub authenticated_at: DateTime<Utc>,
}

/// Authentication state of the current actor.
///
/// Produced by the external identity collaborator and consumed here; the
/// collaborator guarantees it eventually resolves `Loading` to either
/// `Present` or `Absent`, and re-emits on every auth event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    /// The identity collaborator has not resolved the session yet.
    Loading,
    /// No authenticated session.
    Absent,
    /// An authenticated session exists.
    Present(SessionIdentity),
}

impl Session {
    pub fn identity(&self) -> Option<&SessionIdentity> {
        match self {
            Session::Present(identity) => Some(identity),
            Session::Loading | Session::Absent => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Session::Present(_))
    }
}
