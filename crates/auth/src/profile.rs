use serde::{Deserialize, Serialize};

use crate::scope::Scope;
use crate::session::Session;

/// Authorization record associated with an authenticated session, fetched
/// separately from the session itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Capability tags granted to this user.
    pub scopes: Vec<Scope>,
}

impl UserProfile {
    pub fn new(scopes: impl IntoIterator<Item = Scope>) -> Self {
        Self {
            scopes: scopes.into_iter().collect(),
        }
    }

    pub fn has_scope(&self, scope: &Scope) -> bool {
        self.scopes.contains(scope)
    }
}

/// Fetch state of the profile query, keyed by the session identity.
///
/// Produced by the external profile-fetch collaborator, which re-queries
/// whenever the session identity changes and resolves `Loading` to either
/// `Present` or `Error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Profile {
    /// No fetch attempted (there is no session to key the query by).
    NotFetched,
    /// Fetch in flight.
    Loading,
    /// The fetch failed. Operationally indistinguishable from "cannot prove
    /// authorization", and treated as such by the gate.
    Error,
    /// The profile was read.
    Present(UserProfile),
}

impl Profile {
    /// Collaborator contract: the profile query must short-circuit (not
    /// fetch) unless an authenticated session exists.
    pub fn should_fetch(session: &Session) -> bool {
        session.is_present()
    }
}
