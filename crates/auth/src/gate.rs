//! Access scope gate: decides whether a protected view may render.
//!
//! The decision itself is a pure function of the current `(Session, Profile)`
//! pair and the required scope. The one side effect - dropping a session that
//! cannot prove its authorization - is edge-detected by [`ScopeGate`], which
//! carries the last denial cause so re-evaluations with unchanged inputs stay
//! effect-free no matter how often the surrounding view re-renders.

use serde::Serialize;
use tracing::{debug, warn};

use crate::profile::Profile;
use crate::routes::LoginRoutes;
use crate::scope::Scope;
use crate::session::Session;

/// Outcome of evaluating the gate for a protected view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Session or profile still resolving; show a spinner, render nothing.
    Pending,
    /// Authenticated and authorized; render the protected view.
    Granted,
    /// Not authorized; redirect to the given login path.
    DeniedRedirect(String),
}

/// Why an evaluation denied access.
///
/// Doubles as the edge-detection marker: a repeat evaluation landing on the
/// same cause is the same denial, not a new transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DenialCause {
    /// No session at all; there is nothing to sign out.
    NoSession,
    /// A session exists but its profile could not be read.
    ProfileError,
    /// A session exists, the profile was read, the required scope is missing.
    MissingScope,
}

impl DenialCause {
    /// A session that cannot prove its authorization must not be left alive.
    fn requires_sign_out(self) -> bool {
        matches!(self, DenialCause::ProfileError | DenialCause::MissingScope)
    }
}

/// Severity of a user-facing notice, mirroring the view layer's variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// User-facing notice raised on a denial transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

/// Effect requested by the gate. Executed by collaborators, never by the
/// gate itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the identity collaborator to drop the current session.
    SignOut,
    /// Surface a notice to the user.
    Notify(Notice),
}

fn classify(
    session: &Session,
    profile: &Profile,
    required: &Scope,
    routes: &LoginRoutes,
) -> (AccessDecision, Option<DenialCause>) {
    let denied = |cause| {
        (
            AccessDecision::DeniedRedirect(routes.path_for(required).to_string()),
            Some(cause),
        )
    };

    match session {
        Session::Loading => (AccessDecision::Pending, None),
        Session::Absent => denied(DenialCause::NoSession),
        Session::Present(_) => match profile {
            // NotFetched with a live session means the profile query has not
            // started yet for this identity; still resolving.
            Profile::NotFetched | Profile::Loading => (AccessDecision::Pending, None),
            Profile::Error => denied(DenialCause::ProfileError),
            Profile::Present(user) => {
                if user.has_scope(required) {
                    (AccessDecision::Granted, None)
                } else {
                    denied(DenialCause::MissingScope)
                }
            }
        },
    }
}

/// Compute the access decision for the current inputs.
///
/// Pure and synchronous: no IO, no panics, safe to call on every render.
/// Effect tracking lives in [`ScopeGate`].
pub fn decide(
    session: &Session,
    profile: &Profile,
    required: &Scope,
    routes: &LoginRoutes,
) -> AccessDecision {
    classify(session, profile, required, routes).0
}

fn denial_notice(required: &Scope) -> Notice {
    let description = if *required == Scope::CAMPO {
        "Sua conta não tem acesso ao módulo de Campo. Solicite habilitação.".to_string()
    } else if *required == Scope::BACKOFFICE {
        "Sua conta não tem acesso ao backoffice.".to_string()
    } else {
        format!("Sua conta não tem acesso ao escopo '{required}'.")
    };

    Notice {
        title: "Acesso Negado".to_string(),
        description,
        severity: Severity::Error,
    }
}

/// Edge-detecting reducer around [`decide`].
///
/// One `ScopeGate` guards one protected view. It holds nothing but the last
/// denial cause; Session and Profile always arrive as parameters, so tests
/// can drive arbitrary combinations without any ambient state.
///
/// A denial is final within a session lifetime: the triggered sign-out tears
/// the session down, and the fresh session that follows starts a new
/// evaluation history.
#[derive(Debug, Clone, Default)]
pub struct ScopeGate {
    last_denial: Option<DenialCause>,
}

impl ScopeGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate the gate against the current inputs.
    ///
    /// Returns the decision plus the effects to execute. Effects are emitted
    /// only on the transition into an authenticated-but-unauthorized denial:
    /// exactly one [`Effect::SignOut`] and one [`Effect::Notify`] per such
    /// edge. A denial for a missing session carries no effects, and repeat
    /// evaluations with an unchanged denial cause carry none either.
    pub fn evaluate(
        &mut self,
        session: &Session,
        profile: &Profile,
        required: &Scope,
        routes: &LoginRoutes,
    ) -> (AccessDecision, Vec<Effect>) {
        let (decision, cause) = classify(session, profile, required, routes);

        let mut effects = Vec::new();
        match cause {
            Some(cause) => {
                if cause.requires_sign_out() && self.last_denial != Some(cause) {
                    warn!(
                        scope = required.as_str(),
                        cause = ?cause,
                        "access denied, dropping unverifiable session"
                    );
                    effects.push(Effect::SignOut);
                    effects.push(Effect::Notify(denial_notice(required)));
                }
                self.last_denial = Some(cause);
            }
            None => {
                if decision == AccessDecision::Granted {
                    debug!(scope = required.as_str(), "access granted");
                    self.last_denial = None;
                }
                // Pending keeps the marker: a refetch bouncing through
                // `Loading` back to the same denial is not a new transition.
            }
        }

        (decision, effects)
    }
}
