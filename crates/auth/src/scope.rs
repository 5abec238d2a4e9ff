use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Capability tag granted to a user profile, gating access to a section of
/// the application.
///
/// Scopes are modeled as opaque strings; the set of scopes in use is closed
/// at build time (see the associated constants), but nothing here prevents a
/// profile from carrying tags this crate does not know about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scope(Cow<'static, str>);

impl Scope {
    /// Backoffice dashboard: citizen registry, tickets, scheduling, reports.
    pub const BACKOFFICE: Scope = Scope(Cow::Borrowed("backoffice"));

    /// Field-collection mobile flow.
    pub const CAMPO: Scope = Scope(Cow::Borrowed("campo"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Scope {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
