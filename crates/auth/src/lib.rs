//! `gabinete-auth` — session/profile state and the access scope gate.
//!
//! This crate is intentionally decoupled from HTTP, storage, and the view
//! layer: sessions and profiles arrive as explicit values from external
//! collaborators, and the gate hands decisions and effects back out.

pub mod gate;
pub mod profile;
pub mod routes;
pub mod scope;
pub mod session;

pub use gate::{AccessDecision, Effect, Notice, ScopeGate, Severity, decide};
pub use profile::{Profile, UserProfile};
pub use routes::LoginRoutes;
pub use scope::Scope;
pub use session::{Session, SessionIdentity};
