//! `gabinete-core` — domain foundation for the gabinete backoffice.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! document value objects (CPF, phone), typed identifiers, and the domain
//! error model.

pub mod cpf;
pub mod error;
pub mod id;
pub mod phone;
pub mod value_object;

pub use cpf::Cpf;
pub use error::{DomainError, DomainResult};
pub use id::UserId;
pub use value_object::ValueObject;
