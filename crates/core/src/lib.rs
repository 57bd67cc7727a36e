//! `solidforge-core` — shared building blocks for the example crates.
//!
//! Pure domain primitives only: the error model, identity/value traits and
//! strongly-typed identifiers.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::OrderId;
pub use value_object::ValueObject;
