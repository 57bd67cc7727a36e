//! Trait features standing in for interface/abstract-class idioms.
//!
//! - [`flyable`]: default methods and a trait-level associated function.
//! - [`greeting`]: two traits with the same default method, disambiguated.
//! - [`composition`]: reuse by owning helpers instead of inheriting them.
//! - [`animal`]: an "abstract base" trait plus an extra capability.

pub mod animal;
pub mod composition;
pub mod flyable;
pub mod greeting;

pub use animal::{Animal, Dolphin, Swimmable};
pub use composition::{Composite, MethodA, MethodB};
pub use flyable::{Airplane, Flyable};
pub use greeting::{AlphaGreeting, BetaGreeting, Combined};
