//! Catalog module: products built through a fluent builder.
//!
//! Two generations of the same idea live here:
//!
//! - [`ProductDraft`] / [`LenientProduct`]: copies whatever was collected,
//!   no validation at all.
//! - [`ProductBuilder`] / [`Product`]: rejects a negative price as soon as it
//!   is supplied and refuses to build without a name and a positive price.

pub mod draft;
pub mod product;

pub use draft::{LenientProduct, ProductDraft};
pub use product::{Product, ProductBuilder, parse_date_stamp};
