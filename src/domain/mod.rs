//! Domain value objects.
//!
//! Type-safe wrappers for contact names and phone numbers. Both validate at
//! construction time, so an invalid name or phone cannot be represented
//! anywhere else in the crate.

pub mod errors;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
