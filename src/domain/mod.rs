//! Domain value objects.
//!
//! Every field of a contact is a validated wrapper: a [`Name`], a [`Phone`]
//! or a [`Birthday`]. Each implements the [`Field`] trait, so validation
//! happens once, at construction, and invalid data can never be represented.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
