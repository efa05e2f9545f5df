//! Domain value objects and types.
//!
//! Type-safe wrappers for contact names, phone numbers, and birthdays.
//! Each value object validates at construction time, so invalid data can
//! never be stored in a record.

pub mod birthday;
pub mod contact_name;
pub mod errors;
pub mod phone;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use contact_name::ContactName;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
