//! Data models for the contact directory.
//!
//! `ContactRecord` holds one person's phones and birthday; `Directory` is the
//! keyed collection of records and owns the upcoming-birthday report.

pub mod contact;
pub mod directory;

pub use contact::ContactRecord;
pub use directory::Directory;
