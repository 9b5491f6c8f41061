//! Order intake: the submitted order document and its validation rules.
//!
//! This crate is pure domain logic (no IO, no HTTP, no storage). Callers hand
//! in a deserialized [`OrderDocument`] and get back the ordered list of
//! violations; an empty list means the order can be placed.

pub mod document;
pub mod email;
pub mod terms;
pub mod validator;
pub mod violation;

pub use document::{AddressDocument, OrderDocument};
pub use email::{Mailbox, MailboxError, is_valid_email};
pub use terms::{Currency, PaymentTerms};
pub use validator::{ValidatedAddress, ValidatedOrder, validate, violations};
pub use violation::{AddressRole, Violation};
