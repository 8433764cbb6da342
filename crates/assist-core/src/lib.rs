//! # assist-core
//!
//! Stateless helper functions for a personal assistant bot.
//!
//! Four independent utilities, each a pure transformation over simple inputs.
//! Nothing here holds state between calls, touches the filesystem, or talks to
//! the network; the only ambient input is the system clock, and every function
//! that reads it has a pure sibling taking `today` as an argument.
//!
//! ## Modules
//!
//! - [`days`] — signed day difference between a date string and today
//! - [`lottery`] — unique, sorted random picks from a bounded range
//! - [`phone`] — phone number cleanup with a default country-code prefix
//! - [`birthdays`] — upcoming-birthday filter with weekend-shift adjustment
//! - [`error`] — Error types

pub mod birthdays;
pub mod days;
pub mod error;
pub mod lottery;
pub mod phone;

pub use birthdays::{find_upcoming_birthdays, upcoming_birthdays, CongratulationEntry, UserRecord};
pub use days::{days_from, days_from_today};
pub use error::AssistError;
pub use lottery::{generate_ticket_numbers, generate_ticket_numbers_with};
pub use phone::normalize_phone;
