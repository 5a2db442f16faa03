//! Data models for the Customer.io API.
//!
//! - [`primitives`] - identifiers, regions and the open attribute map
//! - [`enums`] - identifier types
//! - [`customer`] - the person profile
//! - [`segment`] - segments
//! - [`filter`] - search filters
//! - [`object`] - custom object types
//! - [`account`] - workspace-level metadata

pub mod account;
pub mod customer;
pub mod enums;
pub mod filter;
pub mod object;
pub mod primitives;
pub mod segment;

pub use account::*;
pub use customer::Customer;
pub use enums::*;
pub use filter::*;
pub use object::*;
pub use primitives::*;
pub use segment::*;
