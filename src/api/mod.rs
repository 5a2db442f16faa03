//! App API services.
//!
//! Read-side endpoints for customers, segments and custom objects. Unless a
//! method says otherwise, only `200 OK` counts as success.

mod customers;
mod objects;
mod segments;

pub use customers::{CustomerLookupService, MAX_LOOKUP_IDS};
pub use objects::ObjectsService;
pub use segments::SegmentsService;
