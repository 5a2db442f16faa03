//! Track API services.
//!
//! Each service covers one resource of the Track API. All of them validate
//! required arguments locally, fail with [`Error::Param`](crate::Error::Param)
//! before touching the network, and treat anything but `200 OK` as an
//! [`Error::Api`](crate::Error::Api).

mod account;
mod customers;
mod devices;
mod events;
mod segments;

pub use account::AccountService;
pub use customers::CustomersService;
pub use devices::DevicesService;
pub use events::EventsService;
pub use segments::ManualSegmentsService;
