//! Application service layer.
//!
//! Services sit between the command handlers and the repository. They
//! provide the load-and-check step every handler performs before mutating.

mod lookup_service;

pub use lookup_service::LookupService;
