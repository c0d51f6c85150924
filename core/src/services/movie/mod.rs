//! Movie listing service.

mod service;

pub use service::MovieService;
