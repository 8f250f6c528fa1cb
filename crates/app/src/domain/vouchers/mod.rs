//! Vouchers

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::VouchersServiceError;
pub use service::*;
