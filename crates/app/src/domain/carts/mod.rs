//! Session carts

pub mod errors;
pub mod models;
pub mod service;
mod store;

pub use errors::CartsServiceError;
pub use service::*;
