//! Cart session endpoints

pub(crate) mod errors;
mod handlers;
pub(crate) mod items;

pub(crate) use handlers::{clear, create, get};
