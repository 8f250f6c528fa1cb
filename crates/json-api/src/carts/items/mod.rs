//! Cart item endpoints

mod handlers;

pub(crate) use handlers::{create, delete};
