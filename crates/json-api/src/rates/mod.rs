//! Rate sheet endpoints

mod handlers;

pub(crate) use handlers::index;
