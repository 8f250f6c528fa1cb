//! Itinera
//!
//! Itinera is the quoting engine behind a travel DMC sales desk: session
//! carts of priced itinerary services with a running total, voucher
//! snapshots for quotes and confirmed services, and placeholder document
//! rendering for the finished voucher.

pub mod cart;
pub mod document;
pub mod fixtures;
pub mod items;
pub mod pricing;
pub mod rates;
pub mod voucher;
