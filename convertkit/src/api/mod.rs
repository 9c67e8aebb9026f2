//! Typed wrappers around the ConvertKit v3 endpoints.
//!
//! Every method here is a thin call into [`Client::execute`](crate::Client::execute).

pub mod account;
pub mod forms;
pub mod sequences;
pub mod subscribers;
pub mod subscriptions;
pub mod tags;
