//! HTTP surface of the Sentio storefront.

pub mod api;
pub mod metrics;
pub mod state;
pub mod views;
