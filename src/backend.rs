//! HTTP backend: the router and the handlers behind it.
pub mod handlers;
mod models;
pub mod router;
