//! # Order bridge server
//! This module hosts the HTTP shell around the order bridge engine. It is responsible for:
//! Listening for incoming order-creation webhook requests from Shopify.
//! Parsing the request body into a typed order payload.
//! Handing the payload to the order processor and translating its outcome into an HTTP response.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `/webhook/orders_create`: The webhook route for receiving order-creation events from Shopify.

pub mod config;
pub mod data_objects;
pub mod errors;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
