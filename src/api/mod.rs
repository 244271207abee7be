//! HTTP API: routes, handlers, request/response models, server lifecycle

pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;
pub mod validate;

pub use server::ApiServer;
