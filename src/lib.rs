//! rollcall - a student records REST service
//!
//! HTTP requests are routed by axum to thin handlers, handlers delegate to
//! [`service::StudentService`], and the service validates input and queries a
//! SQLite store through sqlx.

pub mod cli;
pub mod errors;
pub mod http_server;
pub mod model;
pub mod service;
pub mod store;
pub mod validation;
