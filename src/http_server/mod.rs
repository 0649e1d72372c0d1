//! # HTTP Server Module
//!
//! axum server exposing the student records REST API.

pub mod config;
pub mod server;
pub mod student_routes;

pub use config::HttpServerConfig;
pub use server::HttpServer;
pub use student_routes::AppState;
