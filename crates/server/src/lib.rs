pub mod advisor;
pub mod config;
pub mod error;
pub mod routes;
