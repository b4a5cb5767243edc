pub mod config;
pub mod error;
pub mod graphql;
pub mod logger;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod validation;
