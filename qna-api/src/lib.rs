pub mod api;
pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
