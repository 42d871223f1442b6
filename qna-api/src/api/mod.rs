use crate::database::Database;

pub mod answers;
pub mod health;
pub mod questions;

/// Shared across workers; each handler builds its service from the pool handle.
pub struct AppState {
    pub database: Database,
}
