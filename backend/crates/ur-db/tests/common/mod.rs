#![allow(dead_code)]

use ur_core::NewUser;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    ur_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn new_user(name: &str, email: &str) -> NewUser {
    NewUser::new(Some(name.to_string()), Some(email.to_string()))
        .expect("Fixture user must be valid")
}
