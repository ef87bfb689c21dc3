use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub const MIGRATIONS: &str = include_str!("schema.sql");

pub async fn init_pool(database_url: &str) -> SqlitePool {
    let options = SqliteConnectOptions::from_str(database_url)
        .expect("Invalid DATABASE_URL")
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);
    SqlitePoolOptions::new()
        .max_connections(8)
        .connect_with(options)
        .await
        .expect("Failed to create DB pool")
}

pub async fn run_migrations(pool: &SqlitePool) {
    sqlx::raw_sql(MIGRATIONS)
        .execute(pool)
        .await
        .expect("Failed to run migrations");
    log::info!("Database migrations complete");
}

/// Create the default staff account on an empty database.
pub async fn seed_admin(pool: &SqlitePool, admin_password_hash: &str) {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .unwrap_or(0);
    if count > 0 {
        log::info!("Database already seeded ({} users), skipping admin seed", count);
        return;
    }

    sqlx::query("INSERT INTO users (username, password, is_staff) VALUES (?, ?, 1)")
        .bind("admin")
        .bind(admin_password_hash)
        .execute(pool)
        .await
        .expect("Failed to seed admin user");
    log::info!("Seeded default admin account");
}
