//! Table creation. There are no versioned migrations: missing tables are
//! created at startup and existing ones are left untouched.

use sqlx::{Pool, Sqlite};

use crate::error::AppResult;

const TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS teams (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS equipment (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        serial TEXT NOT NULL DEFAULT '',
        category TEXT NOT NULL,
        department TEXT NOT NULL DEFAULT '',
        owner TEXT NOT NULL DEFAULT '',
        team TEXT NOT NULL DEFAULT '',
        technician TEXT NOT NULL DEFAULT '',
        location TEXT NOT NULL DEFAULT '',
        purchase_date TEXT,
        warranty_date TEXT,
        scrapped INTEGER NOT NULL DEFAULT 0
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS technicians (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        team TEXT NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS requests (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        subject TEXT NOT NULL,
        equipment_id INTEGER NOT NULL,
        team TEXT NOT NULL DEFAULT '',
        technician TEXT NOT NULL DEFAULT '',
        request_type TEXT NOT NULL,
        status TEXT DEFAULT 'New',
        scheduled_date TEXT,
        duration_hours REAL,
        created_at TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_requests_created_at ON requests(created_at DESC)",
    "CREATE INDEX IF NOT EXISTS idx_requests_equipment_id ON requests(equipment_id)",
];

/// Create the four tables and their indexes if missing
pub async fn init_schema(pool: &Pool<Sqlite>) -> AppResult<()> {
    for statement in TABLES {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::debug!("Database schema ready");
    Ok(())
}
