use log::info;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Explicit table definition handed to the store at startup.
pub const EMPLOYEES_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS employees (
    id BIGSERIAL PRIMARY KEY,
    first_name VARCHAR(255) NOT NULL,
    last_name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL UNIQUE
)";

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(EMPLOYEES_SCHEMA).execute(pool).await?;
    info!("employees table ready");
    Ok(())
}
