// Repository layer for database operations
// Decision: Schema is bootstrapped with CREATE TABLE IF NOT EXISTS at startup, no migration history
// Decision: ORDER BY created_at DESC, id DESC; v7 ids break ties between identical timestamps

use async_trait::async_trait;
use chrono::Utc;
use eventbook_core::{Event, EventStore, NewEvent, Result, StoreError};
use sqlx::PgPool;
use tracing::{debug, error, instrument};
use uuid::Uuid;

use super::models::EventRow;
use crate::config::DatabaseConfig;

const CREATE_EVENTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS events (
        id UUID PRIMARY KEY,
        type VARCHAR(255) NOT NULL,
        description TEXT NOT NULL,
        budget DOUBLE PRECISION NOT NULL,
        number_of_persons INT NOT NULL,
        date VARCHAR(255) NOT NULL,
        payload JSONB NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

/// PostgreSQL implementation of EventStore
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Open a connection pool. Connecting eagerly doubles as the startup ping.
    pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let options = config.connect_options()?;
        let pool = PgPool::connect_with(options).await?;
        Ok(Self { pool })
    }

    /// Create database connection from URL
    pub async fn from_url(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Map a sqlx failure onto the store error taxonomy
fn store_error(operation: &str, err: sqlx::Error) -> StoreError {
    error!("Failed to {}: {}", operation, err);
    match &err {
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnIndexOutOfBounds { .. } => StoreError::decode(err.to_string()),
        _ => StoreError::database(err.to_string()),
    }
}

#[async_trait]
impl EventStore for Database {
    #[instrument(skip(self))]
    async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(CREATE_EVENTS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| store_error("create events table", e))?;

        debug!("events table ready");
        Ok(())
    }

    #[instrument(skip(self, event), fields(event_type = %event.event_type))]
    async fn insert(&self, event: NewEvent) -> Result<Event> {
        let id = Uuid::now_v7();
        let created_at = Utc::now();

        let row = sqlx::query_as::<_, EventRow>(
            r#"
            INSERT INTO events (id, type, description, budget, number_of_persons, date, payload, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, type, description, budget, number_of_persons, date, payload, created_at
            "#,
        )
        .bind(id)
        .bind(&event.event_type)
        .bind(&event.description)
        .bind(event.budget)
        .bind(event.number_of_persons)
        .bind(&event.date)
        .bind(&event.payload)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| store_error("insert event", e))?;

        debug!(%id, "created event");
        Ok(row.into())
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<Event>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, type, description, budget, number_of_persons, date, payload, created_at
            FROM events
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| store_error("list events", e))?;

        Ok(rows.into_iter().map(Event::from).collect())
    }
}
