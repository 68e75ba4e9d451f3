//! MySQL implementation of the OrderStore trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use tracing::error;
use uuid::Uuid;

use od_core::domain::entities::order::Order;
use od_core::errors::DomainError;
use od_core::repositories::OrderStore;

/// MySQL implementation of OrderStore
pub struct MySqlOrderStore {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlOrderStore {
    /// Create a new MySQL order store
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for MySqlOrderStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, status, created_at
            FROM orders
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "order store query failed");
            DomainError::Internal {
                message: "order store unavailable".to_string(),
            }
        })?;

        row.map(|row| {
            let id: String = row.try_get("id").map_err(db_error)?;

            Ok(Order {
                id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                    message: format!("invalid order id in store: {e}"),
                })?,
                status: row.try_get("status").map_err(db_error)?,
                created_at: row
                    .try_get::<DateTime<Utc>, _>("created_at")
                    .map_err(db_error)?,
            })
        })
        .transpose()
    }
}

fn db_error(error: sqlx::Error) -> DomainError {
    error!(error = %error, "order store row decode failed");
    DomainError::Internal {
        message: "order store unavailable".to_string(),
    }
}
