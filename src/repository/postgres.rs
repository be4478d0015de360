use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::debug;

use super::TrackingRepository;
use crate::error::Result;
use crate::models::{AssignedUnit, ProcessStep, UnitAssignment};

/// Postgres-backed repository over the manufacturing schema
#[derive(Debug, Clone)]
pub struct PgTrackingRepository {
    pool: PgPool,
}

impl PgTrackingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TrackingRepository for PgTrackingRepository {
    async fn fetch_process_catalog(&self) -> Result<Vec<ProcessStep>> {
        let steps = ProcessStep::list_catalog(&self.pool).await?;
        debug!(steps = steps.len(), "Loaded process catalog");
        Ok(steps)
    }

    async fn fetch_assigned_units(&self) -> Result<Vec<AssignedUnit>> {
        let units = UnitAssignment::list_with_units(&self.pool).await?;
        debug!(units = units.len(), "Loaded unit assignments");
        Ok(units)
    }

    async fn health_check(&self) -> Result<()> {
        let row = sqlx::query("SELECT 1 AS health")
            .fetch_one(&self.pool)
            .await?;
        let _health: i32 = row.try_get("health")?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
