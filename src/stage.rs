use super::*;
use anyhow::Context;
use anyhow::Result;
use tokio_postgres::Client;

/// Session setup for one trial: create the scratch table this connection
/// will load into. One statement, executed over the simple-query path.
#[async_trait::async_trait]
pub trait Stage {
    async fn stage(&self) -> Result<()>;
}

#[async_trait::async_trait]
impl Stage for Client {
    async fn stage(&self) -> Result<()> {
        self.batch_execute(CREATES)
            .await
            .context("temp table creation failed")
    }
}
