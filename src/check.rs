use super::*;
use anyhow::Context;
use anyhow::Result;
use tokio_postgres::Client;

/// Post-load verification: read the scratch table back and require the
/// exact row and field counts of the input dataset. Any mismatch means the
/// run is corrupted and must abort. The rows are discarded after counting.
#[async_trait::async_trait]
pub trait Check {
    async fn check(&self, rows: usize, fields: usize) -> Result<()>;
}

#[async_trait::async_trait]
impl Check for Client {
    async fn check(&self, rows: usize, fields: usize) -> Result<()> {
        let table = self.query(SELECTS, &[]).await.context("select failed")?;
        let nrows = table.len();
        let nfields = table.first().map_or(0, tokio_postgres::Row::len);
        match nrows == rows && nfields == fields {
            true => Ok(()),
            false => Err(anyhow::anyhow!(
                "results do not match input: got {} rows x {} fields, want {} x {}",
                nrows,
                nfields,
                rows,
                fields
            )),
        }
    }
}
