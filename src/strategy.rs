use super::*;
use anyhow::Context;
use anyhow::Result;
use bytes::Bytes;
use futures::SinkExt;
use std::time::Duration;
use std::time::Instant;
use tokio_postgres::Client;

/// The five ways to move the dataset into the scratch table.
///
/// All five produce identical table contents; only the protocol differs,
/// so the published deltas are pure protocol cost. Each variant measures
/// its own window: from just before the first data transfer to just after
/// the server acknowledges completion. Connection setup, table creation,
/// COPY initiation, and verification sit outside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// One COPY carrying the whole dataset as a single buffer.
    BulkCopy,
    /// One COPY fed one line per record.
    RowCopy,
    /// Per-row INSERT with values spliced in as quoted literals.
    NaiveInsert,
    /// Per-row INSERT with a bound parameter list.
    ParamInsert,
    /// Prepared statement executed once per row.
    PreparedInsert,
}

impl Strategy {
    /// Benchmark order, fixed.
    pub const fn all() -> &'static [Self] {
        &[
            Self::BulkCopy,
            Self::RowCopy,
            Self::NaiveInsert,
            Self::ParamInsert,
            Self::PreparedInsert,
        ]
    }

    /// Load every record into the scratch table, returning the measured
    /// wall-clock window. Any per-record or per-call failure aborts the
    /// whole run; nothing retries.
    pub async fn load(&self, client: &Client, dataset: &Dataset) -> Result<Duration> {
        match self {
            Self::BulkCopy => Self::bulk(client, dataset).await,
            Self::RowCopy => Self::rowwise(client, dataset).await,
            Self::NaiveInsert => Self::naive(client, dataset).await,
            Self::ParamInsert => Self::params(client, dataset).await,
            Self::PreparedInsert => Self::prepared(client, dataset).await,
        }
    }

    /// Serialize everything into one growable buffer, push it in a single
    /// send, then signal end-of-data. Buffer assembly is inside the timed
    /// window; the COPY handshake is not.
    async fn bulk(client: &Client, dataset: &Dataset) -> Result<Duration> {
        let sink = client.copy_in(COPIES).await.context("copy handshake failed")?;
        futures::pin_mut!(sink);
        let clock = Instant::now();
        let buffer = dataset.encodes();
        sink.send(Bytes::from(buffer.into_bytes()))
            .await
            .context("copy send failed")?;
        sink.finish().await.context("copy end failed")?;
        Ok(clock.elapsed())
    }

    /// Same COPY command and line format, but one send per record and a
    /// single end-of-data signal.
    async fn rowwise(client: &Client, dataset: &Dataset) -> Result<Duration> {
        let sink = client.copy_in(COPIES).await.context("copy handshake failed")?;
        futures::pin_mut!(sink);
        let clock = Instant::now();
        for record in dataset.iter() {
            sink.send(Bytes::from(record.encodes().into_bytes()))
                .await
                .context("copy send failed")?;
        }
        sink.finish().await.context("copy end failed")?;
        Ok(clock.elapsed())
    }

    /// One standalone statement per record with quoted-literal values,
    /// executed over the simple-query path, result discarded. See
    /// [`Record::inserts`] for why this stays unescaped.
    async fn naive(client: &Client, dataset: &Dataset) -> Result<Duration> {
        let clock = Instant::now();
        for record in dataset.iter() {
            client
                .batch_execute(&record.inserts())
                .await
                .context("insert failed")?;
        }
        Ok(clock.elapsed())
    }

    /// One placeholder statement per record, field values bound as a
    /// separate parameter list. One statement round trip per record.
    async fn params(client: &Client, dataset: &Dataset) -> Result<Duration> {
        let clock = Instant::now();
        for record in dataset.iter() {
            client
                .execute(
                    INSERTS,
                    &[&record.id, &record.name, &record.grp, &record.ts],
                )
                .await
                .context("param insert failed")?;
        }
        Ok(clock.elapsed())
    }

    /// Parse and plan the placeholder statement once per connection, then
    /// execute the prepared statement once per record. The prepare round
    /// trip is part of the timed window.
    async fn prepared(client: &Client, dataset: &Dataset) -> Result<Duration> {
        let clock = Instant::now();
        let statement = client.prepare(INSERTS).await.context("prepare failed")?;
        for record in dataset.iter() {
            client
                .execute(
                    &statement,
                    &[&record.id, &record.name, &record.grp, &record.ts],
                )
                .await
                .context("prepared insert failed")?;
        }
        Ok(clock.elapsed())
    }
}

/// Labels as printed in the report.
impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BulkCopy => write!(f, "Big bang buffer copy"),
            Self::RowCopy => write!(f, "Incremental buffer copy"),
            Self::NaiveInsert => write!(f, "Simple insert per row"),
            Self::ParamInsert => write!(f, "Param insert per row"),
            Self::PreparedInsert => write!(f, "Prepared insert per row"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategies_enumerate_in_benchmark_order() {
        assert_eq!(
            Strategy::all(),
            &[
                Strategy::BulkCopy,
                Strategy::RowCopy,
                Strategy::NaiveInsert,
                Strategy::ParamInsert,
                Strategy::PreparedInsert,
            ][..]
        );
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(Strategy::BulkCopy.to_string(), "Big bang buffer copy");
        assert_eq!(Strategy::RowCopy.to_string(), "Incremental buffer copy");
        assert_eq!(Strategy::NaiveInsert.to_string(), "Simple insert per row");
        assert_eq!(Strategy::ParamInsert.to_string(), "Param insert per row");
        assert_eq!(
            Strategy::PreparedInsert.to_string(),
            "Prepared insert per row"
        );
    }
}
