use super::*;
use anyhow::Result;
use std::time::Duration;

/// Trial runner and reporter.
///
/// One cycle is connect → create table → timed load → verify → disconnect.
/// Cycles run strictly sequentially, one connection at a time; nothing is
/// shared across them except the read-only dataset. Dropping the client at
/// the end of a cycle closes its session and with it the scratch table.
pub struct Harness {
    config: Config,
    dataset: Dataset,
}

impl Harness {
    pub fn new(config: Config) -> Self {
        let dataset = Dataset::synthetic(&config);
        Self { config, dataset }
    }

    /// Run the full benchmark: the header line, then one labeled mean per
    /// (strategy, transport) pair in fixed order: every strategy over the
    /// unix socket, then every strategy over tcpip. Any cycle failure
    /// propagates immediately; no partial average is ever printed.
    pub async fn run(&self) -> Result<()> {
        println!(
            "Average insert time of {} rows in {} trials",
            self.config.rows, self.config.trials
        );
        for transport in Transport::all() {
            for strategy in Strategy::all() {
                let avg = self.series(*transport, *strategy).await?;
                println!("{}", Self::report(avg, *strategy, *transport));
            }
        }
        Ok(())
    }

    /// One measurement series: TRIALS full cycles, averaged.
    async fn series(&self, transport: Transport, strategy: Strategy) -> Result<f64> {
        log::info!(
            "measuring {} over {} ({} trials)",
            strategy,
            transport,
            self.config.trials
        );
        let mut samples = Vec::with_capacity(self.config.trials);
        for _ in 0..self.config.trials {
            samples.push(self.cycle(transport, strategy).await?);
        }
        Ok(Self::mean(&samples))
    }

    /// One full cycle. The returned duration covers only the strategy's
    /// timed window; setup, verification, and teardown are excluded.
    async fn cycle(&self, transport: Transport, strategy: Strategy) -> Result<Duration> {
        let client = transport.open(&self.config).await?;
        client.stage().await?;
        let elapsed = strategy.load(&client, &self.dataset).await?;
        client.check(self.config.rows, self.config.fields).await?;
        Ok(elapsed)
    }

    /// Arithmetic mean of the samples, in seconds.
    fn mean(samples: &[Duration]) -> f64 {
        samples.iter().map(Duration::as_secs_f64).sum::<f64>() / samples.len() as f64
    }

    /// Fixed-precision report line.
    fn report(avg: f64, strategy: Strategy, transport: Transport) -> String {
        format!("{:.4}: {}, {}", avg, strategy, transport)
    }
}
