//! Load-strategy benchmark binary.
//!
//! Runs every (strategy, transport) pair sequentially and prints one
//! labeled mean per pair. Exits 0 only after all ten series complete;
//! any failure anywhere is diagnosed on stderr and exits non-zero.

use pgload::*;

#[tokio::main]
async fn main() {
    log();
    halt();
    let harness = Harness::new(Config::default());
    if let Err(e) = harness.run().await {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
