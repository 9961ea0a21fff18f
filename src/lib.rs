//! Benchmarks of PostgreSQL data-loading strategies.
//!
//! Measures the wall-clock cost of five ways to move the same fixed dataset
//! into a session-scoped table: one-shot COPY, row-by-row COPY, and three
//! flavors of per-row INSERT. Each strategy runs over a unix socket and over
//! tcpip loopback, many trials apiece, and the mean is printed to stdout.
//!
//! ## Modules
//!
//! - [`Config`] — fixed benchmark parameters and connection target
//! - [`Dataset`] — the synthetic rows and their tab-separated encoding
//! - [`Transport`] — the two connection providers (unix socket, tcpip)
//! - [`Stage`] / [`Check`] — per-trial table setup and post-load verification
//! - [`Strategy`] — the five measured load techniques
//! - [`Harness`] — trial runner and reporter

mod check;
mod config;
mod record;
mod schema;
mod stage;
mod strategy;
mod transport;
mod trial;

pub use check::*;
pub use config::*;
pub use record::*;
pub use schema::*;
pub use stage::*;
pub use strategy::*;
pub use transport::*;
pub use trial::*;

/// Initialize terminal logging. Everything goes to stderr so that stdout
/// carries only the benchmark report.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}

/// Register a ctrl-c handler that terminates the process immediately.
/// A benchmark run is all-or-nothing; there is no graceful path.
pub fn halt() {
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.expect("ctrl-c handler");
        println!();
        log::warn!("interrupt received, exiting immediately");
        std::process::exit(1);
    });
}
