use super::*;
use anyhow::Context;
use anyhow::Result;
use tokio_postgres::Client;
use tokio_postgres::NoTls;

/// The two ways to reach the same server.
///
/// Both authenticate as the fixed role against the fixed database; only
/// the transport differs, so a result delta between them is pure transport
/// overhead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    UnixSocket,
    Tcp,
}

impl Transport {
    /// Benchmark order: local socket first, then loopback tcp.
    pub const fn all() -> &'static [Self] {
        &[Self::UnixSocket, Self::Tcp]
    }

    /// Connection parameters for this transport.
    pub fn targets(&self, config: &Config) -> tokio_postgres::Config {
        let mut pg = tokio_postgres::Config::new();
        pg.user(config.user).dbname(config.dbname);
        match self {
            Self::UnixSocket => pg.host(config.socket),
            Self::Tcp => pg.host(config.host).port(config.port),
        };
        pg
    }

    /// Open one live connection and spawn its driver task. No retry and no
    /// partial-degradation path: a failure here is fatal to the whole run.
    pub async fn open(&self, config: &Config) -> Result<Client> {
        let (client, connection) = self
            .targets(config)
            .connect(NoTls)
            .await
            .context("connection to db failed")?;
        tokio::spawn(connection);
        Ok(client)
    }
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnixSocket => write!(f, "unix socket"),
            Self::Tcp => write!(f, "tcpip"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_postgres::config::Host;

    #[test]
    fn unix_socket_targets_socket_dir() {
        let config = Config::default();
        let pg = Transport::UnixSocket.targets(&config);
        assert_eq!(pg.get_user(), Some("postgres"));
        assert_eq!(pg.get_dbname(), Some("postgres"));
        assert!(matches!(pg.get_hosts(), [Host::Unix(_)]));
    }

    #[test]
    fn tcp_targets_loopback() {
        let config = Config::default();
        let pg = Transport::Tcp.targets(&config);
        assert!(matches!(pg.get_hosts(), [Host::Tcp(h)] if h == "127.0.0.1"));
        assert_eq!(pg.get_ports(), [5432]);
    }

    #[test]
    fn transports_enumerate_in_benchmark_order() {
        assert_eq!(
            Transport::all(),
            &[Transport::UnixSocket, Transport::Tcp][..]
        );
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(Transport::UnixSocket.to_string(), "unix socket");
        assert_eq!(Transport::Tcp.to_string(), "tcpip");
    }
}
