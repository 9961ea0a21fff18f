/// Records loaded per trial.
pub const ROWS: usize = 1000;
/// Trials averaged per (strategy, transport) pair.
pub const TRIALS: usize = 100;
/// Columns in the scratch table.
pub const FIELDS: usize = 4;

/// Fixed benchmark parameters and connection target.
///
/// One immutable instance is built at startup and threaded through the
/// harness. Nothing is read from files, flags, or the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Records loaded per trial.
    pub rows: usize,
    /// Trials averaged per (strategy, transport) pair.
    pub trials: usize,
    /// Columns in the scratch table.
    pub fields: usize,
    /// Role to authenticate as.
    pub user: &'static str,
    /// Database to connect to.
    pub dbname: &'static str,
    /// Directory holding the server's unix socket.
    pub socket: &'static str,
    /// Loopback address for the tcpip transport.
    pub host: &'static str,
    /// Port for the tcpip transport.
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: ROWS,
            trials: TRIALS,
            fields: FIELDS,
            user: "postgres",
            dbname: "postgres",
            socket: "/var/run/postgresql",
            host: "127.0.0.1",
            port: 5432,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_shape() {
        let config = Config::default();
        assert_eq!(config.rows, 1000);
        assert_eq!(config.trials, 100);
        assert_eq!(config.fields, 4);
    }

    #[test]
    fn targets_are_fixed() {
        let config = Config::default();
        assert_eq!(config.user, "postgres");
        assert_eq!(config.dbname, "postgres");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5432);
        assert!(config.socket.starts_with('/'));
    }
}
