//! Runtime configuration resolved from CLI flags, environment and platform defaults.
use std::path::PathBuf;
use std::time::Duration;

use crate::{cli::Cli, db, store::TICK_PERIOD};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub db_path: String,
    /// `None` when there is no writable data dir.
    pub log_path: Option<PathBuf>,
    pub tick_period: Duration,
    pub debug: bool,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        let db_path = cli.db.clone().unwrap_or_else(db::default_db_path);
        let log_path = db::data_dir().map(|dir| dir.join("tickdown.log"));
        Self {
            db_path,
            log_path,
            tick_period: TICK_PERIOD,
            debug: cli.debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn db_flag_overrides_default_path() {
        let cli = Cli::try_parse_from(["tickdown", "--db", "/tmp/x.db", "--debug"]).unwrap();
        let config = Config::from_cli(&cli);
        assert_eq!(config.db_path, "/tmp/x.db");
        assert!(config.debug);
        assert_eq!(config.tick_period, Duration::from_secs(1));
    }
}
