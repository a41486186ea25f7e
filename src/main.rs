mod app;
mod cli;
mod color;
mod config;
mod db;
mod error;
mod event;
mod logging;
mod store;
mod tui;
mod types;
mod ui;

use std::rc::Rc;

use anyhow::Result;
use clap::Parser;

use config::Config;
use db::KeyValueStore;
use logging::Fallback;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    let config = Config::from_cli(&cli_opts);

    let fallback = if cli_opts.command.is_some() {
        Fallback::Stderr
    } else {
        Fallback::Silent
    };
    logging::init(config.log_path.as_deref(), config.debug, fallback);
    tracing::debug!(db = %config.db_path, "opening database");

    let conn = db::init(&config.db_path)?;
    let storage: Rc<dyn KeyValueStore> = Rc::new(conn);

    if let Some(command) = cli_opts.command {
        return cli::run(command, storage, &mut std::io::stdout());
    }

    let mut app = app::App::new(storage);
    app.timers.arm_ticker(config.tick_period);

    let mut guard = tui::TerminalGuard::enter()?;
    let result = event::run(&mut app, &mut guard.terminal);

    app.shutdown();
    guard.restore()?;

    result
}
