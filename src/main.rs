//! Главный исполняемый файл sqlscan

use anyhow::Context;
use clap::Parser;
use sqlscan::cli::Cli;
use sqlscan::common::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config().context("failed to load configuration")?;
    init_logging(&config.logging).context("failed to initialize logging")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = cli.execute(&config, &mut out) {
        // Лексические ошибки печатаются без цепочки контекста
        if err.position().is_some() {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
        return Err(err.into());
    }
    Ok(())
}
