use anyhow::{Context, Result};
use log::{error, info, LevelFilter};
use sentinel::cli::{args, expect_arg};
use std::{io, str::FromStr};

fn main() {
    // exit status is 0 for any input
    if let Err(e) = run() {
        error!("{:#}", e);
    }
}

fn run() -> Result<()> {
    let matches = args().get_matches();

    let level = LevelFilter::from_str(expect_arg(&matches, "verbose"))
        .expect("logging level has been validated by the CLI parser");

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();

    let report = sentinel::run(stdin.lock(), stdout.lock()).context("session failed")?;

    info!(
        "value {} stored as {:#04x}, {} byte(s) printed",
        report.value,
        report.buffer[0],
        report.buffer.as_c_str().len()
    );

    Ok(())
}
