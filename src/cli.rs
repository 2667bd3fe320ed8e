use clap::{command, Arg, ArgMatches, Command};

pub const LOGGING_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub fn expect_arg<'a>(m: &'a ArgMatches, arg: &str) -> &'a str {
    m.get_one::<String>(arg)
        .map(String::as_str)
        .unwrap_or_else(|| panic!("argument \"{}\" has to be set in CLI at all times", arg))
}

pub fn args() -> Command {
    command!().arg(
        Arg::new("verbose")
            .short('v')
            .long("verbose")
            .help("configure logging level to use")
            .value_name("LEVEL")
            .value_parser(LOGGING_LEVELS)
            .default_value(LOGGING_LEVELS[4]),
    )
}
