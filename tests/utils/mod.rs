#![allow(dead_code)]

use std::{
    io::Write,
    process::{Command, Output, Stdio},
    sync::Once,
};

static INIT_LOGGER: Once = Once::new();

pub fn init() {
    INIT_LOGGER.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Runs the built binary with `stdin` piped in and waits for it.
pub fn run_binary(stdin: &[u8]) -> Output {
    run_binary_with_args(&[], stdin)
}

pub fn run_binary_with_args(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_sentinel"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("sentinel binary can be spawned");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin)
        .expect("stdin can be written");

    child.wait_with_output().expect("sentinel binary terminates")
}
