use crate::{
    buffer::CharBuffer,
    finding::{inspect, Finding},
    input, printer,
};
use log::{debug, warn};
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub value: i32,
    pub buffer: CharBuffer,
    pub finding: Option<Finding>,
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("failed to print buffer contents")]
    Output(#[source] io::Error),
}

/// Runs prompt, read, fill and print once over the given handles.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn run(&mut self) -> Result<Report, SessionError> {
        if let Err(e) = input::prompt(&mut self.output) {
            warn!("failed to write prompt ({}), reading anyway", e);
        }

        let value = input::read_integer(&mut self.input);
        let buffer = CharBuffer::fill(value);

        debug!("buffer bytes: {:02x?}", buffer.as_bytes());

        let finding = inspect(&buffer);
        if let Some(finding) = &finding {
            warn!("input {} narrows to a sentinel\n{}", value, finding);
        }

        printer::print_contents(&mut self.output, &buffer).map_err(SessionError::Output)?;

        Ok(Report {
            value,
            buffer,
            finding,
        })
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

pub fn run<R: BufRead, W: Write>(input: R, output: W) -> Result<Report, SessionError> {
    Session::new(input, output).run()
}
