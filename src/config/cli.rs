use crate::core::Sink;
use crate::utils::error::Result;
use std::io::{self, Write};

/// Stdout-backed sink. stdout carries only the session lines; everything
/// else the binaries emit goes to stderr.
#[derive(Debug, Default, Clone)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for ConsoleSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", line)?;
        Ok(())
    }
}
