use crate::core::{Clock, ConfigProvider, Session, Sink};
use crate::utils::error::{CalcError, Result};
use std::fmt::Write as _;

/// Greeting session over injected config, clock, and output ports.
pub struct GreeterSession<C, K, S> {
    config: C,
    clock: K,
    sink: S,
}

impl<C, K, S> GreeterSession<C, K, S>
where
    C: ConfigProvider,
    K: Clock,
    S: Sink,
{
    pub fn new(config: C, clock: K, sink: S) -> Self {
        Self {
            config,
            clock,
            sink,
        }
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn render_time(&self) -> Result<String> {
        let now = self.clock.local_time();
        let mut rendered = String::new();
        // chrono reports bad specifiers through fmt::Error; mapping it here
        // keeps an unvalidated format string from panicking the session
        write!(rendered, "{}", now.format(self.config.time_format())).map_err(|_| {
            CalcError::TimeFormatError {
                message: format!("invalid format string '{}'", self.config.time_format()),
            }
        })?;
        Ok(rendered)
    }
}

impl<C, K, S> Session for GreeterSession<C, K, S>
where
    C: ConfigProvider,
    K: Clock,
    S: Sink,
{
    fn greet(&mut self) -> Result<()> {
        let line = format!("Hello, {}!", self.config.greet_name());
        self.sink.write_line(&line)
    }

    fn announce_time(&mut self) -> Result<String> {
        let timestamp = self.render_time()?;
        self.sink.write_line(&timestamp)?;
        Ok(timestamp)
    }

    fn farewell(&mut self) -> Result<()> {
        let line = format!("Goodbye, {}!", self.config.farewell_name());
        self.sink.write_line(&line)
    }
}
