use crate::utils::error::Result;
use chrono::NaiveTime;

/// Wall-clock source. The session reads time through this seam so tests can
/// inject a fixed instant.
pub trait Clock: Send + Sync {
    fn local_time(&self) -> NaiveTime;
}

/// Destination for session output lines.
pub trait Sink: Send {
    fn write_line(&mut self, line: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn greet_name(&self) -> &str;
    fn farewell_name(&self) -> &str;
    fn time_format(&self) -> &str;
}

/// The three stages of a greeting session, driven in fixed order by the
/// engine: greet, announce the current time, farewell.
pub trait Session {
    fn greet(&mut self) -> Result<()>;
    fn announce_time(&mut self) -> Result<String>;
    fn farewell(&mut self) -> Result<()>;
}
