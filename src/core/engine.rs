use crate::core::Session;
use crate::utils::error::Result;

/// Drives a session through its fixed stage order. Returns the timestamp
/// the session announced.
pub struct SessionEngine<S: Session> {
    session: S,
}

impl<S: Session> SessionEngine<S> {
    pub fn new(session: S) -> Self {
        Self { session }
    }

    /// Hands the session back, e.g. to inspect a buffered sink after a run.
    pub fn into_session(self) -> S {
        self.session
    }

    pub fn run(&mut self) -> Result<String> {
        tracing::debug!("Starting greeting session");

        self.session.greet()?;
        let timestamp = self.session.announce_time()?;
        self.session.farewell()?;

        tracing::debug!("Session complete at {}", timestamp);
        Ok(timestamp)
    }
}
