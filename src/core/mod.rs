pub mod arithmetic;
pub mod clock;
pub mod engine;
pub mod greeter;

pub use crate::domain::model::{Evaluation, Operation};
pub use crate::domain::ports::{Clock, ConfigProvider, Session, Sink};
pub use crate::utils::error::Result;
