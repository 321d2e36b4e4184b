pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OperationCommand};

pub use config::{cli::ConsoleSink, GreetingSettings, OutputFormat};
pub use core::{
    arithmetic::Calculator, clock::SystemClock, engine::SessionEngine, greeter::GreeterSession,
};
pub use domain::model::{Evaluation, Operation};
pub use utils::error::{CalcError, Result};
