use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    SquareRoot,
}

impl Operation {
    /// Number of operands the operation consumes.
    pub fn arity(&self) -> usize {
        match self {
            Operation::SquareRoot => 1,
            _ => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::SquareRoot => "square_root",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One completed arithmetic operation, as rendered by the JSON output format.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub operation: Operation,
    pub operands: Vec<f64>,
    pub result: f64,
}
