use crate::core::{Evaluation, Operation};
use crate::utils::error::{CalcError, Result};

/// Stateless evaluator for the six supported operations. Inputs follow IEEE
/// 754 semantics; only division by zero and negative square roots are
/// rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    pub fn divide(&self, a: f64, b: f64) -> Result<f64> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero { dividend: a });
        }
        Ok(a / b)
    }

    pub fn power(&self, base: f64, exponent: f64) -> f64 {
        base.powf(exponent)
    }

    pub fn square_root(&self, value: f64) -> Result<f64> {
        if value < 0.0 {
            return Err(CalcError::InvalidArgument {
                operation: Operation::SquareRoot.name().to_string(),
                reason: format!("cannot take the square root of {}", value),
            });
        }
        Ok(value.sqrt())
    }

    /// Dispatches an operation over an operand slice, checking arity.
    pub fn evaluate(&self, operation: Operation, operands: &[f64]) -> Result<Evaluation> {
        if operands.len() != operation.arity() {
            return Err(CalcError::InvalidArgument {
                operation: operation.name().to_string(),
                reason: format!(
                    "expected {} operand(s), got {}",
                    operation.arity(),
                    operands.len()
                ),
            });
        }

        let result = match operation {
            Operation::Add => self.add(operands[0], operands[1]),
            Operation::Subtract => self.subtract(operands[0], operands[1]),
            Operation::Multiply => self.multiply(operands[0], operands[1]),
            Operation::Divide => self.divide(operands[0], operands[1])?,
            Operation::Power => self.power(operands[0], operands[1]),
            Operation::SquareRoot => self.square_root(operands[0])?,
        };

        Ok(Evaluation {
            operation,
            operands: operands.to_vec(),
            result,
        })
    }
}
