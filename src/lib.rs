pub mod calculator;
pub mod error;
pub mod functions;
pub mod parser;
pub mod registry;

pub use calculator::{ArithmeticCalculator, ArithmeticCalculatorBuilder};
pub use error::{CalcError, FunctionError};
pub use registry::FunctionRegistry;

/// Evaluates `expression` with the bundled functions registered.
///
/// Builds a fresh calculator on every call; keep an [`ArithmeticCalculator`]
/// around when evaluating many expressions.
pub fn calculate(expression: &str) -> Result<f64, CalcError> {
    ArithmeticCalculatorBuilder::new()
        .with_default_functions()
        .build()
        .calculate(expression)
}
