use crate::calculator::ArithmeticCalculatorBuilder;
use crate::error::FunctionError;

pub fn register(builder: ArithmeticCalculatorBuilder) -> ArithmeticCalculatorBuilder {
    builder
        .register_function("min", min)
        .register_function("max", max)
        .register_function("sum", sum)
        .register_function("avg", avg)
}

/// Smallest argument, e.g. `min(1, 2, 3)`.
pub fn min(args: &[f64]) -> Result<f64, FunctionError> {
    args.iter()
        .copied()
        .reduce(f64::min)
        .ok_or(FunctionError::EmptyArguments)
}

/// Largest argument, e.g. `max(1, 2, 3)`.
pub fn max(args: &[f64]) -> Result<f64, FunctionError> {
    args.iter()
        .copied()
        .reduce(f64::max)
        .ok_or(FunctionError::EmptyArguments)
}

/// Sum of all arguments; `sum()` is `0`.
pub fn sum(args: &[f64]) -> Result<f64, FunctionError> {
    // f64's `Sum` starts from -0.0
    Ok(args.iter().fold(0.0, |acc, x| acc + x))
}

/// Arithmetic mean.
pub fn avg(args: &[f64]) -> Result<f64, FunctionError> {
    if args.is_empty() {
        return Err(FunctionError::EmptyArguments);
    }
    Ok(sum(args)? / args.len() as f64)
}
