use crate::calculator::ArithmeticCalculatorBuilder;
use crate::error::FunctionError;
use arithmex_macros::arithmex_fn;

pub fn register(builder: ArithmeticCalculatorBuilder) -> ArithmeticCalculatorBuilder {
    builder
        .register_function("pow", pow)
        .register_function("sqrt", sqrt)
        .register_function("abs", abs)
}

/// `pow(base, exponent)`
#[arithmex_fn]
pub fn pow(base: f64, exponent: f64) -> Result<f64, FunctionError> {
    Ok(base.powf(exponent))
}

/// Negative input yields NaN, like any other invalid float operation.
#[arithmex_fn]
pub fn sqrt(value: f64) -> Result<f64, FunctionError> {
    Ok(value.sqrt())
}

#[arithmex_fn]
pub fn abs(value: f64) -> Result<f64, FunctionError> {
    Ok(value.abs())
}
