use arithmex_macros::arithmex_fn;
use arithmex_rs::{ArithmeticCalculatorBuilder, FunctionError};

#[arithmex_fn]
fn hypot(a: f64, b: f64) -> Result<f64, FunctionError> {
    Ok(a.hypot(b))
}

fn clamp(args: &[f64]) -> Result<f64, FunctionError> {
    match args {
        [value, low, high] if low <= high => Ok(value.clamp(*low, *high)),
        [_, _, _] => Err(FunctionError::Custom("clamp: low must not exceed high".to_string())),
        _ => Err(FunctionError::ArgumentCount {
            name: "clamp".to_string(),
            expected: 3,
            actual: args.len(),
        }),
    }
}

fn main() {
    pretty_env_logger::init();

    let calculator = ArithmeticCalculatorBuilder::new()
        .register_function("hypot", hypot)
        .register_function("clamp", clamp)
        .register_function("half", |args| match args {
            [value] => Ok(value / 2.0),
            _ => Err("half takes one argument".into()),
        })
        .build();

    for expression in ["hypot(3, 4)", "clamp(15, 0, 10) + half(5)", "clamp(1, 10, 0)", "hypot(1)"] {
        match calculator.calculate(expression) {
            Ok(result) => println!("{} = {}", expression, result),
            Err(err) => println!("{}: error: {}", expression, err),
        }
    }
}
