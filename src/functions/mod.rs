pub mod aggregate;
pub mod math;

use crate::calculator::ArithmeticCalculatorBuilder;

pub fn register_functions(builder: ArithmeticCalculatorBuilder) -> ArithmeticCalculatorBuilder {
    let builder = aggregate::register(builder);
    math::register(builder)
}
