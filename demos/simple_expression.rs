use arithmex_rs::ArithmeticCalculatorBuilder;
use log::debug;

fn main() {
    pretty_env_logger::init();

    let calculator = ArithmeticCalculatorBuilder::new()
        .with_default_functions()
        .build();
    debug!("registry: {:?}", calculator.registry());

    let expressions = [
        "122 + 3 -2* (2 * 5 + 2) * 4",
        "5-(-2*3)",
        "min(3 + 2 * 5, 9)",
        "sqrt(pow(3, 2) + pow(4, 2))",
        "",
        "(2 + 3 * 4",
        "2 + rand(256)",
    ];

    for expression in expressions {
        match calculator.calculate(expression) {
            Ok(result) => println!("{:?} = {}", expression, result),
            Err(err) => println!("{:?}: error: {}", expression, err),
        }
    }
}
