use arithmex_rs::ArithmeticCalculatorBuilder;

fn main() {
    pretty_env_logger::init();

    let calculator = ArithmeticCalculatorBuilder::new()
        .with_default_functions()
        .cache_capacity(64)
        .build();

    let expressions: Vec<String> = (1..=10)
        .map(|i| format!("avg({}, {}) * {} - max({}, 7)", i, i * 2, i, i))
        .collect();

    for (i, result) in calculator.calculate_batch(&expressions).iter().enumerate() {
        println!("Result {} ({}): {:?}", i, expressions[i], result);
    }
}
