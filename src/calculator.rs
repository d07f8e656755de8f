use crate::error::{CalcError, FunctionError};
use crate::functions::register_functions;
use crate::parser::{ExpressionTokenizer, SyntaxEvaluator, Token, TokenCursor};
use crate::registry::FunctionRegistry;
use log::debug;
use lru::LruCache;
use rayon::prelude::*;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

/// Collects functions and settings for an [`ArithmeticCalculator`].
///
/// ```
/// use arithmex_rs::ArithmeticCalculatorBuilder;
///
/// let calculator = ArithmeticCalculatorBuilder::new()
///     .register_function("pow", |args| Ok(args[0].powf(args[1])))
///     .build();
/// assert_eq!(calculator.calculate("pow(3, 2)").unwrap(), 9.0);
/// ```
#[derive(Debug, Default)]
pub struct ArithmeticCalculatorBuilder {
    registry: FunctionRegistry,
    cache_capacity: usize,
}

impl ArithmeticCalculatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `function` callable as `name(...)`, replacing an earlier registration.
    ///
    /// Functions should report bad input through [`FunctionError`]; the error
    /// reaches the caller of `calculate` unchanged.
    pub fn register_function<F>(mut self, name: &str, function: F) -> Self
    where
        F: Fn(&[f64]) -> Result<f64, FunctionError> + Send + Sync + 'static,
    {
        self.registry.register(name, function);
        self
    }

    /// Registers the bundled functions (`min`, `max`, `sum`, `avg`, `pow`, `sqrt`, `abs`).
    pub fn with_default_functions(self) -> Self {
        register_functions(self)
    }

    /// Keeps the token sequences of up to `capacity` recent expressions. `0` disables caching.
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn build(self) -> ArithmeticCalculator {
        debug!(
            "Building calculator with functions {:?}, cache capacity {}",
            self.registry.names(),
            self.cache_capacity
        );
        ArithmeticCalculator {
            registry: self.registry,
            cache: NonZeroUsize::new(self.cache_capacity).map(|cap| Mutex::new(LruCache::new(cap))),
        }
    }
}

/// Evaluates arithmetic expressions against a fixed set of functions.
pub struct ArithmeticCalculator {
    registry: FunctionRegistry,
    cache: Option<Mutex<LruCache<String, Arc<Vec<Token>>>>>,
}

impl ArithmeticCalculator {
    pub fn builder() -> ArithmeticCalculatorBuilder {
        ArithmeticCalculatorBuilder::new()
    }

    /// Evaluates an expression with `+ - * /`, parentheses, unary minus and
    /// registered functions. Empty or blank input evaluates to `0.0`.
    pub fn calculate(&self, expression: &str) -> Result<f64, CalcError> {
        let tokens = self.tokens_for(expression)?;
        let mut cursor = TokenCursor::new(&tokens);
        let result = SyntaxEvaluator::new(&self.registry).evaluate(&mut cursor);
        debug!("Calculated {:?}: {:?}", expression, result);
        result
    }

    /// Evaluates every expression in parallel; results keep the input order.
    pub fn calculate_batch<S>(&self, expressions: &[S]) -> Vec<Result<f64, CalcError>>
    where
        S: AsRef<str> + Sync,
    {
        expressions
            .par_iter()
            .map(|expression| self.calculate(expression.as_ref()))
            .collect()
    }

    /// The token sequence `calculate` would evaluate for `expression`.
    pub fn tokenize(&self, expression: &str) -> Result<Vec<Token>, CalcError> {
        ExpressionTokenizer::new(&self.registry).tokenize(expression)
    }

    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    fn tokens_for(&self, expression: &str) -> Result<Arc<Vec<Token>>, CalcError> {
        let Some(cache) = &self.cache else {
            return Ok(Arc::new(self.tokenize(expression)?));
        };

        if let Ok(mut cache) = cache.lock() {
            if let Some(tokens) = cache.get(expression) {
                debug!("Token cache hit for {:?}", expression);
                return Ok(Arc::clone(tokens));
            }
        }

        debug!("Token cache miss for {:?}", expression);
        let tokens = Arc::new(self.tokenize(expression)?);
        if let Ok(mut cache) = cache.lock() {
            cache.put(expression.to_string(), Arc::clone(&tokens));
        }
        Ok(tokens)
    }

    #[cfg(test)]
    fn cached_len(&self) -> usize {
        self.cache
            .as_ref()
            .and_then(|cache| cache.lock().ok().map(|cache| cache.len()))
            .unwrap_or(0)
    }
}
