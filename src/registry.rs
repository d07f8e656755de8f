use crate::error::{CalcError, FunctionError};
use log::trace;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub type Function = Arc<dyn Fn(&[f64]) -> Result<f64, FunctionError> + Send + Sync>;

/// Name-keyed table of the functions an expression may call.
#[derive(Clone, Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, Function>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Registers a function, replacing any previous one with the same name.
    pub fn register<F>(&mut self, name: &str, function: F)
    where
        F: Fn(&[f64]) -> Result<f64, FunctionError> + Send + Sync + 'static,
    {
        self.functions.insert(name.to_string(), Arc::new(function));
    }

    pub fn exists(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Calls the function registered under `name` with the given arguments.
    ///
    /// Errors raised by the function itself are returned unchanged inside
    /// [`CalcError::Function`].
    pub fn invoke(&self, name: &str, args: &[f64]) -> Result<f64, CalcError> {
        let function = self
            .functions
            .get(name)
            .ok_or_else(|| CalcError::UnknownFunction(name.to_string()))?;

        trace!("Invoking {}({:?})", name, args);
        Ok(function(args)?)
    }

    /// Registered names in lexicographic order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("functions", &self.names())
            .finish()
    }
}
