use thiserror::Error;

/// Failure raised by a registered function while computing its result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FunctionError {
    #[error("Empty args list")]
    EmptyArguments,

    #[error("Function {name} expects {expected} arguments, got {actual}")]
    ArgumentCount {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("{0}")]
    Custom(String),
}

impl From<String> for FunctionError {
    fn from(value: String) -> Self {
        FunctionError::Custom(value)
    }
}

impl From<&str> for FunctionError {
    fn from(value: &str) -> Self {
        FunctionError::Custom(value.to_string())
    }
}

/// Everything that can abort a `calculate` call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Unexpected character: {0}")]
    UnexpectedCharacter(char),

    #[error("Function not found: {0}")]
    UnknownFunction(String),

    #[error("Unexpected token at position: {position}")]
    UnexpectedToken { position: usize },

    #[error("Invalid number literal: {0}")]
    InvalidNumber(String),

    #[error("Token cursor out of range at position: {position}")]
    CursorOutOfRange { position: usize },

    #[error(transparent)]
    Function(#[from] FunctionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        assert_eq!(
            CalcError::UnexpectedCharacter('&').to_string(),
            "Unexpected character: &"
        );
        assert_eq!(
            CalcError::UnknownFunction("rand".to_string()).to_string(),
            "Function not found: rand"
        );
        assert_eq!(
            CalcError::UnexpectedToken { position: 7 }.to_string(),
            "Unexpected token at position: 7"
        );
    }

    #[test]
    fn test_function_error_is_passed_through_unchanged() {
        let err: CalcError = FunctionError::EmptyArguments.into();
        assert_eq!(err.to_string(), "Empty args list");
        assert_eq!(err, CalcError::Function(FunctionError::EmptyArguments));
    }
}
