use crate::error::CalcError;
use crate::parser::{Token, TokenKind};
use crate::registry::FunctionRegistry;
use log::trace;
use std::iter::Peekable;
use std::str::Chars;

/// Splits an expression into tokens, checking function names against a registry.
pub struct ExpressionTokenizer<'a> {
    registry: &'a FunctionRegistry,
}

impl<'a> ExpressionTokenizer<'a> {
    pub fn new(registry: &'a FunctionRegistry) -> Self {
        Self { registry }
    }

    /// Scans `input` into a token sequence that always ends with exactly one EOF token.
    ///
    /// Whitespace is insignificant anywhere in the input, so `"1 2"` reads as `12`.
    pub fn tokenize(&self, input: &str) -> Result<Vec<Token>, CalcError> {
        let expression: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        let mut chars = expression.chars().peekable();
        let mut tokens = Vec::new();

        while let Some(&current) = chars.peek() {
            if current.is_ascii_digit() {
                tokens.push(Token::number(read_while(&mut chars, |c| c.is_ascii_digit())));
            } else if current.is_alphabetic() {
                tokens.push(self.read_function(&mut chars)?);
            } else {
                let kind = TokenKind::try_from(current).map_err(CalcError::UnexpectedCharacter)?;
                tokens.push(Token::symbol(kind));
                chars.next();
            }
        }
        tokens.push(Token::eof());

        trace!(
            "Tokenized {:?} into [{}]",
            input,
            tokens.iter().map(Token::to_string).collect::<Vec<_>>().join(" ")
        );
        Ok(tokens)
    }

    fn read_function(&self, chars: &mut Peekable<Chars<'_>>) -> Result<Token, CalcError> {
        let name = read_while(chars, char::is_alphabetic);
        if self.registry.exists(&name) {
            Ok(Token::function(name))
        } else {
            Err(CalcError::UnknownFunction(name))
        }
    }
}

/// Consumes the longest run of characters matching `predicate`.
fn read_while(chars: &mut Peekable<Chars<'_>>, predicate: impl Fn(char) -> bool) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(|&c| predicate(c)) {
        run.push(c);
    }
    run
}
