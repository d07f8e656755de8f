use crate::error::CalcError;
use crate::parser::{TokenCursor, TokenKind};
use crate::registry::FunctionRegistry;
use log::trace;

/// Recursive-descent evaluator working directly on a token cursor.
///
/// Grammar, outermost rule first:
///
/// ```text
/// Expression := AddSub? EOF
/// AddSub     := MulDiv (('+' | '-') MulDiv)*
/// MulDiv     := Unary (('*' | '/') Unary)*
/// Unary      := Function | '-' Unary | Number | '(' Expression ')'
/// Function   := Name '(' (Expression (',' Expression)*)? ')'
/// ```
///
/// Every rule returns its computed value; no syntax tree is built. A rule that
/// reads a token it does not handle steps the cursor back and returns, leaving
/// the token to the rule above it.
pub struct SyntaxEvaluator<'a> {
    registry: &'a FunctionRegistry,
}

impl<'a> SyntaxEvaluator<'a> {
    pub fn new(registry: &'a FunctionRegistry) -> Self {
        Self { registry }
    }

    /// Evaluates the whole token sequence. Input that is only EOF yields `0.0`.
    pub fn evaluate(&self, cursor: &mut TokenCursor<'_>) -> Result<f64, CalcError> {
        let value = self.expression(cursor)?;
        if cursor.advance()?.kind() != TokenKind::Eof {
            return Err(unexpected_token(cursor));
        }
        Ok(value)
    }

    // Leaves an EOF token unconsumed for the caller to check.
    fn expression(&self, cursor: &mut TokenCursor<'_>) -> Result<f64, CalcError> {
        let kind = cursor.advance()?.kind();
        cursor.retreat();
        if kind == TokenKind::Eof {
            trace!("Empty expression at position {}", cursor.position());
            return Ok(0.0);
        }
        self.add_sub(cursor)
    }

    fn add_sub(&self, cursor: &mut TokenCursor<'_>) -> Result<f64, CalcError> {
        let mut value = self.mul_div(cursor)?;
        loop {
            match cursor.advance()?.kind() {
                TokenKind::Plus => value += self.mul_div(cursor)?,
                TokenKind::Minus => value -= self.mul_div(cursor)?,
                _ => {
                    cursor.retreat();
                    return Ok(value);
                }
            }
        }
    }

    fn mul_div(&self, cursor: &mut TokenCursor<'_>) -> Result<f64, CalcError> {
        let mut value = self.unary(cursor)?;
        loop {
            match cursor.advance()?.kind() {
                TokenKind::Multiply => value *= self.unary(cursor)?,
                TokenKind::Divide => value /= self.unary(cursor)?,
                _ => {
                    cursor.retreat();
                    return Ok(value);
                }
            }
        }
    }

    fn unary(&self, cursor: &mut TokenCursor<'_>) -> Result<f64, CalcError> {
        let token = cursor.advance()?;
        match token.kind() {
            TokenKind::Function => {
                cursor.retreat();
                self.function(cursor)
            }
            TokenKind::Minus => Ok(-self.unary(cursor)?),
            TokenKind::Number => token
                .text()
                .parse::<f64>()
                .map_err(|_| CalcError::InvalidNumber(token.text().to_string())),
            TokenKind::LeftParen => {
                let value = self.expression(cursor)?;
                expect(cursor, TokenKind::RightParen)?;
                Ok(value)
            }
            TokenKind::RightParen
            | TokenKind::Plus
            | TokenKind::Multiply
            | TokenKind::Divide
            | TokenKind::Comma
            | TokenKind::Eof => Err(unexpected_token(cursor)),
        }
    }

    fn function(&self, cursor: &mut TokenCursor<'_>) -> Result<f64, CalcError> {
        let name = cursor.advance()?.text();
        expect(cursor, TokenKind::LeftParen)?;

        let mut args = Vec::new();
        if cursor.advance()?.kind() != TokenKind::RightParen {
            cursor.retreat();
            loop {
                args.push(self.expression(cursor)?);
                match cursor.advance()?.kind() {
                    TokenKind::Comma => continue,
                    TokenKind::RightParen => break,
                    _ => return Err(unexpected_token(cursor)),
                }
            }
        }

        trace!("Calling {} with {} argument(s)", name, args.len());
        self.registry.invoke(name, &args)
    }
}

fn expect(cursor: &mut TokenCursor<'_>, kind: TokenKind) -> Result<(), CalcError> {
    if cursor.advance()?.kind() == kind {
        Ok(())
    } else {
        Err(unexpected_token(cursor))
    }
}

fn unexpected_token(cursor: &TokenCursor<'_>) -> CalcError {
    CalcError::UnexpectedToken {
        position: cursor.position(),
    }
}
