use crate::error::CalcError;
use crate::parser::Token;
use log::debug;

/// Forward/backward view over a token sequence.
///
/// `position` counts the tokens consumed so far, which is also the number
/// reported in syntax errors.
#[derive(Debug)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Returns the token under the cursor and steps past it.
    pub fn advance(&mut self) -> Result<&'a Token, CalcError> {
        let Some(token) = self.tokens.get(self.position) else {
            debug!(
                "Advanced past the end of a {}-token sequence",
                self.len()
            );
            return Err(CalcError::CursorOutOfRange {
                position: self.position,
            });
        };
        self.position += 1;
        Ok(token)
    }

    /// Un-consumes the token returned by the last `advance`.
    pub fn retreat(&mut self) {
        debug_assert!(self.position > 0, "retreat without a prior advance");
        self.position = self.position.saturating_sub(1);
    }

    pub fn position(&self) -> usize {
        self.position
    }

    fn len(&self) -> usize {
        self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TokenKind;

    fn tokens() -> Vec<Token> {
        vec![
            Token::number("2"),
            Token::symbol(TokenKind::Plus),
            Token::number("3"),
            Token::eof(),
        ]
    }

    #[test]
    fn test_advance_walks_in_order() {
        let tokens = tokens();
        let mut cursor = TokenCursor::new(&tokens);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.advance().unwrap(), &Token::number("2"));
        assert_eq!(cursor.advance().unwrap().kind(), TokenKind::Plus);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_retreat_replays_token() {
        let tokens = tokens();
        let mut cursor = TokenCursor::new(&tokens);
        cursor.advance().unwrap();
        let plus = cursor.advance().unwrap();
        cursor.retreat();
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.advance().unwrap(), plus);
    }

    #[test]
    fn test_advance_past_end_fails() {
        let tokens = tokens();
        let mut cursor = TokenCursor::new(&tokens);
        for _ in 0..cursor.len() {
            cursor.advance().unwrap();
        }
        assert_eq!(
            cursor.advance(),
            Err(CalcError::CursorOutOfRange { position: 4 })
        );
        assert_eq!(cursor.position(), 4);
    }
}
