use std::fmt;

mod cursor;
mod evaluator;
mod tokenizer;

pub use cursor::TokenCursor;
pub use evaluator::SyntaxEvaluator;
pub use tokenizer::ExpressionTokenizer;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    Plus,
    Minus,
    Multiply,
    Divide,
    Number,
    Function,
    Comma,
    Eof,
}

impl TokenKind {
    /// Literal text of the kinds that always spell the same way.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            TokenKind::LeftParen => Some("("),
            TokenKind::RightParen => Some(")"),
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Multiply => Some("*"),
            TokenKind::Divide => Some("/"),
            TokenKind::Comma => Some(","),
            TokenKind::Eof => Some(""),
            TokenKind::Number | TokenKind::Function => None,
        }
    }
}

impl TryFrom<char> for TokenKind {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '(' => Ok(TokenKind::LeftParen),
            ')' => Ok(TokenKind::RightParen),
            '+' => Ok(TokenKind::Plus),
            '-' => Ok(TokenKind::Minus),
            '*' => Ok(TokenKind::Multiply),
            '/' => Ok(TokenKind::Divide),
            ',' => Ok(TokenKind::Comma),
            _ => Err(value),
        }
    }
}

/// A single lexical unit: its kind plus the literal text it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Token for a fixed-spelling kind, e.g. `Token::symbol(TokenKind::Plus)` is `+`.
    ///
    /// Number and function kinds have no fixed spelling and get empty text.
    pub fn symbol(kind: TokenKind) -> Self {
        Self::new(kind, kind.symbol().unwrap_or_default())
    }

    pub fn number(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Number, text)
    }

    pub fn function(name: impl Into<String>) -> Self {
        Self::new(TokenKind::Function, name)
    }

    pub fn eof() -> Self {
        Self::symbol(TokenKind::Eof)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "<eof>"),
            _ => write!(f, "{}", self.text),
        }
    }
}
