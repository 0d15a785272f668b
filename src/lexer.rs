//! autoSql lexer for tokenizing input.

use alloc::string::String;

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The byte position in the input where this token starts.
    pub pos: usize,
}

/// The different kinds of tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// `table` keyword opening a table declaration.
    Table,

    /// An identifier (table name, field name, or base type tag).
    Identifier(String),
    /// Double-quoted string literal (description or field comment).
    StringLiteral(String),
    /// Unsigned integer literal (fixed array size).
    IntegerLiteral(usize),

    /// Left parenthesis
    LParen,
    /// Right parenthesis
    RParen,
    /// Left bracket
    LBracket,
    /// Right bracket
    RBracket,
    /// Semicolon
    Semicolon,

    /// End of input
    Eof,
}

/// autoSql lexer that produces tokens from input.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    peeked: Option<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            peeked: None,
        }
    }

    /// Get the current byte position in the input.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Peek at the next token without consuming it.
    ///
    /// # Errors
    ///
    /// Returns an error if the next token cannot be lexed.
    pub fn peek(&mut self) -> Result<&Token, LexerError> {
        if self.peeked.is_none() {
            self.peeked = Some(self.next_token()?);
        }
        Ok(self.peeked.as_ref().unwrap())
    }

    /// Consume and return the next token.
    ///
    /// # Errors
    ///
    /// Returns an error if the next token cannot be lexed.
    pub fn next(&mut self) -> Result<Token, LexerError> {
        if let Some(token) = self.peeked.take() {
            return Ok(token);
        }
        self.next_token()
    }

    /// Skip whitespace, including newlines of any convention.
    fn skip_whitespace(&mut self) {
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn next_token(&mut self) -> Result<Token, LexerError> {
        self.skip_whitespace();

        let start_pos = self.pos;
        let bytes = self.input.as_bytes();

        if self.pos >= bytes.len() {
            return Ok(Token {
                kind: TokenKind::Eof,
                pos: start_pos,
            });
        }

        let b = bytes[self.pos];

        let kind = match b {
            b'(' => {
                self.pos += 1;
                TokenKind::LParen
            }
            b')' => {
                self.pos += 1;
                TokenKind::RParen
            }
            b'[' => {
                self.pos += 1;
                TokenKind::LBracket
            }
            b']' => {
                self.pos += 1;
                TokenKind::RBracket
            }
            b';' => {
                self.pos += 1;
                TokenKind::Semicolon
            }
            b'"' => return self.read_string(start_pos),
            _ if b.is_ascii_digit() => return self.read_number(start_pos),
            _ if is_ident_start(b) => return Ok(self.read_identifier(start_pos)),
            _ => {
                return Err(LexerError::UnexpectedChar {
                    char: b as char,
                    pos: start_pos,
                });
            }
        };

        Ok(Token {
            kind,
            pos: start_pos,
        })
    }

    /// Read a string literal. autoSql strings are atomic: there is no escape
    /// handling, so the first `"` after the opening quote terminates.
    fn read_string(&mut self, start_pos: usize) -> Result<Token, LexerError> {
        let bytes = self.input.as_bytes();
        self.pos += 1; // Skip the opening quote

        let content_start = self.pos;
        while self.pos < bytes.len() {
            if bytes[self.pos] == b'"' {
                let value = String::from(&self.input[content_start..self.pos]);
                self.pos += 1; // Skip the closing quote
                return Ok(Token {
                    kind: TokenKind::StringLiteral(value),
                    pos: start_pos,
                });
            }
            self.pos += 1;
        }

        Err(LexerError::UnterminatedString { pos: start_pos })
    }

    fn read_number(&mut self, start_pos: usize) -> Result<Token, LexerError> {
        let bytes = self.input.as_bytes();
        let num_start = self.pos;

        while self.pos < bytes.len() && bytes[self.pos].is_ascii_digit() {
            self.pos += 1;
        }

        let num_str = &self.input[num_start..self.pos];
        match num_str.parse::<usize>() {
            Ok(v) => Ok(Token {
                kind: TokenKind::IntegerLiteral(v),
                pos: start_pos,
            }),
            Err(_) => Err(LexerError::InvalidNumber {
                value: num_str.into(),
                pos: start_pos,
            }),
        }
    }

    fn read_identifier(&mut self, start_pos: usize) -> Token {
        let bytes = self.input.as_bytes();
        let ident_start = self.pos;

        while self.pos < bytes.len() && is_ident_cont(bytes[self.pos]) {
            self.pos += 1;
        }

        let ident = &self.input[ident_start..self.pos];
        // autoSql keywords are lowercase; case matters.
        let kind = match ident {
            "table" => TokenKind::Table,
            _ => TokenKind::Identifier(ident.into()),
        };

        Token {
            kind,
            pos: start_pos,
        }
    }
}

/// Check if a byte can start an identifier.
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Check if a byte can continue an identifier.
fn is_ident_cont(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Errors that can occur during lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexerError {
    /// Unexpected character in input.
    #[error("Unexpected character '{char}' at position {pos}")]
    UnexpectedChar {
        /// The unexpected character.
        char: char,
        /// Position in input.
        pos: usize,
    },
    /// Unterminated string literal.
    #[error("Unterminated string literal starting at position {pos}")]
    UnterminatedString {
        /// Position where string started.
        pos: usize,
    },
    /// Invalid number format.
    #[error("Invalid number '{value}' at position {pos}")]
    InvalidNumber {
        /// The invalid number string.
        value: String,
        /// Position in input.
        pos: usize,
    },
}
