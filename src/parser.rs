//! autoSql parser producing [`TableDefinition`] values.

use alloc::string::String;
use alloc::vec::Vec;

use crate::lexer::{Lexer, LexerError, TokenKind};
use crate::schema::{BaseType, FieldDefinition, FieldType, TableDefinition};

/// Parser errors.
///
/// Parsing is fail-fast: the first error encountered is surfaced and no
/// partial table is returned. Every variant carries the byte position of the
/// offending token for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Lexer error.
    #[error("Lexer error: {0}")]
    Lexer(#[from] LexerError),
    /// The `table` keyword, table identifier or quoted description is
    /// missing or unparsable.
    #[error("Malformed header at position {pos}: expected {expected}, found {found:?}")]
    MalformedHeader {
        /// What was expected.
        expected: String,
        /// What was found.
        found: TokenKind,
        /// Position in input.
        pos: usize,
    },
    /// The field-list block is not properly opened and closed.
    #[error("Unbalanced parentheses around the field list at position {pos}")]
    UnbalancedParentheses {
        /// Position in input.
        pos: usize,
    },
    /// A field statement is missing its `;`, its trailing quoted comment,
    /// or has an unparsable type specification.
    #[error("Malformed field at position {pos}: expected {expected}, found {found:?}")]
    MalformedField {
        /// What was expected.
        expected: String,
        /// What was found.
        found: TokenKind,
        /// Position in input.
        pos: usize,
    },
    /// The parenthesized block contains zero field declarations.
    #[error("Empty field list in table declaration at position {pos}")]
    EmptyFieldList {
        /// Position of the opening parenthesis.
        pos: usize,
    },
    /// Input continues past the closing parenthesis; a source holds exactly
    /// one table declaration.
    #[error("Trailing input after table declaration at position {pos}: {found:?}")]
    TrailingInput {
        /// What was found.
        found: TokenKind,
        /// Position in input.
        pos: usize,
    },
}

/// Parse a complete autoSql source into a [`TableDefinition`].
///
/// Convenience wrapper around [`Parser::parse`].
///
/// # Errors
///
/// Returns a [`ParseError`] if the source is not a single well-formed
/// autoSql table declaration.
pub fn parse(source: &str) -> Result<TableDefinition, ParseError> {
    Parser::new(source).parse()
}

/// autoSql parser.
///
/// The grammar is LL(1) once string literals are lexed as atomic tokens, so
/// a single left-to-right scan with one token of lookahead suffices.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
        }
    }

    /// Parse the input as a single table declaration.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the input is not a single well-formed
    /// autoSql table declaration.
    pub fn parse(&mut self) -> Result<TableDefinition, ParseError> {
        let name = self.parse_header()?;
        let description = self.header_string()?;

        let open = self.lexer.next()?;
        if open.kind != TokenKind::LParen {
            return Err(ParseError::UnbalancedParentheses { pos: open.pos });
        }

        let mut fields = Vec::new();
        loop {
            let token = self.lexer.peek()?;
            match token.kind {
                TokenKind::RParen => {
                    self.lexer.next()?;
                    break;
                }
                TokenKind::Eof => {
                    return Err(ParseError::UnbalancedParentheses { pos: token.pos });
                }
                _ => fields.push(self.parse_field()?),
            }
        }

        if fields.is_empty() {
            return Err(ParseError::EmptyFieldList { pos: open.pos });
        }

        let token = self.lexer.next()?;
        if token.kind != TokenKind::Eof {
            return Err(ParseError::TrailingInput {
                found: token.kind,
                pos: token.pos,
            });
        }

        Ok(TableDefinition {
            name,
            description,
            fields,
        })
    }

    /// Parse the `table <identifier>` part of the header.
    fn parse_header(&mut self) -> Result<String, ParseError> {
        let token = self.lexer.next()?;
        if token.kind != TokenKind::Table {
            return Err(ParseError::MalformedHeader {
                expected: "the `table` keyword".into(),
                found: token.kind,
                pos: token.pos,
            });
        }

        let token = self.lexer.next()?;
        match token.kind {
            TokenKind::Identifier(name) => Ok(name),
            other => Err(ParseError::MalformedHeader {
                expected: "a table name".into(),
                found: other,
                pos: token.pos,
            }),
        }
    }

    /// Parse the quoted table description.
    fn header_string(&mut self) -> Result<String, ParseError> {
        let token = self.lexer.next()?;
        match token.kind {
            TokenKind::StringLiteral(desc) => Ok(desc),
            other => Err(ParseError::MalformedHeader {
                expected: "a quoted table description".into(),
                found: other,
                pos: token.pos,
            }),
        }
    }

    /// Parse one field declaration: `type[size] name; "comment"` with an
    /// optional trailing `;` after the comment.
    fn parse_field(&mut self) -> Result<FieldDefinition, ParseError> {
        let token = self.lexer.next()?;
        let base = match token.kind {
            // Unrecognized tags pass through as opaque base types.
            TokenKind::Identifier(tag) => BaseType::from(tag.as_str()),
            other => {
                return Err(ParseError::MalformedField {
                    expected: "a field type tag".into(),
                    found: other,
                    pos: token.pos,
                });
            }
        };

        let size = if self.lexer.peek()?.kind == TokenKind::LBracket {
            self.lexer.next()?;
            let token = self.lexer.next()?;
            let size = match token.kind {
                TokenKind::IntegerLiteral(size) => size,
                other => {
                    return Err(ParseError::MalformedField {
                        expected: "an integer array size".into(),
                        found: other,
                        pos: token.pos,
                    });
                }
            };
            let close = self.lexer.next()?;
            if close.kind != TokenKind::RBracket {
                return Err(ParseError::MalformedField {
                    expected: "`]` closing the array size".into(),
                    found: close.kind,
                    pos: close.pos,
                });
            }
            Some(size)
        } else {
            None
        };

        let token = self.lexer.next()?;
        let name = match token.kind {
            TokenKind::Identifier(name) => name,
            other => {
                return Err(ParseError::MalformedField {
                    expected: "a field name".into(),
                    found: other,
                    pos: token.pos,
                });
            }
        };

        let token = self.lexer.next()?;
        if token.kind != TokenKind::Semicolon {
            return Err(ParseError::MalformedField {
                expected: "`;` after the field name".into(),
                found: token.kind,
                pos: token.pos,
            });
        }

        let token = self.lexer.next()?;
        let comment = match token.kind {
            TokenKind::StringLiteral(comment) => comment,
            other => {
                return Err(ParseError::MalformedField {
                    expected: "a quoted field comment".into(),
                    found: other,
                    pos: token.pos,
                });
            }
        };

        // The trailing `;` after a comment is optional: the broader autoSql
        // corpus omits it, some sources carry it.
        if self.lexer.peek()?.kind == TokenKind::Semicolon {
            self.lexer.next()?;
        }

        Ok(FieldDefinition {
            field_type: FieldType { base, size },
            name,
            comment,
        })
    }
}
