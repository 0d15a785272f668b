#![doc = include_str!("../README.md")]
#![no_std]
#![deny(clippy::mod_module_files)]

extern crate alloc;

pub mod bed;
pub mod classifier;
pub mod lexer;
pub mod parser;
pub mod schema;

// Re-export main types
pub use classifier::Classifier;
pub use lexer::{Lexer, LexerError, Token, TokenKind};
pub use parser::{ParseError, Parser, parse};
pub use schema::{BaseType, FieldDefinition, FieldType, TableDefinition};
