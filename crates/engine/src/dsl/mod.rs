mod ast;
mod columns;
mod lexer;
mod parser;

pub use ast::*;
pub use columns::{Column, ColumnType};
pub use lexer::{Token, TokenKind, lex};
pub use parser::parse_filter;
