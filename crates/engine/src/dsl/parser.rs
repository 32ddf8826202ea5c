use chrono::{NaiveDate, NaiveDateTime};

use crate::dsl::ast::{CmpOp, Comparison, Expr, Filter, Value};
use crate::dsl::columns::{Column, ColumnType};
use crate::dsl::lexer::{Token, TokenKind, lex};
use crate::error::ParseError;

/// Parse a filter expression into its AST.
///
/// Grammar (AND binds tighter than OR, keywords case-insensitive):
///
/// ```text
/// expr       := orExpr
/// orExpr     := andExpr ( OR andExpr )*
/// andExpr    := notExpr ( AND notExpr )*
/// notExpr    := NOT* primary
/// primary    := '(' expr ')' | column op literal
/// op         := = | != | < | <= | > | >= | LIKE
/// ```
///
/// Column names resolve against the record schema and literals are typed
/// against the column at parse time, so `size = 'big'` fails here rather
/// than producing an empty result set.
pub fn parse_filter(input: &str) -> Result<Filter, ParseError> {
    let tokens = lex(input);

    if tokens.len() == 1 {
        return Err(ParseError {
            message: "empty filter expression".to_owned(),
            token: String::new(),
            pos: 0,
        });
    }

    let mut parser = Parser::new(&tokens);
    let expr = parser.parse_or_expr()?;

    // The whole input must be one expression.
    let trailing = parser.peek_token();
    if trailing.kind != TokenKind::Eof {
        return Err(err_at("unexpected token after expression", trailing));
    }

    Ok(Filter { expr })
}

struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Parser { tokens, pos: 0 }
    }

    fn peek(&self) -> TokenKind {
        self.peek_token().kind
    }

    fn peek_token(&self) -> &Token<'a> {
        // The token stream always ends with Eof, so `pos` never runs past it.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> Token<'a> {
        let tok = self.peek_token().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        tok
    }

    fn parse_or_expr(&mut self) -> Result<Expr, ParseError> {
        let lhs = self.parse_and_expr()?;
        let mut ors = vec![lhs];

        while self.peek() == TokenKind::Or {
            self.advance();
            let rhs = self.parse_and_expr()?;
            ors.push(rhs);
        }

        if ors.len() == 1 {
            Ok(ors.pop().unwrap())
        } else {
            Ok(Expr::Or(ors))
        }
    }

    fn parse_and_expr(&mut self) -> Result<Expr, ParseError> {
        let first = self.parse_not_expr()?;
        let mut terms = vec![first];

        while self.peek() == TokenKind::And {
            self.advance();
            let next = self.parse_not_expr()?;
            terms.push(next);
        }

        if terms.len() == 1 {
            Ok(terms.pop().unwrap())
        } else {
            Ok(Expr::And(terms))
        }
    }

    fn parse_not_expr(&mut self) -> Result<Expr, ParseError> {
        let mut neg_count = 0;

        while self.peek() == TokenKind::Not {
            self.advance();
            neg_count += 1;
        }

        let mut expr = self.parse_primary()?;

        if neg_count % 2 == 1 {
            expr = Expr::Not(Box::new(expr));
        }

        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.peek() {
            TokenKind::LParen => {
                self.advance(); // '('
                let expr = self.parse_or_expr()?;
                if self.peek() != TokenKind::RParen {
                    return Err(err_at(
                        "unbalanced parentheses: expected `)`",
                        self.peek_token(),
                    ));
                }
                self.advance();
                Ok(expr)
            }
            TokenKind::Ident => self.parse_comparison(),
            _ => Err(err_at(
                "expected a comparison or parenthesized expression",
                self.peek_token(),
            )),
        }
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let col_tok = self.advance();
        let column = Column::parse(col_tok.lexeme).ok_or_else(|| {
            err_at(
                format!("unknown column `{}`", col_tok.lexeme),
                &col_tok,
            )
        })?;

        let op = match self.peek() {
            TokenKind::Eq => CmpOp::Eq,
            TokenKind::Ne => CmpOp::Ne,
            TokenKind::Lt => CmpOp::Lt,
            TokenKind::Lte => CmpOp::Le,
            TokenKind::Gt => CmpOp::Gt,
            TokenKind::Gte => CmpOp::Ge,
            TokenKind::Like => CmpOp::Like,
            _ => {
                return Err(err_at(
                    format!("expected comparison operator after column `{}`", column.name()),
                    self.peek_token(),
                ));
            }
        };
        self.advance();

        let lit_tok = self.advance();
        let value = coerce_literal(column, op, &lit_tok)?;

        Ok(Expr::Compare(Comparison { column, op, value }))
    }
}

/// Type the literal token against the column. `LIKE` patterns are always
/// strings; whether the *column* may be LIKEd is checked at evaluation time.
fn coerce_literal(column: Column, op: CmpOp, tok: &Token<'_>) -> Result<Value, ParseError> {
    if op == CmpOp::Like {
        if tok.kind != TokenKind::Str {
            return Err(err_at("LIKE requires a quoted string pattern", tok));
        }
        return Ok(Value::Str(tok.lexeme.to_owned()));
    }

    match column.column_type() {
        ColumnType::Int => match tok.kind {
            TokenKind::Number if tok.lexeme.contains('.') => {
                let f: f64 = tok.lexeme.parse().map_err(|_| {
                    err_at("malformed numeric literal", tok)
                })?;
                Ok(Value::Float(f))
            }
            TokenKind::Number => {
                let n: i64 = tok.lexeme.parse().map_err(|_| {
                    err_at("integer literal out of range", tok)
                })?;
                Ok(Value::Int(n))
            }
            _ => Err(err_at(
                format!("column `{}` expects a numeric literal", column.name()),
                tok,
            )),
        },
        ColumnType::Str => match tok.kind {
            TokenKind::Str => Ok(Value::Str(tok.lexeme.to_owned())),
            _ => Err(err_at(
                format!("column `{}` expects a quoted string literal", column.name()),
                tok,
            )),
        },
        ColumnType::Bool => match tok.kind {
            TokenKind::True => Ok(Value::Bool(true)),
            TokenKind::False => Ok(Value::Bool(false)),
            _ => Err(err_at(
                format!("column `{}` expects true or false", column.name()),
                tok,
            )),
        },
        ColumnType::Time => match tok.kind {
            TokenKind::Str => {
                let secs = parse_time_literal(tok.lexeme).ok_or_else(|| {
                    err_at(
                        "expected `YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS`",
                        tok,
                    )
                })?;
                Ok(Value::Time(secs))
            }
            // Bare integers are unix seconds.
            TokenKind::Number if !tok.lexeme.contains('.') => {
                let n: i64 = tok.lexeme.parse().map_err(|_| {
                    err_at("integer literal out of range", tok)
                })?;
                Ok(Value::Time(n))
            }
            _ => Err(err_at(
                format!(
                    "column `{}` expects a quoted timestamp or unix seconds",
                    column.name()
                ),
                tok,
            )),
        },
    }
}

/// Quoted timestamp literal to unix seconds, UTC. Date-only means midnight.
fn parse_time_literal(s: &str) -> Option<i64> {
    let s = s.trim();

    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc().timestamp());
    }

    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    let dt = date.and_hms_opt(0, 0, 0)?;
    Some(dt.and_utc().timestamp())
}

fn err_at(message: impl Into<String>, tok: &Token<'_>) -> ParseError {
    ParseError {
        message: message.into(),
        token: tok.lexeme.to_owned(),
        pos: tok.span.start,
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
