use std::{iter::Peekable, ops::Range, str::CharIndices};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // Column names and other bare words
    Ident,
    // Integer or float literal (digit run with at most one '.')
    Number,
    // Quoted string literal (single or double quotes)
    Str,
    LParen,
    RParen,
    And,
    Or,
    Not,
    Like,
    True,
    False,
    // Equal
    Eq,
    // Not equal
    Ne,
    // Greater than
    Gt,
    // Greater than or equal
    Gte,
    // Less than
    Lt,
    // Less than or equal
    Lte,
    // Stray punctuation; always rejected by the parser
    Unknown,
    Eof,
}

/// Single token with lexeme and span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub lexeme: &'a str,
    pub span: Range<usize>,
}

pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    fn advance_until(&mut self, end: usize) {
        while let Some(&(i, _)) = self.chars.peek() {
            if i >= end {
                break;
            }
            self.chars.next();
        }
    }

    /// Scan a word starting at `start` with `first_char`: a keyword, a
    /// column name, or a numeric literal.
    fn scan_word(&mut self, start: usize, first_char: char) -> (TokenKind, usize) {
        let mut end = start + first_char.len_utf8();

        // Consume until we hit a delimiter
        while let Some(&(i, c)) = self.chars.peek() {
            if is_delimiter(c) {
                break;
            }
            end = i + c.len_utf8();
            self.chars.next();
        }

        let lexeme = &self.input[start..end];

        // Numbers are digit runs with at most one '.'; anything else is a
        // keyword or identifier.
        let has_digit = lexeme.chars().any(|c| c.is_ascii_digit());
        let all_numeric = lexeme.chars().all(|c| c.is_ascii_digit() || c == '.');
        let dots = lexeme.chars().filter(|&c| c == '.').count();

        let kind = if has_digit && all_numeric && dots <= 1 {
            TokenKind::Number
        } else {
            classify_keyword(lexeme)
        };

        (kind, end)
    }

    /// Scan a quoted string. The lexeme excludes the quotes; the span
    /// includes them. No escaping: the next matching quote terminates.
    fn scan_string(&mut self, start: usize, quote: char) -> Token<'a> {
        let content_start = start + quote.len_utf8();
        let remainder = &self.input[content_start..];

        if let Some(rel_end) = remainder.find(quote) {
            let content_end = content_start + rel_end;
            let end = content_end + quote.len_utf8();
            self.advance_until(end);
            Token {
                kind: TokenKind::Str,
                lexeme: &self.input[content_start..content_end],
                span: start..end,
            }
        } else {
            // Unterminated: consume to end of input.
            let end = self.input.len();
            self.advance_until(end);
            Token {
                kind: TokenKind::Str,
                lexeme: &self.input[content_start..end],
                span: start..end,
            }
        }
    }

    /// Return the next token from the input.
    pub fn next_token(&mut self) -> Token<'a> {
        loop {
            let (start, c) = match self.chars.next() {
                Some(pair) => pair,
                None => {
                    let len = self.input.len();
                    return Token {
                        kind: TokenKind::Eof,
                        lexeme: "",
                        span: len..len,
                    };
                }
            };

            // Skip whitespace.
            if c.is_whitespace() {
                continue;
            }

            match c {
                '(' | ')' | '=' => {
                    let kind = match c {
                        '(' => TokenKind::LParen,
                        ')' => TokenKind::RParen,
                        '=' => TokenKind::Eq,
                        _ => unreachable!(),
                    };
                    // All of these are ASCII single-byte characters.
                    let end = start + 1;
                    return Token {
                        kind,
                        lexeme: &self.input[start..end],
                        span: start..end,
                    };
                }
                '>' => {
                    let mut end = start + 1;
                    let mut kind = TokenKind::Gt;
                    if let Some(&(_, '=')) = self.chars.peek() {
                        self.chars.next();
                        end += 1; // '=' is ASCII
                        kind = TokenKind::Gte;
                    }
                    return Token {
                        kind,
                        lexeme: &self.input[start..end],
                        span: start..end,
                    };
                }
                '<' => {
                    let mut end = start + 1;
                    let mut kind = TokenKind::Lt;
                    if let Some(&(_, '=')) = self.chars.peek() {
                        self.chars.next();
                        end += 1; // '=' is ASCII
                        kind = TokenKind::Lte;
                    }
                    return Token {
                        kind,
                        lexeme: &self.input[start..end],
                        span: start..end,
                    };
                }
                '!' => {
                    // "!=" is the only valid use of '!'.
                    if let Some(&(_, '=')) = self.chars.peek() {
                        self.chars.next();
                        let end = start + 2;
                        return Token {
                            kind: TokenKind::Ne,
                            lexeme: &self.input[start..end],
                            span: start..end,
                        };
                    }
                    let end = start + 1;
                    return Token {
                        kind: TokenKind::Unknown,
                        lexeme: &self.input[start..end],
                        span: start..end,
                    };
                }
                '"' | '\'' => {
                    return self.scan_string(start, c);
                }
                _ => {
                    // Keyword, column name, or number.
                    let (kind, end) = self.scan_word(start, c);
                    return Token {
                        kind,
                        lexeme: &self.input[start..end],
                        span: start..end,
                    };
                }
            }
        }
    }
}

#[inline]
fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '(' | ')' | '>' | '<' | '=' | '!' | '"' | '\'')
}

#[inline]
fn classify_keyword(lexeme: &str) -> TokenKind {
    match lexeme.len() {
        2 if lexeme.eq_ignore_ascii_case("or") => TokenKind::Or,
        3 if lexeme.eq_ignore_ascii_case("and") => TokenKind::And,
        3 if lexeme.eq_ignore_ascii_case("not") => TokenKind::Not,
        4 if lexeme.eq_ignore_ascii_case("like") => TokenKind::Like,
        4 if lexeme.eq_ignore_ascii_case("true") => TokenKind::True,
        5 if lexeme.eq_ignore_ascii_case("false") => TokenKind::False,
        _ => TokenKind::Ident,
    }
}

pub fn lex(input: &str) -> Vec<Token<'_>> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::with_capacity(16);

    loop {
        let token = lexer.next_token();
        let is_eof = token.kind == TokenKind::Eof;
        tokens.push(token);
        if is_eof {
            break;
        }
    }

    tokens
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
