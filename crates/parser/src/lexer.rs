use ast::{AssignOp, BinaryOp};
use global_common::{BytePos, Span};
use swc_atoms::JsWord;

use crate::error::{Error, SyntaxError};
use crate::token::{Keyword, Token, TokenAndSpan};

/// Tracks just enough of the previous token to disambiguate `/` between
/// division and the start of a regex literal.
#[derive(Copy, Clone, PartialEq)]
enum PrevToken {
    /// Start of input, or a token after which an expression must follow.
    ExprStart,
    /// A token that can end an expression (identifier, literal, `)`, `]`,
    /// `this`, postfix `++`/`--`).
    ExprEnd,
}

pub struct Lexer<'a> {
    src: &'a str,
    /// Byte index into `src`.
    pos: usize,
    /// Offset of `src`'s first byte in the source map address space.
    base: u32,
    prev: PrevToken,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str, start_pos: BytePos) -> Self {
        Lexer {
            src,
            pos: 0,
            base: start_pos.0,
            prev: PrevToken::ExprStart,
        }
    }

    fn cur(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_at(&self, n: usize) -> Option<char> {
        self.src[self.pos..].chars().nth(n)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.cur()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, c: char) -> bool {
        if self.cur() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn byte_pos(&self) -> BytePos {
        BytePos(self.base + self.pos as u32)
    }

    fn span_from(&self, start: usize) -> Span {
        Span::new(BytePos(self.base + start as u32), self.byte_pos())
    }

    fn error(&self, start: usize, kind: SyntaxError) -> Error {
        Error::new(self.span_from(start), kind)
    }

    /// Skips whitespace and comments; returns whether a line terminator was
    /// crossed.
    fn skip_space(&mut self) -> Result<bool, Error> {
        let mut line_break = false;
        loop {
            match self.cur() {
                Some(c) if c.is_whitespace() => {
                    if c == '\n' || c == '\r' || c == '\u{2028}' || c == '\u{2029}' {
                        line_break = true;
                    }
                    self.bump();
                }
                Some('/') if self.peek_at(1) == Some('/') => {
                    while let Some(c) = self.cur() {
                        if c == '\n' {
                            break;
                        }
                        self.bump();
                    }
                }
                Some('/') if self.peek_at(1) == Some('*') => {
                    let start = self.pos;
                    self.bump();
                    self.bump();
                    let mut closed = false;
                    while let Some(c) = self.bump() {
                        if c == '\n' {
                            line_break = true;
                        }
                        if c == '*' && self.eat('/') {
                            closed = true;
                            break;
                        }
                    }
                    if !closed {
                        return Err(self.error(start, SyntaxError::UnterminatedComment));
                    }
                }
                _ => return Ok(line_break),
            }
        }
    }

    pub fn next_token(&mut self) -> Result<TokenAndSpan, Error> {
        let had_line_break = self.skip_space()?;
        let start = self.pos;

        let c = match self.cur() {
            Some(c) => c,
            None => {
                return Ok(TokenAndSpan {
                    token: Token::Eof,
                    span: self.span_from(start),
                    had_line_break,
                })
            }
        };

        let token = if is_ident_start(c) {
            self.read_word()
        } else if c.is_ascii_digit() || (c == '.' && matches!(self.peek_at(1), Some(d) if d.is_ascii_digit()))
        {
            self.read_number()?
        } else if c == '"' || c == '\'' {
            self.read_string()?
        } else {
            self.read_punct()?
        };

        self.prev = match token {
            Token::Ident(_)
            | Token::Str(_)
            | Token::Num(_)
            | Token::Regex(..)
            | Token::RParen
            | Token::RBracket
            | Token::Keyword(Keyword::This)
            | Token::Keyword(Keyword::True)
            | Token::Keyword(Keyword::False)
            | Token::Keyword(Keyword::Null)
            | Token::PlusPlus
            | Token::MinusMinus => PrevToken::ExprEnd,
            _ => PrevToken::ExprStart,
        };

        Ok(TokenAndSpan {
            token,
            span: self.span_from(start),
            had_line_break,
        })
    }

    fn read_word(&mut self) -> Token {
        let start = self.pos;
        while let Some(c) = self.cur() {
            if is_ident_part(c) {
                self.bump();
            } else {
                break;
            }
        }
        let word = &self.src[start..self.pos];
        match Keyword::from_str(word) {
            Some(k) => Token::Keyword(k),
            None => Token::Ident(JsWord::from(word)),
        }
    }

    fn read_number(&mut self) -> Result<Token, Error> {
        let start = self.pos;
        if self.cur() == Some('0') && matches!(self.peek_at(1), Some('x') | Some('X')) {
            self.bump();
            self.bump();
            let digits_start = self.pos;
            while matches!(self.cur(), Some(c) if c.is_ascii_hexdigit()) {
                self.bump();
            }
            if self.pos == digits_start {
                return Err(self.error(start, SyntaxError::InvalidNumber));
            }
            let value = u64::from_str_radix(&self.src[digits_start..self.pos], 16)
                .map_err(|_| self.error(start, SyntaxError::InvalidNumber))?;
            return Ok(Token::Num(value as f64));
        }

        while matches!(self.cur(), Some(c) if c.is_ascii_digit()) {
            self.bump();
        }
        if self.cur() == Some('.') {
            self.bump();
            while matches!(self.cur(), Some(c) if c.is_ascii_digit()) {
                self.bump();
            }
        }
        if matches!(self.cur(), Some('e') | Some('E')) {
            self.bump();
            if matches!(self.cur(), Some('+') | Some('-')) {
                self.bump();
            }
            let exp_start = self.pos;
            while matches!(self.cur(), Some(c) if c.is_ascii_digit()) {
                self.bump();
            }
            if self.pos == exp_start {
                return Err(self.error(start, SyntaxError::InvalidNumber));
            }
        }

        // Normalize forms f64's parser rejects: trailing dot, leading dot.
        let raw = &self.src[start..self.pos];
        let mut normalized = String::new();
        let text = if raw.starts_with('.') {
            normalized.push('0');
            normalized.push_str(raw);
            &normalized
        } else if raw.ends_with('.') {
            &raw[..raw.len() - 1]
        } else {
            raw
        };
        text.parse::<f64>()
            .map(Token::Num)
            .map_err(|_| self.error(start, SyntaxError::InvalidNumber))
    }

    fn read_string(&mut self) -> Result<Token, Error> {
        let start = self.pos;
        let quote = self.bump().unwrap();
        let mut value = String::new();
        loop {
            let c = match self.bump() {
                Some(c) => c,
                None => return Err(self.error(start, SyntaxError::UnterminatedString)),
            };
            if c == quote {
                break;
            }
            match c {
                '\\' => {
                    let esc = match self.bump() {
                        Some(e) => e,
                        None => return Err(self.error(start, SyntaxError::UnterminatedString)),
                    };
                    match esc {
                        'n' => value.push('\n'),
                        't' => value.push('\t'),
                        'r' => value.push('\r'),
                        'b' => value.push('\u{8}'),
                        'f' => value.push('\u{c}'),
                        'v' => value.push('\u{b}'),
                        '0' => value.push('\0'),
                        'x' => value.push(self.read_hex_escape(start, 2)?),
                        'u' => value.push(self.read_hex_escape(start, 4)?),
                        '\n' => {}
                        '\r' => {
                            self.eat('\n');
                        }
                        other => value.push(other),
                    }
                }
                '\n' => return Err(self.error(start, SyntaxError::UnterminatedString)),
                other => value.push(other),
            }
        }
        Ok(Token::Str(JsWord::from(&*value)))
    }

    fn read_hex_escape(&mut self, start: usize, len: usize) -> Result<char, Error> {
        let mut v: u32 = 0;
        for _ in 0..len {
            let d = self
                .bump()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| self.error(start, SyntaxError::UnterminatedString))?;
            v = v * 16 + d;
        }
        char::from_u32(v).ok_or_else(|| self.error(start, SyntaxError::UnterminatedString))
    }

    fn read_regex(&mut self) -> Result<Token, Error> {
        let start = self.pos;
        self.bump(); // '/'
        let body_start = self.pos;
        let mut in_class = false;
        loop {
            let c = match self.cur() {
                Some(c) => c,
                None => return Err(self.error(start, SyntaxError::UnterminatedRegex)),
            };
            match c {
                '\\' => {
                    self.bump();
                    if self.bump().is_none() {
                        return Err(self.error(start, SyntaxError::UnterminatedRegex));
                    }
                    continue;
                }
                '[' => in_class = true,
                ']' => in_class = false,
                '/' if !in_class => break,
                '\n' => return Err(self.error(start, SyntaxError::UnterminatedRegex)),
                _ => {}
            }
            self.bump();
        }
        let exp = JsWord::from(&self.src[body_start..self.pos]);
        self.bump(); // closing '/'
        let flags_start = self.pos;
        while matches!(self.cur(), Some(c) if is_ident_part(c)) {
            self.bump();
        }
        let flags = JsWord::from(&self.src[flags_start..self.pos]);
        Ok(Token::Regex(exp, flags))
    }

    fn read_punct(&mut self) -> Result<Token, Error> {
        let start = self.pos;
        let c = self.bump().unwrap();
        let token = match c {
            '(' => Token::LParen,
            ')' => Token::RParen,
            '{' => Token::LBrace,
            '}' => Token::RBrace,
            '[' => Token::LBracket,
            ']' => Token::RBracket,
            ';' => Token::Semi,
            ',' => Token::Comma,
            ':' => Token::Colon,
            '?' => Token::QuestionMark,
            '.' => Token::Dot,
            '~' => Token::Tilde,
            '!' => {
                if self.eat('=') {
                    if self.eat('=') {
                        Token::BinOp(BinaryOp::NotEqEq)
                    } else {
                        Token::BinOp(BinaryOp::NotEq)
                    }
                } else {
                    Token::Bang
                }
            }
            '=' => {
                if self.eat('=') {
                    if self.eat('=') {
                        Token::BinOp(BinaryOp::EqEqEq)
                    } else {
                        Token::BinOp(BinaryOp::EqEq)
                    }
                } else {
                    Token::AssignOp(AssignOp::Assign)
                }
            }
            '+' => {
                if self.eat('+') {
                    Token::PlusPlus
                } else if self.eat('=') {
                    Token::AssignOp(AssignOp::AddAssign)
                } else {
                    Token::BinOp(BinaryOp::Add)
                }
            }
            '-' => {
                if self.eat('-') {
                    Token::MinusMinus
                } else if self.eat('=') {
                    Token::AssignOp(AssignOp::SubAssign)
                } else {
                    Token::BinOp(BinaryOp::Sub)
                }
            }
            '*' => {
                if self.eat('=') {
                    Token::AssignOp(AssignOp::MulAssign)
                } else {
                    Token::BinOp(BinaryOp::Mul)
                }
            }
            '%' => {
                if self.eat('=') {
                    Token::AssignOp(AssignOp::ModAssign)
                } else {
                    Token::BinOp(BinaryOp::Mod)
                }
            }
            '/' => {
                if self.prev == PrevToken::ExprStart {
                    self.pos = start;
                    return self.read_regex();
                }
                if self.eat('=') {
                    Token::AssignOp(AssignOp::DivAssign)
                } else {
                    Token::BinOp(BinaryOp::Div)
                }
            }
            '<' => {
                if self.eat('<') {
                    if self.eat('=') {
                        Token::AssignOp(AssignOp::LShiftAssign)
                    } else {
                        Token::BinOp(BinaryOp::LShift)
                    }
                } else if self.eat('=') {
                    Token::BinOp(BinaryOp::LtEq)
                } else {
                    Token::BinOp(BinaryOp::Lt)
                }
            }
            '>' => {
                if self.eat('>') {
                    if self.eat('>') {
                        if self.eat('=') {
                            Token::AssignOp(AssignOp::ZeroFillRShiftAssign)
                        } else {
                            Token::BinOp(BinaryOp::ZeroFillRShift)
                        }
                    } else if self.eat('=') {
                        Token::AssignOp(AssignOp::RShiftAssign)
                    } else {
                        Token::BinOp(BinaryOp::RShift)
                    }
                } else if self.eat('=') {
                    Token::BinOp(BinaryOp::GtEq)
                } else {
                    Token::BinOp(BinaryOp::Gt)
                }
            }
            '&' => {
                if self.eat('&') {
                    Token::BinOp(BinaryOp::LogicalAnd)
                } else if self.eat('=') {
                    Token::AssignOp(AssignOp::BitAndAssign)
                } else {
                    Token::BinOp(BinaryOp::BitAnd)
                }
            }
            '|' => {
                if self.eat('|') {
                    Token::BinOp(BinaryOp::LogicalOr)
                } else if self.eat('=') {
                    Token::AssignOp(AssignOp::BitOrAssign)
                } else {
                    Token::BinOp(BinaryOp::BitOr)
                }
            }
            '^' => {
                if self.eat('=') {
                    Token::AssignOp(AssignOp::BitXorAssign)
                } else {
                    Token::BinOp(BinaryOp::BitXor)
                }
            }
            other => {
                return Err(self.error(
                    start,
                    SyntaxError::UnexpectedToken {
                        got: other.to_string(),
                    },
                ))
            }
        };
        Ok(token)
    }
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c == '$' || c.is_ascii_alphabetic() || (!c.is_ascii() && c.is_alphabetic())
}

fn is_ident_part(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}
