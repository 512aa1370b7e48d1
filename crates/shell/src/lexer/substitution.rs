// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dollar dispatch: variables, `${...}`, `$(...)`, and `$((...))` capture.

use super::{ScanError, Scanner};
use crate::token::{self, Span, Token, TokenKind};

impl Scanner<'_> {
    /// Lex a `$`-introduced construct.
    ///
    /// Called when peek() has confirmed the next char is `$`.
    pub(super) fn scan_dollar(&mut self, start: usize) -> Token {
        self.chars.next(); // consume $

        match self.peek_char() {
            Some('{') => {
                self.chars.next();
                self.expanded = true;
                self.entered_expansion = true;
                Token::new(TokenKind::BegExp, Span::new(start, start + 2))
            }
            Some('(') => {
                self.chars.next();
                if self.peek_char() == Some('(') {
                    self.chars.next();
                    self.capture_arithmetic(start)
                } else {
                    // Substitution bodies reset the quoting context; the
                    // matching `)` restores it.
                    self.quote_stack.push(self.quoted);
                    self.quoted = false;
                    Token::new(TokenKind::BegSub, Span::new(start, start + 2))
                }
            }
            Some(ch) if token::is_identifier_start(ch) => self.scan_variable_name(start),
            Some(ch) if ch.is_ascii_digit() => self.scan_positional(start),
            Some(ch @ ('#' | '?')) => {
                self.chars.next();
                Token::new(TokenKind::Variable(ch.to_string()), Span::new(start, start + 2))
            }
            _ => {
                let span = Span::new(start, start + 1);
                self.invalid_with(ScanError::EmptyVariable { span }, "$")
            }
        }
    }

    /// Lex a positional parameter: `$0`, `$1`, ...
    fn scan_positional(&mut self, start: usize) -> Token {
        let digits_start = self.current_position();
        let mut end = digits_start;
        while let Some(&(pos, ch)) = self.chars.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            end = pos + ch.len_utf8();
            self.chars.next();
        }
        let digits = self.input[digits_start..end].to_string();
        Token::new(TokenKind::Variable(digits), Span::new(start, end))
    }

    /// Lex `$name`, consuming `[A-Za-z_][A-Za-z0-9_]*`.
    fn scan_variable_name(&mut self, start: usize) -> Token {
        let name_start = self.current_position();
        let mut end = name_start;

        while let Some(&(pos, ch)) = self.chars.peek() {
            if !token::is_identifier_char(ch) {
                break;
            }
            end = pos + ch.len_utf8();
            self.chars.next();
        }

        let name = self.input[name_start..end].to_string();
        Token::new(TokenKind::Variable(name), Span::new(start, end))
    }

    /// Capture a raw `$((...))` body.
    ///
    /// The body is not tokenized here; the arithmetic parser has its own
    /// lexer. Parentheses inside the body are tracked for balance, so
    /// `$(( (a+b) * c ))` captures correctly. Emits `BegArith` now and
    /// queues `Literal(body)` and `EndArith` as pending tokens.
    fn capture_arithmetic(&mut self, start: usize) -> Token {
        let body_start = self.current_position();
        let mut body_end = body_start;
        let mut depth = 0usize;

        while let Some(&(pos, ch)) = self.chars.peek() {
            match ch {
                '(' => depth += 1,
                ')' => {
                    if depth > 0 {
                        depth -= 1;
                    } else if self.peek_second() == Some(')') {
                        let body = self.input[body_start..body_end].to_string();
                        self.chars.next(); // consume )
                        self.chars.next(); // consume )
                        let end = pos + 2;
                        self.pending.push_back(Token::new(
                            TokenKind::Literal(body),
                            Span::new(body_start, body_end),
                        ));
                        self.pending
                            .push_back(Token::new(TokenKind::EndArith, Span::new(pos, end)));
                        return Token::new(TokenKind::BegArith, Span::new(start, start + 3));
                    } else {
                        let span = Span::new(start, pos + 1);
                        return self
                            .invalid_with(ScanError::UnterminatedArithmetic { span }, ")");
                    }
                }
                _ => {}
            }
            body_end = pos + ch.len_utf8();
            self.chars.next();
        }

        let span = Span::new(start, body_end);
        self.invalid_with(ScanError::UnterminatedArithmetic { span }, "$((")
    }
}
