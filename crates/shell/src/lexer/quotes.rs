// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quoted strings and comments.

use super::{ScanError, Scanner};
use crate::token::{Span, Token, TokenKind};

impl Scanner<'_> {
    /// Lex a single-quoted string: literal content, no escapes, no expansion.
    pub(super) fn scan_single_quoted(&mut self, start: usize) -> Token {
        self.chars.next(); // consume opening '

        let content_start = self.current_position();
        let mut content_end = content_start;

        while let Some(&(pos, ch)) = self.chars.peek() {
            if ch == '\'' {
                let content = self.input[content_start..content_end].to_string();
                self.chars.next();
                return Token::new(TokenKind::Literal(content), Span::new(start, pos + 1));
            }
            content_end = pos + ch.len_utf8();
            self.chars.next();
        }

        self.invalid_with(
            ScanError::UnterminatedQuote { span: Span::new(start, content_end) },
            "'",
        )
    }

    /// Scan one token inside a double-quoted string.
    ///
    /// Embedded `$name`, `${...}`, `$(...)`, and `$((...))` still tokenize;
    /// everything else accumulates into literals. Word concatenation is the
    /// parser's job.
    pub(super) fn scan_quoted(&mut self) -> Token {
        let Some(&(start, ch)) = self.chars.peek() else {
            let span = Span::empty(self.input.len());
            return self.invalid_with(ScanError::UnterminatedQuote { span }, "\"");
        };

        match ch {
            '"' => {
                self.chars.next();
                self.quoted = false;
                Token::new(TokenKind::Quote, Span::new(start, start + 1))
            }
            '$' => self.scan_dollar(start),
            _ => self.scan_quoted_literal(start),
        }
    }

    /// Accumulate literal text inside double quotes, processing escapes.
    fn scan_quoted_literal(&mut self, start: usize) -> Token {
        let mut text = String::new();
        let mut end = start;

        while let Some(&(pos, ch)) = self.chars.peek() {
            match ch {
                '"' | '$' => break,
                '\\' => {
                    self.chars.next();
                    let Some(&(esc_pos, esc)) = self.chars.peek() else {
                        let span = Span::new(pos, pos + 1);
                        return self.invalid_with(ScanError::UnterminatedQuote { span }, "\\");
                    };
                    let resolved = match esc {
                        '"' => '"',
                        '\'' => '\'',
                        '\\' => '\\',
                        '$' => '$',
                        'n' => '\n',
                        't' => '\t',
                        other => {
                            let span = Span::new(pos, esc_pos + other.len_utf8());
                            return self.invalid_with(
                                ScanError::InvalidToken {
                                    text: format!("\\{}", other),
                                    span,
                                },
                                "\\",
                            );
                        }
                    };
                    text.push(resolved);
                    end = esc_pos + esc.len_utf8();
                    self.chars.next();
                }
                _ => {
                    text.push(ch);
                    end = pos + ch.len_utf8();
                    self.chars.next();
                }
            }
        }

        Token::new(TokenKind::Literal(text), Span::new(start, end))
    }

    /// Lex a comment: `#` at word start through end of line, body trimmed.
    pub(super) fn scan_comment(&mut self, start: usize) -> Token {
        self.chars.next(); // consume #

        let body_start = self.current_position();
        let mut end = body_start;

        while let Some(&(pos, ch)) = self.chars.peek() {
            if ch == '\n' || ch == '\r' {
                break;
            }
            end = pos + ch.len_utf8();
            self.chars.next();
        }

        let body = self.input[body_start..end].trim().to_string();
        Token::new(TokenKind::Comment(body), Span::new(start, end))
    }
}
