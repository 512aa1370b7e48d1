// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operator lexing inside `${...}` parameter expansions.

use super::{ScanError, Scanner};
use crate::token::{Span, Token, TokenKind};

/// Characters that terminate a literal run in expansion mode.
fn is_expansion_operator(ch: char) -> bool {
    matches!(ch, '}' | ':' | '/' | '%' | '#' | ',' | '^' | '<' | '>')
}

impl Scanner<'_> {
    /// Scan one token inside `${...}`.
    ///
    /// `#` immediately after `${` means length; elsewhere it is a prefix
    /// trim. `:` composes with `-`, `=`, `+`, `?` into the conditional
    /// operators and otherwise slices. Doubled `/`, `%`, `#`, `,`, `^`
    /// select the long/all variants.
    pub(super) fn scan_expansion(&mut self) -> Token {
        let entered = self.entered_expansion;
        self.entered_expansion = false;

        let Some(&(start, ch)) = self.chars.peek() else {
            let span = Span::empty(self.input.len());
            return self.invalid_with(ScanError::UnterminatedExpansion { span }, "${");
        };

        match ch {
            '}' => {
                self.chars.next();
                self.expanded = false;
                Token::new(TokenKind::EndExp, Span::new(start, start + 1))
            }
            '#' if entered => {
                self.chars.next();
                Token::new(TokenKind::Length, Span::new(start, start + 1))
            }
            ':' => {
                self.chars.next();
                let (kind, len) = match self.peek_char() {
                    Some('-') => (TokenKind::ValIfUnset, 2),
                    Some('=') => (TokenKind::SetValIfUnset, 2),
                    Some('+') => (TokenKind::ValIfSet, 2),
                    Some('?') => (TokenKind::ExitIfUnset, 2),
                    _ => (TokenKind::Slice, 1),
                };
                if len == 2 {
                    self.chars.next();
                }
                Token::new(kind, Span::new(start, start + len))
            }
            '/' => {
                self.chars.next();
                let (kind, len) = match self.peek_char() {
                    Some('/') => (TokenKind::ReplaceAll, 2),
                    Some('#') => (TokenKind::ReplacePrefix, 2),
                    Some('%') => (TokenKind::ReplaceSuffix, 2),
                    _ => (TokenKind::Replace, 1),
                };
                if len == 2 {
                    self.chars.next();
                }
                Token::new(kind, Span::new(start, start + len))
            }
            '%' => self.scan_doubled(start, '%', TokenKind::TrimSuffix, TokenKind::TrimSuffixLong),
            '#' => self.scan_doubled(start, '#', TokenKind::TrimPrefix, TokenKind::TrimPrefixLong),
            ',' => self.scan_doubled(start, ',', TokenKind::Lower, TokenKind::LowerAll),
            '^' => self.scan_doubled(start, '^', TokenKind::Upper, TokenKind::UpperAll),
            '<' => {
                self.chars.next();
                Token::new(TokenKind::PadLeft, Span::new(start, start + 1))
            }
            '>' => {
                self.chars.next();
                Token::new(TokenKind::PadRight, Span::new(start, start + 1))
            }
            _ => self.scan_expansion_literal(start),
        }
    }

    /// Lex a single- or doubled-character operator.
    fn scan_doubled(
        &mut self,
        start: usize,
        ch: char,
        single: TokenKind,
        double: TokenKind,
    ) -> Token {
        self.chars.next();
        if self.peek_char() == Some(ch) {
            self.chars.next();
            Token::new(double, Span::new(start, start + 2))
        } else {
            Token::new(single, Span::new(start, start + 1))
        }
    }

    /// Accumulate literal text (identifier or operand) inside `${...}`.
    ///
    /// Stops at the operator runes; operands are raw text, so blanks and
    /// dollars pass through untokenized.
    fn scan_expansion_literal(&mut self, start: usize) -> Token {
        let mut end = start;

        while let Some(&(pos, ch)) = self.chars.peek() {
            if is_expansion_operator(ch) {
                break;
            }
            end = pos + ch.len_utf8();
            self.chars.next();
        }

        let text = self.input[start..end].to_string();
        Token::new(TokenKind::Literal(text), Span::new(start, end))
    }
}
