// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Control structures: `for`, `while`, `until`, `if`.

use super::Parser;
use crate::ast::{CondLoop, Conditional, Executer, ForLoop};
use crate::parse_error::ParseError;
use crate::token::{self, TokenKind};

impl Parser<'_> {
    /// `for ident in words; do body; [else alt;] done`
    ///
    /// The `else` branch runs when the iteration list expands to no words.
    pub(super) fn parse_for(&mut self) -> Result<Executer, ParseError> {
        let start = self.current.span;
        self.advance(); // for
        self.skip_blanks();

        let ident = match &self.current.kind {
            TokenKind::Literal(text) if token::is_identifier(text) => {
                let ident = text.clone();
                self.advance();
                ident
            }
            _ => return Err(self.unexpected("an iteration variable")),
        };

        self.expect_keyword("in")?;

        let mut iter = Vec::new();
        loop {
            self.skip_blanks();
            match self.current.kind {
                TokenKind::List => {
                    self.advance();
                    break;
                }
                _ if self.starts_fragment() => {
                    iter.push(self.parse_word_from(None)?);
                }
                _ => return Err(self.unexpected("an iteration word or ';'")),
            }
        }

        self.expect_keyword("do")?;
        let (body, stop) = self.parse_body(&["done", "else"])?;
        let alt = if stop == "else" {
            self.parse_body(&["done"])?.0
        } else {
            Vec::new()
        };

        let span = start.merge(self.last_span);
        Ok(Executer::For(ForLoop {
            ident,
            iter,
            body,
            alt,
            span,
        }))
    }

    /// `while cond; do body; done` — or `until`, which negates the
    /// continuation condition.
    pub(super) fn parse_cond_loop(&mut self, until: bool) -> Result<Executer, ParseError> {
        let start = self.current.span;
        self.advance(); // while / until

        let cond = self.parse_statement()?;
        self.expect_keyword("do")?;
        let (body, _) = self.parse_body(&["done"])?;

        let span = start.merge(self.last_span);
        let cond_loop = CondLoop {
            cond: Box::new(cond),
            body,
            span,
        };
        Ok(if until {
            Executer::Until(cond_loop)
        } else {
            Executer::While(cond_loop)
        })
    }

    /// `if cond; then body; [elif ...;] [else alt;] fi`
    pub(super) fn parse_if(&mut self) -> Result<Executer, ParseError> {
        let start = self.current.span;
        self.advance(); // if
        self.parse_if_tail(start)
    }

    /// The shared tail of `if` and `elif`: condition, `then`, branches.
    fn parse_if_tail(&mut self, start: crate::span::Span) -> Result<Executer, ParseError> {
        let cond = self.parse_statement()?;
        self.expect_keyword("then")?;

        let (then, stop) = self.parse_body(&["elif", "else", "fi"])?;
        let alt = match stop.as_str() {
            "fi" => Vec::new(),
            "else" => self.parse_body(&["fi"])?.0,
            _ => {
                // elif: the alternative is a nested conditional.
                let nested_start = self.last_span;
                vec![self.parse_if_tail(nested_start)?]
            }
        };

        let span = start.merge(self.last_span);
        Ok(Executer::If(Conditional {
            cond: Box::new(cond),
            then,
            alt,
            span,
        }))
    }

    /// Parse statements until one of the stop keywords appears at statement
    /// position. The stop keyword is consumed and returned.
    fn parse_body(&mut self, stops: &[&str]) -> Result<(Vec<Executer>, String), ParseError> {
        // The body opener (`do` / `then`) is consumed by the caller via
        // expect_keyword; here statements run until a stop keyword.
        let mut statements = Vec::new();
        loop {
            self.skip_separators();
            match &self.current.kind {
                TokenKind::Keyword(word) if stops.contains(&word.as_str()) => {
                    let word = word.clone();
                    self.advance();
                    return Ok((statements, word));
                }
                TokenKind::Eof => {
                    return Err(ParseError::UnexpectedEof {
                        expected: format!("'{}'", stops.join("' or '")),
                    })
                }
                TokenKind::Invalid(_) => return Err(self.scan_failure()),
                _ => statements.push(self.parse_statement()?),
            }
        }
    }
}
