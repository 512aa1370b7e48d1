// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive-descent parser: token stream → command tree.
//!
//! One token of lookahead. Statements separate on `;`, newlines, and
//! comments; `&&`/`||` associate to the right so evaluation order matches
//! short-circuit semantics; pipes bind tighter and associate left.

mod control;
mod expansion;
mod test_expr;

use crate::ast::{
    Assignment, Executer, PipeItem, Pipeline, Redirect, RedirectKind, SimpleCommand,
};
use crate::error::ScanError;
use crate::expand::Expander;
use crate::lexer::Scanner;
use crate::parse_error::ParseError;
use crate::span::Span;
use crate::token::{self, Token, TokenKind};

pub struct Parser<'a> {
    scanner: Scanner<'a>,
    current: Token,
    /// Span of the most recently consumed token.
    last_span: Span,
}

impl<'a> Parser<'a> {
    /// Create a parser over the given source.
    pub fn new(input: &'a str) -> Self {
        let mut scanner = Scanner::new(input);
        let current = scanner.scan();
        Self {
            scanner,
            current,
            last_span: Span::empty(0),
        }
    }

    /// Parse an entire source string into its statements.
    pub fn parse(input: &str) -> Result<Vec<Executer>, ParseError> {
        let mut parser = Parser::new(input);
        let mut statements = Vec::new();
        while let Some(statement) = parser.next_statement()? {
            statements.push(statement);
        }
        Ok(statements)
    }

    /// Parse and return the next statement, or `None` at end of input.
    pub fn next_statement(&mut self) -> Result<Option<Executer>, ParseError> {
        self.skip_separators();
        match self.current.kind {
            TokenKind::Eof => Ok(None),
            TokenKind::Invalid(_) => Err(self.scan_failure()),
            _ => Ok(Some(self.parse_statement()?)),
        }
    }

    // -----------------------------------------------------------------------
    // Statements
    // -----------------------------------------------------------------------

    /// statement := pipeline (('&&' | '||') statement)?
    fn parse_statement(&mut self) -> Result<Executer, ParseError> {
        let left = self.parse_pipeline()?;
        self.skip_blanks();
        match self.current.kind {
            TokenKind::And => {
                self.advance();
                let right = self.parse_statement()?;
                Ok(Executer::And {
                    left: Box::new(left),
                    right: Box::new(right),
                })
            }
            TokenKind::Or => {
                self.advance();
                let right = self.parse_statement()?;
                Ok(Executer::Or {
                    left: Box::new(left),
                    right: Box::new(right),
                })
            }
            _ => Ok(left),
        }
    }

    /// pipeline := command (('|' | '|&') command)*
    ///
    /// `|&` marks the preceding stage: its stderr merges into the pipe.
    fn parse_pipeline(&mut self) -> Result<Executer, ParseError> {
        self.skip_blanks();
        let start = self.current.span;
        let first = self.parse_command()?;
        self.skip_blanks();

        if !matches!(self.current.kind, TokenKind::Pipe | TokenKind::PipeBoth) {
            return Ok(first);
        }

        let mut items = vec![PipeItem {
            exec: first,
            both: false,
        }];
        while matches!(self.current.kind, TokenKind::Pipe | TokenKind::PipeBoth) {
            let both = matches!(self.current.kind, TokenKind::PipeBoth);
            if let Some(last) = items.last_mut() {
                last.both = both;
            }
            self.advance();
            self.skip_blanks();
            let next = self.parse_command()?;
            items.push(PipeItem {
                exec: next,
                both: false,
            });
            self.skip_blanks();
        }

        let span = start.merge(self.last_span);
        Ok(Executer::Pipe(Pipeline { items, span }))
    }

    /// One command: a control structure, a test, or a simple command.
    fn parse_command(&mut self) -> Result<Executer, ParseError> {
        self.skip_blanks();
        match &self.current.kind {
            TokenKind::Keyword(word) => match word.as_str() {
                "for" => self.parse_for(),
                "while" => self.parse_cond_loop(false),
                "until" => self.parse_cond_loop(true),
                "if" => self.parse_if(),
                _ => Err(self.unexpected("a command")),
            },
            TokenKind::BegTest => self.parse_test(),
            TokenKind::Invalid(_) => Err(self.scan_failure()),
            _ => self.parse_simple(),
        }
    }

    /// A simple command or an assignment.
    fn parse_simple(&mut self) -> Result<Executer, ParseError> {
        let start = self.current.span;
        let mut words: Vec<Expander> = Vec::new();
        let mut redirects: Vec<Redirect> = Vec::new();

        loop {
            self.skip_blanks();
            match &self.current.kind {
                kind if kind.is_sequence() => break,
                TokenKind::Eof | TokenKind::EndTest => break,
                TokenKind::Invalid(_) => return Err(self.scan_failure()),
                kind if kind.is_redirect() => {
                    redirects.push(self.parse_redirect()?);
                }
                TokenKind::Literal(text) if words.is_empty() => {
                    // A leading identifier glued to `=` is an assignment.
                    let literal = text.clone();
                    self.advance();
                    if matches!(self.current.kind, TokenKind::Assign)
                        && token::is_identifier(&literal)
                    {
                        self.advance();
                        return self.parse_assignment(literal, start);
                    }
                    let initial = Expander::Word(literal);
                    words.push(self.parse_word_from(Some(initial))?);
                }
                _ if self.starts_fragment() => {
                    words.push(self.parse_word_from(None)?);
                }
                _ => break,
            }
        }

        if words.is_empty() && redirects.is_empty() {
            return Err(self.unexpected("a command word"));
        }

        let span = start.merge(self.last_span);
        Ok(Executer::Simple(SimpleCommand {
            words,
            redirects,
            span,
        }))
    }

    /// The remainder of `ident=`: value words up to the statement end.
    fn parse_assignment(&mut self, ident: String, start: Span) -> Result<Executer, ParseError> {
        let mut values = Vec::new();
        loop {
            self.skip_blanks();
            match &self.current.kind {
                kind if kind.is_sequence() => break,
                TokenKind::Eof | TokenKind::EndTest => break,
                TokenKind::Invalid(_) => return Err(self.scan_failure()),
                _ if self.starts_fragment() => {
                    values.push(self.parse_word_from(None)?);
                }
                _ => break,
            }
        }
        let span = start.merge(self.last_span);
        Ok(Executer::Assign(Assignment {
            ident,
            words: values,
            span,
        }))
    }

    /// A redirection operator and its target word.
    fn parse_redirect(&mut self) -> Result<Redirect, ParseError> {
        let span = self.current.span;
        let kind = match self.current.kind {
            TokenKind::RedirectIn => RedirectKind::In,
            TokenKind::RedirectOut => RedirectKind::Out,
            TokenKind::RedirectErr => RedirectKind::Err,
            TokenKind::RedirectBoth => RedirectKind::Both,
            TokenKind::AppendOut => RedirectKind::AppendOut,
            TokenKind::AppendErr => RedirectKind::AppendErr,
            TokenKind::AppendBoth => RedirectKind::AppendBoth,
            _ => return Err(self.unexpected("a redirection operator")),
        };
        self.advance();
        self.skip_blanks();
        if !self.starts_fragment() {
            return Err(self.unexpected("a redirection target"));
        }
        let target = self.parse_word_from(None)?;
        Ok(Redirect { kind, target, span })
    }

    // -----------------------------------------------------------------------
    // Words
    // -----------------------------------------------------------------------

    /// True when the current token can begin a word fragment.
    fn starts_fragment(&self) -> bool {
        matches!(
            self.current.kind,
            TokenKind::Literal(_)
                | TokenKind::Keyword(_)
                | TokenKind::Assign
                | TokenKind::Variable(_)
                | TokenKind::Quote
                | TokenKind::BegExp
                | TokenKind::BegSub
                | TokenKind::BegArith
                | TokenKind::BegBrace
        )
    }

    /// Assemble adjacent fragments into one word expander.
    ///
    /// `initial` carries a fragment the caller already consumed. Consecutive
    /// fragments form a `Multi`; a single fragment collapses to itself. A
    /// brace fragment swallows the accumulated prefix and the rest of the
    /// word as its suffix.
    fn parse_word_from(&mut self, initial: Option<Expander>) -> Result<Expander, ParseError> {
        let mut parts: Vec<Expander> = Vec::new();
        if let Some(fragment) = initial {
            parts.push(fragment);
        }
        let mut in_quotes = false;
        let mut saw_quote = false;

        loop {
            match &self.current.kind {
                TokenKind::Literal(text) => {
                    parts.push(Expander::Word(text.clone()));
                    self.advance();
                }
                TokenKind::Keyword(word) => {
                    // Reserved words degrade to literals in word position.
                    parts.push(Expander::Word(word.clone()));
                    self.advance();
                }
                TokenKind::Assign => {
                    parts.push(Expander::Word("=".to_string()));
                    self.advance();
                }
                TokenKind::Variable(name) => {
                    parts.push(Expander::Variable {
                        ident: name.clone(),
                        quoted: in_quotes,
                    });
                    self.advance();
                }
                TokenKind::Quote => {
                    saw_quote = true;
                    in_quotes = !in_quotes;
                    self.advance();
                }
                TokenKind::BegExp => {
                    self.advance();
                    parts.push(self.parse_expansion(in_quotes)?);
                }
                TokenKind::BegSub => {
                    self.advance();
                    parts.push(self.parse_substitution()?);
                }
                TokenKind::BegArith => {
                    self.advance();
                    parts.push(self.parse_arith()?);
                }
                TokenKind::BegBrace => {
                    self.advance();
                    return self.parse_brace_word(parts);
                }
                _ => break,
            }
        }

        if parts.is_empty() {
            if saw_quote {
                return Ok(Expander::Word(String::new()));
            }
            return Err(self.unexpected("a word"));
        }
        Ok(collapse(parts))
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn advance(&mut self) {
        self.last_span = self.current.span;
        self.current = self.scanner.scan();
    }

    fn skip_blanks(&mut self) {
        while matches!(self.current.kind, TokenKind::Blank) {
            self.advance();
        }
    }

    /// Skip statement separators: blanks, `;`/newlines, and comments.
    fn skip_separators(&mut self) {
        while matches!(
            self.current.kind,
            TokenKind::Blank | TokenKind::List | TokenKind::Comment(_)
        ) {
            self.advance();
        }
    }

    /// Consume the expected keyword, skipping separators first.
    fn expect_keyword(&mut self, word: &str) -> Result<(), ParseError> {
        self.skip_separators();
        match &self.current.kind {
            TokenKind::Keyword(found) if found == word => {
                self.advance();
                Ok(())
            }
            _ => Err(self.unexpected(&format!("'{word}'"))),
        }
    }

    /// Build the error for the current (unexpected) token.
    fn unexpected(&mut self, expected: &str) -> ParseError {
        match &self.current.kind {
            TokenKind::Invalid(_) => self.scan_failure(),
            TokenKind::Eof => ParseError::UnexpectedEof {
                expected: expected.to_string(),
            },
            kind => ParseError::UnexpectedToken {
                found: kind.clone(),
                expected: expected.to_string(),
                span: self.current.span,
            },
        }
    }

    /// Convert the scanner's classified error behind an `Invalid` token.
    fn scan_failure(&mut self) -> ParseError {
        let span = self.current.span;
        let text = match &self.current.kind {
            TokenKind::Invalid(text) => text.clone(),
            _ => String::new(),
        };
        ParseError::Scan(
            self.scanner
                .take_error()
                .unwrap_or(ScanError::InvalidToken { text, span }),
        )
    }
}

/// A single fragment stays itself; several become a `Multi`.
fn collapse(mut parts: Vec<Expander>) -> Expander {
    if parts.len() == 1 {
        parts.remove(0)
    } else {
        Expander::Multi(parts)
    }
}

#[cfg(test)]
#[path = "parser_tests/mod.rs"]
mod tests;
