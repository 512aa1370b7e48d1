// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `[[ ... ]]` expression parsing.

use super::Parser;
use crate::ast::{Executer, TestCommand};
use crate::parse_error::ParseError;
use crate::tester::{BinaryTest, Tester, UnaryTest};
use crate::token::TokenKind;

impl Parser<'_> {
    /// Parse a `[[ ... ]]` statement. The current token is `BegTest`.
    pub(super) fn parse_test(&mut self) -> Result<Executer, ParseError> {
        let start = self.current.span;
        self.advance(); // [[

        let tester = self.test_or()?;

        self.skip_blanks();
        match self.current.kind {
            TokenKind::EndTest => self.advance(),
            _ => return Err(self.unexpected("']]'")),
        }

        let span = start.merge(self.last_span);
        Ok(Executer::Test(TestCommand { tester, span }))
    }

    /// or := and ('||' and)*
    fn test_or(&mut self) -> Result<Tester, ParseError> {
        let mut left = self.test_and()?;
        loop {
            self.skip_blanks();
            if !matches!(self.current.kind, TokenKind::Or) {
                return Ok(left);
            }
            self.advance();
            let right = self.test_and()?;
            left = Tester::Or {
                left: Box::new(left),
                right: Box::new(right),
            };
        }
    }

    /// and := primary ('&&' primary)*
    fn test_and(&mut self) -> Result<Tester, ParseError> {
        let mut left = self.test_primary()?;
        loop {
            self.skip_blanks();
            if !matches!(self.current.kind, TokenKind::And) {
                return Ok(left);
            }
            self.advance();
            let right = self.test_primary()?;
            left = Tester::And {
                left: Box::new(left),
                right: Box::new(right),
            };
        }
    }

    /// primary := '!' primary | '(' or ')' | unary_op word | word binary_op word
    fn test_primary(&mut self) -> Result<Tester, ParseError> {
        self.skip_blanks();

        if matches!(&self.current.kind, TokenKind::Literal(text) if text == "!") {
            self.advance();
            let inner = self.test_primary()?;
            return Ok(Tester::Not(Box::new(inner)));
        }

        if matches!(self.current.kind, TokenKind::BegSub) {
            self.advance();
            let inner = self.test_or()?;
            self.skip_blanks();
            match self.current.kind {
                TokenKind::EndSub => self.advance(),
                _ => return Err(self.unexpected("')'")),
            }
            return Ok(inner);
        }

        if let Some(op) = unary_test(&self.current.kind) {
            self.advance();
            self.skip_blanks();
            if !self.starts_fragment() {
                return Err(self.unexpected("a test operand"));
            }
            let expr = self.parse_word_from(None)?;
            return Ok(Tester::Unary { op, expr });
        }

        if !self.starts_fragment() {
            return Err(self.unexpected("a test expression"));
        }
        let left = self.parse_word_from(None)?;
        self.skip_blanks();

        let Some(op) = binary_test(&self.current.kind) else {
            return Err(self.unexpected("a binary test operator"));
        };
        self.advance();
        self.skip_blanks();
        if !self.starts_fragment() {
            return Err(self.unexpected("a test operand"));
        }
        let right = self.parse_word_from(None)?;
        Ok(Tester::Binary { op, left, right })
    }
}

fn unary_test(kind: &TokenKind) -> Option<UnaryTest> {
    let op = match kind {
        TokenKind::FileExists => UnaryTest::Exists,
        TokenKind::FileRead => UnaryTest::Readable,
        TokenKind::FileWrite => UnaryTest::Writable,
        TokenKind::FileExec => UnaryTest::Executable,
        TokenKind::FileSize => UnaryTest::HasSize,
        TokenKind::FileRegular => UnaryTest::Regular,
        TokenKind::FileDir => UnaryTest::Directory,
        TokenKind::FileLink => UnaryTest::Symlink,
        TokenKind::StrNotEmpty => UnaryTest::NotEmpty,
        TokenKind::StrEmpty => UnaryTest::Empty,
        _ => return None,
    };
    Some(op)
}

fn binary_test(kind: &TokenKind) -> Option<BinaryTest> {
    let op = match kind {
        TokenKind::Eq => BinaryTest::Eq,
        TokenKind::Ne => BinaryTest::Ne,
        TokenKind::Lt => BinaryTest::Lt,
        TokenKind::Le => BinaryTest::Le,
        TokenKind::Gt => BinaryTest::Gt,
        TokenKind::Ge => BinaryTest::Ge,
        TokenKind::NewerThan => BinaryTest::NewerThan,
        TokenKind::OlderThan => BinaryTest::OlderThan,
        TokenKind::SameFile => BinaryTest::SameFile,
        _ => return None,
    };
    Some(op)
}
