// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parameter expansions, command substitution, arithmetic, and braces.

use super::Parser;
use crate::arith;
use crate::expand::{Expander, ReplaceMode, TrimMode};
use crate::parse_error::ParseError;
use crate::token::{self, TokenKind};

impl Parser<'_> {
    /// Parse a `${...}` body. `BegExp` has been consumed.
    pub(super) fn parse_expansion(&mut self, quoted: bool) -> Result<Expander, ParseError> {
        if matches!(self.current.kind, TokenKind::Length) {
            self.advance();
            let ident = self.expansion_ident()?;
            self.expect_end_exp()?;
            return Ok(Expander::Length { ident });
        }

        let ident = self.expansion_ident()?;

        let expander = match self.current.kind.clone() {
            TokenKind::EndExp => Expander::Variable { ident, quoted },
            TokenKind::ValIfUnset => {
                self.advance();
                let value = self.expansion_operand()?;
                Expander::ValIfUnset { ident, value }
            }
            TokenKind::SetValIfUnset => {
                self.advance();
                let value = self.expansion_operand()?;
                Expander::SetValIfUnset { ident, value }
            }
            TokenKind::ValIfSet => {
                self.advance();
                let value = self.expansion_operand()?;
                Expander::ValIfSet { ident, value }
            }
            TokenKind::ExitIfUnset => {
                self.advance();
                let message = self.expansion_operand()?;
                Expander::ExitIfUnset { ident, message }
            }
            TokenKind::Slice => {
                self.advance();
                let from_text = self.operand_until(&[TokenKind::Slice])?;
                let to = if matches!(self.current.kind, TokenKind::Slice) {
                    self.advance();
                    let to_text = self.operand_until(&[])?;
                    Some(self.parse_index(&to_text)?)
                } else {
                    None
                };
                let from = if from_text.trim().is_empty() {
                    0
                } else {
                    self.parse_index(&from_text)?
                };
                Expander::Slice { ident, from, to }
            }
            kind @ (TokenKind::Replace
            | TokenKind::ReplaceAll
            | TokenKind::ReplacePrefix
            | TokenKind::ReplaceSuffix) => {
                let what = match kind {
                    TokenKind::Replace => ReplaceMode::First,
                    TokenKind::ReplaceAll => ReplaceMode::All,
                    TokenKind::ReplacePrefix => ReplaceMode::Prefix,
                    _ => ReplaceMode::Suffix,
                };
                self.advance();
                let from = self.operand_until(&[TokenKind::Replace])?;
                let to = if matches!(self.current.kind, TokenKind::Replace) {
                    self.advance();
                    self.expansion_operand()?
                } else {
                    String::new()
                };
                Expander::Replace {
                    ident,
                    from,
                    to,
                    what,
                }
            }
            kind @ (TokenKind::TrimSuffix
            | TokenKind::TrimSuffixLong
            | TokenKind::TrimPrefix
            | TokenKind::TrimPrefixLong) => {
                let what = match kind {
                    TokenKind::TrimSuffix => TrimMode::Suffix,
                    TokenKind::TrimSuffixLong => TrimMode::SuffixLong,
                    TokenKind::TrimPrefix => TrimMode::Prefix,
                    _ => TrimMode::PrefixLong,
                };
                self.advance();
                let pattern = self.expansion_operand()?;
                Expander::Trim {
                    ident,
                    pattern,
                    what,
                }
            }
            TokenKind::Lower => {
                self.advance();
                Expander::Lower { ident, all: false }
            }
            TokenKind::LowerAll => {
                self.advance();
                Expander::Lower { ident, all: true }
            }
            TokenKind::Upper => {
                self.advance();
                Expander::Upper { ident, all: false }
            }
            TokenKind::UpperAll => {
                self.advance();
                Expander::Upper { ident, all: true }
            }
            kind @ (TokenKind::PadLeft | TokenKind::PadRight) => {
                let left = matches!(kind, TokenKind::PadLeft);
                self.advance();
                let width_text = self.operand_until(&[TokenKind::Slice])?;
                let width =
                    width_text
                        .trim()
                        .parse::<usize>()
                        .map_err(|_| ParseError::BadExpansion {
                            message: format!("invalid pad width '{}'", width_text.trim()),
                            span: self.current.span,
                        })?;
                let fill = if matches!(self.current.kind, TokenKind::Slice) {
                    self.advance();
                    let text = self.expansion_operand()?;
                    text.chars().next().unwrap_or(' ')
                } else {
                    ' '
                };
                Expander::Pad {
                    ident,
                    width,
                    fill,
                    left,
                }
            }
            _ => return Err(self.unexpected("a parameter operator or '}'")),
        };

        self.expect_end_exp()?;
        Ok(expander)
    }

    /// The identifier immediately inside `${...}`.
    fn expansion_ident(&mut self) -> Result<String, ParseError> {
        match &self.current.kind {
            TokenKind::Literal(text) if token::is_identifier(text) => {
                let ident = text.clone();
                self.advance();
                Ok(ident)
            }
            TokenKind::Literal(text) => Err(ParseError::BadExpansion {
                message: format!("invalid variable name '{text}'"),
                span: self.current.span,
            }),
            _ => Err(self.unexpected("a variable name")),
        }
    }

    fn expect_end_exp(&mut self) -> Result<(), ParseError> {
        match self.current.kind {
            TokenKind::EndExp => {
                self.advance();
                Ok(())
            }
            _ => Err(self.unexpected("'}'")),
        }
    }

    /// Collect raw operand text up to `EndExp`.
    fn expansion_operand(&mut self) -> Result<String, ParseError> {
        self.operand_until(&[])
    }

    /// Collect raw operand text until `EndExp` or any of `stops`, rebuilding
    /// operator tokens into their source text. The stop token is not
    /// consumed.
    fn operand_until(&mut self, stops: &[TokenKind]) -> Result<String, ParseError> {
        let mut text = String::new();
        loop {
            if matches!(self.current.kind, TokenKind::EndExp)
                || stops.contains(&self.current.kind)
            {
                return Ok(text);
            }
            match &self.current.kind {
                TokenKind::Literal(part) => text.push_str(part),
                TokenKind::Length | TokenKind::TrimPrefix => text.push('#'),
                TokenKind::TrimPrefixLong => text.push_str("##"),
                TokenKind::TrimSuffix => text.push('%'),
                TokenKind::TrimSuffixLong => text.push_str("%%"),
                TokenKind::Slice => text.push(':'),
                TokenKind::Replace => text.push('/'),
                TokenKind::ReplaceAll => text.push_str("//"),
                TokenKind::ReplacePrefix => text.push_str("/#"),
                TokenKind::ReplaceSuffix => text.push_str("/%"),
                TokenKind::Lower => text.push(','),
                TokenKind::LowerAll => text.push_str(",,"),
                TokenKind::Upper => text.push('^'),
                TokenKind::UpperAll => text.push_str("^^"),
                TokenKind::PadLeft => text.push('<'),
                TokenKind::PadRight => text.push('>'),
                TokenKind::ValIfUnset => text.push_str(":-"),
                TokenKind::SetValIfUnset => text.push_str(":="),
                TokenKind::ValIfSet => text.push_str(":+"),
                TokenKind::ExitIfUnset => text.push_str(":?"),
                _ => return Err(self.unexpected("'}'")),
            }
            self.advance();
        }
    }

    fn parse_index(&mut self, text: &str) -> Result<i64, ParseError> {
        text.trim().parse::<i64>().map_err(|_| ParseError::BadExpansion {
            message: format!("invalid slice index '{}'", text.trim()),
            span: self.current.span,
        })
    }

    /// Parse `$(...)` into a subshell word list. `BegSub` has been consumed.
    pub(super) fn parse_substitution(&mut self) -> Result<Expander, ParseError> {
        let mut parts = Vec::new();
        loop {
            self.skip_blanks();
            match self.current.kind {
                TokenKind::EndSub => {
                    self.advance();
                    break;
                }
                _ if self.starts_fragment() => {
                    parts.push(self.parse_word_from(None)?);
                }
                _ => return Err(self.unexpected("')'")),
            }
        }
        if parts.is_empty() {
            return Err(ParseError::BadExpansion {
                message: "empty command substitution".to_string(),
                span: self.last_span,
            });
        }
        Ok(Expander::List { parts, sub: true })
    }

    /// Parse `$((body))`. `BegArith` has been consumed.
    pub(super) fn parse_arith(&mut self) -> Result<Expander, ParseError> {
        let (body, span) = match &self.current.kind {
            TokenKind::Literal(body) => (body.clone(), self.current.span),
            _ => return Err(self.unexpected("an arithmetic expression")),
        };
        self.advance();
        let expr = arith::parse(&body)
            .map_err(|message| ParseError::BadArithmetic { message, span })?;
        match self.current.kind {
            TokenKind::EndArith => {
                self.advance();
                Ok(Expander::Arith(expr))
            }
            _ => Err(self.unexpected("'))'")),
        }
    }

    // -----------------------------------------------------------------------
    // Braces
    // -----------------------------------------------------------------------

    /// Parse a brace expansion; `BegBrace` has been consumed and
    /// `prefix_parts` holds the word fragments already seen.
    ///
    /// The rest of the word after the closing brace becomes the suffix, so
    /// `a{b,c}d{e,f}` nests: the second brace is the first one's suffix.
    pub(super) fn parse_brace_word(
        &mut self,
        prefix_parts: Vec<Expander>,
    ) -> Result<Expander, ParseError> {
        let body = self.parse_brace_body()?;

        let prefix = if prefix_parts.is_empty() {
            None
        } else {
            Some(Box::new(super::collapse(prefix_parts)))
        };
        let suffix = if self.starts_fragment() {
            Some(Box::new(self.parse_word_from(None)?))
        } else {
            None
        };

        Ok(match body {
            BraceBody::List(words) => Expander::ListBrace {
                prefix,
                suffix,
                words,
            },
            BraceBody::Range {
                from,
                to,
                step,
                pad,
            } => Expander::RangeBrace {
                prefix,
                suffix,
                from,
                to,
                step,
                pad,
            },
        })
    }

    /// The inside of `{...}`: either a comma list or an integer range.
    fn parse_brace_body(&mut self) -> Result<BraceBody, ParseError> {
        let first = self.brace_element()?;

        if matches!(self.current.kind, TokenKind::Range) {
            self.advance();
            let (from, pad) = self.range_bound(first)?;
            let (to, _) = {
                let word = self.brace_element()?;
                self.range_bound(word)?
            };
            let step = if matches!(self.current.kind, TokenKind::Range) {
                self.advance();
                let word = self.brace_element()?;
                self.range_bound(word)?.0
            } else {
                1
            };
            self.expect_end_brace()?;
            return Ok(BraceBody::Range {
                from,
                to,
                step,
                pad,
            });
        }

        let mut words = vec![first];
        while matches!(self.current.kind, TokenKind::Seq) {
            self.advance();
            words.push(self.brace_element()?);
        }
        self.expect_end_brace()?;
        Ok(BraceBody::List(words))
    }

    /// One element of a brace body; empty elements are allowed (`{a,,b}`).
    fn brace_element(&mut self) -> Result<Expander, ParseError> {
        if matches!(
            self.current.kind,
            TokenKind::Seq | TokenKind::Range | TokenKind::EndBrace
        ) {
            return Ok(Expander::Word(String::new()));
        }
        if !self.starts_fragment() {
            return Err(self.unexpected("a brace expansion element"));
        }
        self.parse_word_from(None)
    }

    fn expect_end_brace(&mut self) -> Result<(), ParseError> {
        match self.current.kind {
            TokenKind::EndBrace => {
                self.advance();
                Ok(())
            }
            _ => Err(self.unexpected("'}'")),
        }
    }

    /// A range bound must be a literal integer. Returns the value and its
    /// zero-pad width (nonzero when the literal has a leading zero).
    fn range_bound(&mut self, word: Expander) -> Result<(i64, usize), ParseError> {
        let text = match word {
            Expander::Word(text) => text,
            _ => {
                return Err(ParseError::BadBrace {
                    message: "range bounds must be literal integers".to_string(),
                    span: self.last_span,
                })
            }
        };
        let value = text.parse::<i64>().map_err(|_| ParseError::BadBrace {
            message: format!("invalid range bound '{text}'"),
            span: self.last_span,
        })?;
        let digits = text.strip_prefix('-').unwrap_or(&text);
        let pad = if digits.len() > 1 && digits.starts_with('0') {
            digits.len()
        } else {
            0
        };
        Ok((value, pad))
    }
}

enum BraceBody {
    List(Vec<Expander>),
    Range {
        from: i64,
        to: i64,
        step: i64,
        pad: usize,
    },
}
