// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property-based tests: the scanner terminates on arbitrary input.

use super::*;
use proptest::prelude::*;

proptest! {
    /// Every input produces a finite stream ending in `Eof` or `Invalid`.
    #[test]
    fn scanning_terminates(input in ".{0,200}") {
        let mut scanner = Scanner::new(&input);
        let limit = input.len() * 4 + 16;
        let mut terminal = false;
        for _ in 0..limit {
            match scanner.scan().kind {
                TokenKind::Eof | TokenKind::Invalid(_) => {
                    terminal = true;
                    break;
                }
                _ => {}
            }
        }
        prop_assert!(terminal, "scanner did not terminate within {limit} tokens");
    }

    /// After the terminal token the scanner keeps returning `Eof`.
    #[test]
    fn eof_is_sticky(input in ".{0,80}") {
        let mut scanner = Scanner::new(&input);
        for _ in 0..(input.len() * 4 + 16) {
            if matches!(scanner.scan().kind, TokenKind::Eof | TokenKind::Invalid(_)) {
                break;
            }
        }
        prop_assert!(matches!(scanner.scan().kind, TokenKind::Eof));
        prop_assert!(matches!(scanner.scan().kind, TokenKind::Eof));
    }
}
