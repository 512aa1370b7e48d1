// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single quotes, double quotes, and embedded expansions.

use super::*;

scan_tests! {
    single_quoted: "echo 'a b'" => [lit!("echo"), TokenKind::Blank, lit!("a b")],
    single_quoted_no_expansion: "'$foo'" => [lit!("$foo")],
    single_quoted_empty: "''" => [lit!("")],
    double_quoted: "echo \"hi\"" => [
        lit!("echo"), TokenKind::Blank, TokenKind::Quote, lit!("hi"), TokenKind::Quote,
    ],
    double_quoted_variable: "\"a $b c\"" => [
        TokenKind::Quote, lit!("a "), TokenKind::Variable("b".into()), lit!(" c"),
        TokenKind::Quote,
    ],
    double_quoted_expansion: "\"${x}\"" => [
        TokenKind::Quote, TokenKind::BegExp, lit!("x"), TokenKind::EndExp,
        TokenKind::Quote,
    ],
    double_quoted_substitution: "\"$(date)\"" => [
        TokenKind::Quote, TokenKind::BegSub, lit!("date"), TokenKind::EndSub,
        TokenKind::Quote,
    ],
    escaped_quote_in_double: "\"a\\\"b\"" => [
        TokenKind::Quote, lit!("a\"b"), TokenKind::Quote,
    ],
    escaped_newline_sequence: "\"a\\nb\"" => [
        TokenKind::Quote, lit!("a\nb"), TokenKind::Quote,
    ],
    escaped_dollar: "\"\\$x\"" => [TokenKind::Quote, lit!("$x"), TokenKind::Quote],
    operators_inert_inside_quotes: "\"a | b; c\"" => [
        TokenKind::Quote, lit!("a | b; c"), TokenKind::Quote,
    ],
    adjacent_quoted_fragments: "a\"b\"c" => [
        lit!("a"), TokenKind::Quote, lit!("b"), TokenKind::Quote, lit!("c"),
    ],
}

scan_error_tests! {
    unterminated_single: "'abc" => ScanError::UnterminatedQuote { .. },
    unterminated_double: "\"abc" => ScanError::UnterminatedQuote { .. },
    bad_escape_in_double: "\"a\\qb\"" => ScanError::InvalidToken { .. },
}
