// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Raw capture of `$((...))` bodies.

use super::*;

scan_tests! {
    simple_body: "$((1 + 2))" => [
        TokenKind::BegArith, lit!("1 + 2"), TokenKind::EndArith,
    ],
    nested_parens: "$(( (a + b) * c ))" => [
        TokenKind::BegArith, lit!(" (a + b) * c "), TokenKind::EndArith,
    ],
    in_word_context: "x$((1+2))y" => [
        lit!("x"), TokenKind::BegArith, lit!("1+2"), TokenKind::EndArith, lit!("y"),
    ],
    inside_double_quotes: "\"$((n))\"" => [
        TokenKind::Quote, TokenKind::BegArith, lit!("n"), TokenKind::EndArith,
        TokenKind::Quote,
    ],
}

scan_error_tests! {
    unterminated_body: "$((1+2" => ScanError::UnterminatedArithmetic { .. },
    half_terminated_body: "$((1+2)" => ScanError::UnterminatedArithmetic { .. },
}
