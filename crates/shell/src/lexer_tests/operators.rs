// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Control and redirection operators.

use super::*;

scan_tests! {
    pipe: "a | b" => [
        lit!("a"), TokenKind::Blank, TokenKind::Pipe, TokenKind::Blank, lit!("b"),
    ],
    pipe_both: "a |& b" => [
        lit!("a"), TokenKind::Blank, TokenKind::PipeBoth, TokenKind::Blank, lit!("b"),
    ],
    and_chain: "a && b" => [
        lit!("a"), TokenKind::Blank, TokenKind::And, TokenKind::Blank, lit!("b"),
    ],
    or_chain: "a || b" => [
        lit!("a"), TokenKind::Blank, TokenKind::Or, TokenKind::Blank, lit!("b"),
    ],
    pipe_without_blanks: "a|b" => [lit!("a"), TokenKind::Pipe, lit!("b")],
    redirect_in: "a < f" => [
        lit!("a"), TokenKind::Blank, TokenKind::RedirectIn, TokenKind::Blank, lit!("f"),
    ],
    redirect_out: "a > f" => [
        lit!("a"), TokenKind::Blank, TokenKind::RedirectOut, TokenKind::Blank, lit!("f"),
    ],
    append_out: "a >> f" => [
        lit!("a"), TokenKind::Blank, TokenKind::AppendOut, TokenKind::Blank, lit!("f"),
    ],
    redirect_err: "a 2> f" => [
        lit!("a"), TokenKind::Blank, TokenKind::RedirectErr, TokenKind::Blank, lit!("f"),
    ],
    append_err: "a 2>> f" => [
        lit!("a"), TokenKind::Blank, TokenKind::AppendErr, TokenKind::Blank, lit!("f"),
    ],
    redirect_both: "a &> f" => [
        lit!("a"), TokenKind::Blank, TokenKind::RedirectBoth, TokenKind::Blank, lit!("f"),
    ],
    append_both: "a &>> f" => [
        lit!("a"), TokenKind::Blank, TokenKind::AppendBoth, TokenKind::Blank, lit!("f"),
    ],
    digit_word_is_not_fd: "a 22> f" => [
        lit!("a"), TokenKind::Blank, lit!("22"), TokenKind::RedirectOut,
        TokenKind::Blank, lit!("f"),
    ],
    fd_prefix_needs_own_word: "a2> f" => [
        lit!("a2"), TokenKind::RedirectOut, TokenKind::Blank, lit!("f"),
    ],
}
