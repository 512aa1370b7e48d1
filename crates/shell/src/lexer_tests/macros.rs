// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test macros for scanner tests.
//!
//! These macros reduce boilerplate by providing declarative test generation.

/// Generate tokenization success tests.
///
/// # Usage
///
/// ```ignore
/// scan_tests! {
///     name: "input" => [token1, token2, ...],
/// }
/// ```
macro_rules! scan_tests {
    ($($name:ident: $input:expr => [$($token:expr),* $(,)?]),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let tokens = Scanner::tokenize($input)
                    .expect(concat!("failed to tokenize: ", $input));
                let expected: Vec<TokenKind> = vec![$($token),*];
                let actual: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
                assert_eq!(actual, expected, "input: {:?}", $input);
            }
        )*
    };
}

/// Generate tokenization error tests.
///
/// # Usage
///
/// ```ignore
/// scan_error_tests! {
///     name: "input" => ErrorVariant { .. },
/// }
/// ```
macro_rules! scan_error_tests {
    ($($name:ident: $input:expr => $error:pat),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let result = Scanner::tokenize($input);
                assert!(
                    matches!(result, Err($error)),
                    "expected error {:?} for input {:?}, got {:?}",
                    stringify!($error), $input, result
                );
            }
        )*
    };
}

/// Shorthand for a `Literal` token kind.
macro_rules! lit {
    ($text:expr) => {
        TokenKind::Literal($text.to_string())
    };
}

/// Shorthand for a `Keyword` token kind.
macro_rules! kw {
    ($text:expr) => {
        TokenKind::Keyword($text.to_string())
    };
}
