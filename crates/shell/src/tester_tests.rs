// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for `[[ ... ]]` evaluation.

use super::*;
use crate::exec::Shell;
use crate::expand::Expander;

fn word(text: &str) -> Expander {
    Expander::Word(text.to_string())
}

async fn check(tester: Tester) -> bool {
    let mut shell = Shell::new();
    tester.test(&mut shell).await.expect("test evaluation")
}

#[tokio::test]
async fn string_predicates() {
    assert!(
        check(Tester::Unary {
            op: UnaryTest::NotEmpty,
            expr: word("text"),
        })
        .await
    );
    assert!(
        check(Tester::Unary {
            op: UnaryTest::Empty,
            expr: word(""),
        })
        .await
    );
}

#[tokio::test]
async fn numeric_comparisons() {
    let cases = [
        (BinaryTest::Eq, "3", "3", true),
        (BinaryTest::Ne, "3", "4", true),
        (BinaryTest::Lt, "3", "4", true),
        (BinaryTest::Le, "4", "4", true),
        (BinaryTest::Gt, "5", "4", true),
        (BinaryTest::Ge, "3", "4", false),
    ];
    for (op, lhs, rhs, expected) in cases {
        let result = check(Tester::Binary {
            op,
            left: word(lhs),
            right: word(rhs),
        })
        .await;
        assert_eq!(result, expected, "{lhs} {op:?} {rhs}");
    }
}

#[tokio::test]
async fn non_numeric_comparison_fails() {
    let mut shell = Shell::new();
    let tester = Tester::Binary {
        op: BinaryTest::Eq,
        left: word("abc"),
        right: word("3"),
    };
    let err = tester.test(&mut shell).await.unwrap_err();
    assert!(matches!(err, crate::exec::ExecError::Test { .. }));
}

#[tokio::test]
async fn file_predicates() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file_path = dir.path().join("data.txt");
    std::fs::write(&file_path, b"content").expect("write");
    let file = file_path.display().to_string();
    let dir_name = dir.path().display().to_string();

    assert!(check(Tester::Unary { op: UnaryTest::Exists, expr: word(&file) }).await);
    assert!(check(Tester::Unary { op: UnaryTest::Regular, expr: word(&file) }).await);
    assert!(check(Tester::Unary { op: UnaryTest::HasSize, expr: word(&file) }).await);
    assert!(check(Tester::Unary { op: UnaryTest::Readable, expr: word(&file) }).await);
    assert!(check(Tester::Unary { op: UnaryTest::Directory, expr: word(&dir_name) }).await);

    assert!(!check(Tester::Unary { op: UnaryTest::Directory, expr: word(&file) }).await);
    assert!(
        !check(Tester::Unary {
            op: UnaryTest::Exists,
            expr: word(&format!("{dir_name}/missing")),
        })
        .await
    );
}

#[tokio::test]
async fn empty_file_has_no_size() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("empty");
    std::fs::write(&path, b"").expect("write");
    let name = path.display().to_string();

    assert!(check(Tester::Unary { op: UnaryTest::Exists, expr: word(&name) }).await);
    assert!(!check(Tester::Unary { op: UnaryTest::HasSize, expr: word(&name) }).await);
}

#[tokio::test]
async fn same_file_by_inode() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("a");
    std::fs::write(&path, b"x").expect("write");
    let name = path.display().to_string();

    assert!(
        check(Tester::Binary {
            op: BinaryTest::SameFile,
            left: word(&name),
            right: word(&name),
        })
        .await
    );
    assert!(
        !check(Tester::Binary {
            op: BinaryTest::SameFile,
            left: word(&name),
            right: word(&dir.path().display().to_string()),
        })
        .await
    );
}

#[tokio::test]
async fn logic_short_circuits() {
    // The right side would fail on evaluation; And must not reach it.
    let mut shell = Shell::new();
    let tester = Tester::And {
        left: Box::new(Tester::Unary { op: UnaryTest::Empty, expr: word("x") }),
        right: Box::new(Tester::Binary {
            op: BinaryTest::Eq,
            left: word("bad"),
            right: word("worse"),
        }),
    };
    assert!(!tester.test(&mut shell).await.expect("short circuit"));
}

#[tokio::test]
async fn negation() {
    assert!(
        check(Tester::Not(Box::new(Tester::Unary {
            op: UnaryTest::NotEmpty,
            expr: word(""),
        })))
        .await
    );
}

#[tokio::test]
async fn operand_must_be_single_word() {
    let mut shell = Shell::new();
    shell
        .define("many", vec!["a".to_string(), "b".to_string()])
        .expect("define");
    let tester = Tester::Unary {
        op: UnaryTest::NotEmpty,
        expr: Expander::Variable { ident: "many".into(), quoted: false },
    };
    let err = tester.test(&mut shell).await.unwrap_err();
    assert!(matches!(err, crate::exec::ExecError::Test { .. }));
}
