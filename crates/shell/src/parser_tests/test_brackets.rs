// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `[[ ... ]]` parsing.

use super::*;
use crate::tester::{BinaryTest, Tester, UnaryTest};

fn tester_of(input: &str) -> Tester {
    match parse_one(input) {
        Executer::Test(test) => test.tester,
        other => panic!("expected a test statement, got {other:?}"),
    }
}

#[test]
fn unary_file_predicate() {
    assert_eq!(
        tester_of("[[ -d testdata ]]"),
        Tester::Unary {
            op: UnaryTest::Directory,
            expr: word("testdata"),
        }
    );
}

#[test]
fn binary_numeric_comparison() {
    assert_eq!(
        tester_of("[[ $count -ge 10 ]]"),
        Tester::Binary {
            op: BinaryTest::Ge,
            left: Expander::Variable { ident: "count".into(), quoted: false },
            right: word("10"),
        }
    );
}

#[test]
fn file_time_comparison() {
    assert_eq!(
        tester_of("[[ new.log -nt old.log ]]"),
        Tester::Binary {
            op: BinaryTest::NewerThan,
            left: word("new.log"),
            right: word("old.log"),
        }
    );
}

#[test]
fn negation() {
    assert_eq!(
        tester_of("[[ ! -e missing ]]"),
        Tester::Not(Box::new(Tester::Unary {
            op: UnaryTest::Exists,
            expr: word("missing"),
        }))
    );
}

#[test]
fn logical_chain() {
    match tester_of("[[ -n $a && -z $b || -e f ]]") {
        Tester::Or { left, right } => {
            assert!(matches!(*left, Tester::And { .. }));
            assert!(matches!(
                *right,
                Tester::Unary { op: UnaryTest::Exists, .. }
            ));
        }
        other => panic!("expected Or at the top, got {other:?}"),
    }
}

#[test]
fn parentheses_group() {
    match tester_of("[[ ( -n $a || -n $b ) && -e f ]]") {
        Tester::And { left, .. } => {
            assert!(matches!(*left, Tester::Or { .. }));
        }
        other => panic!("expected And at the top, got {other:?}"),
    }
}

#[test]
fn test_composes_with_and_or() {
    assert!(matches!(
        parse_one("[[ -d sub ]] && echo yes"),
        Executer::And { .. }
    ));
}
