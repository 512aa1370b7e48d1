// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! List and range brace expansion.

use super::*;

fn boxed(expander: Expander) -> Option<Box<Expander>> {
    Some(Box::new(expander))
}

#[tokio::test]
async fn plain_list_brace() {
    let brace = Expander::ListBrace {
        prefix: None,
        suffix: None,
        words: vec![word("a"), word("b"), word("c")],
    };
    assert_eq!(expand(&brace).await, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn prefix_and_suffix_combine() {
    let brace = Expander::ListBrace {
        prefix: boxed(word("img")),
        suffix: boxed(word(".png")),
        words: vec![word("1"), word("2")],
    };
    assert_eq!(expand(&brace).await, vec!["img1.png", "img2.png"]);
}

#[tokio::test]
async fn multi_valued_suffix_is_cartesian() {
    let brace = Expander::ListBrace {
        prefix: None,
        suffix: boxed(Expander::ListBrace {
            prefix: None,
            suffix: None,
            words: vec![word("1"), word("2")],
        }),
        words: vec![word("a"), word("b")],
    };
    assert_eq!(expand(&brace).await, vec!["a1", "a2", "b1", "b2"]);
}

#[tokio::test]
async fn nested_list_flattens() {
    // {{A,B},{1..3}} expands to the concatenation of its members.
    let brace = Expander::ListBrace {
        prefix: None,
        suffix: None,
        words: vec![
            Expander::ListBrace {
                prefix: None,
                suffix: None,
                words: vec![word("A"), word("B")],
            },
            Expander::RangeBrace {
                prefix: None,
                suffix: None,
                from: 1,
                to: 3,
                step: 1,
                pad: 0,
            },
        ],
    };
    assert_eq!(expand(&brace).await, vec!["A", "B", "1", "2", "3"]);
}

#[tokio::test]
async fn range_counts_inclusively() {
    let brace = Expander::RangeBrace {
        prefix: None,
        suffix: None,
        from: 2,
        to: 6,
        step: 1,
        pad: 0,
    };
    let values = expand(&brace).await;
    assert_eq!(values.len(), 5);
    assert_eq!(values, vec!["2", "3", "4", "5", "6"]);
}

#[tokio::test]
async fn range_reverses_direction() {
    let brace = Expander::RangeBrace {
        prefix: None,
        suffix: None,
        from: 3,
        to: 1,
        step: 1,
        pad: 0,
    };
    assert_eq!(expand(&brace).await, vec!["3", "2", "1"]);
}

#[tokio::test]
async fn range_steps() {
    let brace = Expander::RangeBrace {
        prefix: None,
        suffix: None,
        from: 1,
        to: 9,
        step: 3,
        pad: 0,
    };
    assert_eq!(expand(&brace).await, vec!["1", "4", "7"]);
}

#[tokio::test]
async fn zero_step_is_forced_to_one() {
    let brace = Expander::RangeBrace {
        prefix: None,
        suffix: None,
        from: 1,
        to: 3,
        step: 0,
        pad: 0,
    };
    assert_eq!(expand(&brace).await, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn zero_padding() {
    let brace = Expander::RangeBrace {
        prefix: None,
        suffix: None,
        from: 8,
        to: 11,
        step: 1,
        pad: 2,
    };
    assert_eq!(expand(&brace).await, vec!["08", "09", "10", "11"]);
}

#[tokio::test]
async fn range_with_affixes() {
    let brace = Expander::RangeBrace {
        prefix: boxed(word("v")),
        suffix: boxed(word(".0")),
        from: 1,
        to: 2,
        step: 1,
        pad: 0,
    };
    assert_eq!(expand(&brace).await, vec!["v1.0", "v2.0"]);
}

#[tokio::test]
async fn negative_range() {
    let brace = Expander::RangeBrace {
        prefix: None,
        suffix: None,
        from: -1,
        to: 1,
        step: 1,
        pad: 0,
    };
    assert_eq!(expand(&brace).await, vec!["-1", "0", "1"]);
}
