//! Properties of the simplification pipeline

use bit_set::BitSet;
use itertools::Itertools;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use qmkit::{
    evaluate, parse_postfix, render, simplify, simplify_str, to_postfix, tokenize, variables,
    Assignment, Minimizer, Pattern, QmcError,
};
use rstest::rstest;

#[rstest]
#[case("1&1", "1")]
#[case("0&1", "0")]
#[case("A&~A", "0")]
#[case("A|~A", "1")]
#[case("A&A", "A")]
#[case("(A&B)|(A&~B)", "A")]
#[case("A & ~B | B & C | A & C", "B&C|A&~B")]
#[case("A > B", "B|~A")]
#[case("~(A | B)", "~A&~B")]
#[case("Z9 ^ 1", "~Z9")]
fn simplified(#[case] source: &str, #[case] expected: &str) -> Result<(), QmcError> {
    assert_eq!(simplify_str(source)?, expected);
    Ok(())
}

/// All assignments of the variables of an expression
fn assignments(source: &str) -> Vec<Assignment> {
    let names = variables(&tokenize(source));
    (0..1usize << names.len())
        .map(|i| Assignment::from_index(&names, i))
        .collect()
}

fn any_expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        Just("0".to_string()),
        Just("1".to_string()),
        prop::sample::select(vec!["A", "B", "C", "D"]).prop_map(String::from),
    ];
    leaf.prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|e| format!("~{}", e)),
            inner.clone().prop_map(|e| format!("({})", e)),
            (
                inner.clone(),
                prop::sample::select(vec!["^", "&", "|", ">", "="]),
                inner
            )
                .prop_map(|(a, op, b)| format!("{} {} {}", a, op, b)),
        ]
    })
}

proptest! {
    #[test]
    fn simplification_is_equivalent(source in any_expression()) {
        let original = to_postfix(&tokenize(&source)).unwrap();
        let simplified = to_postfix(&simplify(&tokenize(&source)).unwrap()).unwrap();
        for assignment in assignments(&source) {
            prop_assert_eq!(
                evaluate(&original, &assignment).unwrap(),
                evaluate(&simplified, &assignment).unwrap()
            );
        }
    }

    #[test]
    fn simplification_is_idempotent(source in any_expression()) {
        let once = simplify_str(&source).unwrap();
        let twice = simplify_str(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn rendered_tokens_are_stable(source in any_expression()) {
        let simplified = simplify(&tokenize(&source)).unwrap();
        prop_assert_eq!(tokenize(&render(&simplified)), simplified);
    }

    #[test]
    fn grammar_matches_shunting_yard(source in any_expression()) {
        prop_assert_eq!(parse_postfix(&source).unwrap(), to_postfix(&tokenize(&source)).unwrap());
    }
}

/// Smallest number of product terms needed to cover a function of 3 variables
fn brute_force_cover_size(minterms: &BitSet) -> usize {
    let cubes: Vec<BitSet> = (0..3)
        .map(|_| ["-", "0", "1"])
        .multi_cartesian_product()
        .map(|chars| chars.concat().parse::<Pattern>().unwrap().minterms())
        .filter(|cube| cube.is_subset(minterms))
        .collect();

    (0..=cubes.len())
        .find(|&size| {
            cubes.iter().combinations(size).any(|candidate| {
                let mut covered = BitSet::default();
                for cube in candidate {
                    covered.union_with(cube);
                }
                covered.is_superset(minterms)
            })
        })
        .unwrap()
}

#[test]
fn all_functions_of_three_variables() -> Result<(), QmcError> {
    let names = ["A", "B", "C"];
    let minimizer = Minimizer::default();

    for function in 1..255usize {
        let minterms: BitSet = (0..8).filter(|i| function >> i & 1 == 1).collect();
        let source = minterms
            .iter()
            .map(|i| {
                names
                    .iter()
                    .enumerate()
                    .map(|(j, name)| match i >> j & 1 {
                        1 => name.to_string(),
                        _ => format!("~{}", name),
                    })
                    .join(" & ")
            })
            .join(" | ");

        let minimization = minimizer.minimize(&tokenize(&source))?;
        assert_eq!(minimization.minterms(), &minterms, "{}", source);
        assert_eq!(
            minimization.cover().len(),
            brute_force_cover_size(&minterms),
            "{}",
            source
        );
    }
    Ok(())
}
