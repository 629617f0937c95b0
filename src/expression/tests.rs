//! Tests for expression parsing, rendering, evaluation and canonical forms

use super::*;
use crate::cover::Cover;
use crate::qm;
use proptest::prelude::*;
use std::collections::HashMap;

fn parse(input: &str) -> BoolExpr {
    BoolExpr::parse(input).unwrap()
}

fn assignment(pairs: &[(&str, bool)]) -> HashMap<Arc<str>, bool> {
    pairs
        .iter()
        .map(|(name, value)| (Arc::from(*name), *value))
        .collect()
}

// ===== Parsing =====

#[test]
fn test_parse_precedence() {
    // AND binds tighter than OR.
    assert_eq!(parse("a + b * c").to_string(), "a + b * c");
    assert_eq!(parse("(a + b) * c").to_string(), "(a + b) * c");
    assert_eq!(parse("~a * b").to_string(), "~a * b");
}

#[test]
fn test_parse_operator_aliases() {
    assert!(parse("a | b").equivalent_to(&parse("a + b")));
    assert!(parse("a & b").equivalent_to(&parse("a * b")));
    assert!(parse("!a").equivalent_to(&parse("~a")));
}

#[test]
fn test_parse_constants() {
    assert_eq!(parse("1").as_constant(), Some(true));
    assert_eq!(parse("0").as_constant(), Some(false));
    assert_eq!(parse("true").as_constant(), Some(true));
    assert_eq!(parse("false").as_constant(), Some(false));
}

#[test]
fn test_parse_identifiers() {
    let expr = parse("x_1 * Some_Var + _z");
    let variables: Vec<String> = expr.variables().iter().map(|v| v.to_string()).collect();
    assert_eq!(variables, vec!["Some_Var", "_z", "x_1"]);
}

#[test]
fn test_parse_nested_negation() {
    assert_eq!(parse("~~a").to_string(), "~~a");
    assert_eq!(parse("~(a + b)").to_string(), "~(a + b)");
}

#[test]
fn test_parse_errors() {
    assert!(BoolExpr::parse("").is_err());
    assert!(BoolExpr::parse("a +").is_err());
    assert!(BoolExpr::parse("a ++ b").is_err());
    assert!(BoolExpr::parse("(a * b").is_err());
    assert!(BoolExpr::parse("a $ b").is_err());
}

#[test]
fn test_parse_error_reports_input() {
    let err = BoolExpr::parse("a ** b").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("a ** b"));
}

// ===== Display =====

#[test]
fn test_display_minimal_parentheses() {
    let a = BoolExpr::variable("a");
    let b = BoolExpr::variable("b");
    let c = BoolExpr::variable("c");

    assert_eq!(a.and(&b).or(&c).to_string(), "a * b + c");
    assert_eq!(a.or(&b).and(&c).to_string(), "(a + b) * c");
    assert_eq!(a.and(&b).not().to_string(), "~(a * b)");
    assert_eq!(a.clone().not().and(&b).to_string(), "~a * b");
    assert_eq!(a.not().not().to_string(), "~~a");
}

#[test]
fn test_display_round_trips_through_parser() {
    for input in ["a * b + ~c", "~(a + b * c)", "(a + b) * (c + ~d)"] {
        let expr = parse(input);
        let reparsed = parse(&expr.to_string());
        assert!(expr.equivalent_to(&reparsed), "{} changed meaning", input);
    }
}

// ===== Evaluation =====

#[test]
fn test_evaluate() {
    let expr = parse("a * ~b + c");
    assert!(expr.evaluate(&assignment(&[("a", true), ("b", false), ("c", false)])));
    assert!(!expr.evaluate(&assignment(&[("a", true), ("b", true), ("c", false)])));
    assert!(expr.evaluate(&assignment(&[("a", false), ("b", true), ("c", true)])));
}

#[test]
fn test_evaluate_missing_variables_read_false() {
    let expr = parse("a + ~b");
    assert!(expr.evaluate(&HashMap::new()));
}

#[test]
fn test_operator_overloads() {
    let a = BoolExpr::variable("a");
    let b = BoolExpr::variable("b");
    let built = &a * &b + !(&a);
    let spelled = parse("a * b + ~a");
    assert!(built.equivalent_to(&spelled));
}

#[test]
fn test_equivalent_to_over_different_variable_sets() {
    // b * ~b is unsatisfiable regardless of the extra variable.
    assert!(parse("a * b * ~b").equivalent_to(&parse("0")));
    assert!(!parse("a").equivalent_to(&parse("b")));
}

#[test]
fn test_on_set_minterms_are_sorted() {
    let expr = parse("a + b");
    let variables = expr.variables();
    let minterms: Vec<String> = expr
        .on_set_minterms(&variables)
        .iter()
        .map(|m| m.to_string())
        .collect();
    assert_eq!(minterms, vec!["01", "10", "11"]);
}

// ===== Truth tables =====

#[test]
fn test_truth_table_format() {
    let table = parse("a * b").truth_table();
    assert_eq!(table.variables().len(), 2);
    assert_eq!(table.rows().len(), 4);
    assert_eq!(
        table.to_string(),
        "a b | f\n0 0 | 0\n0 1 | 0\n1 0 | 0\n1 1 | 1\n"
    );
}

#[test]
fn test_truth_table_of_constant() {
    let table = parse("1 + 0").truth_table();
    assert_eq!(table.to_string(), "1\n");
}

// ===== Canonical forms =====

#[test]
fn test_std_dij() {
    assert_eq!(parse("a + b").std_dij().to_string(), "~a * b + a * ~b + a * b");
    assert_eq!(parse("a * ~a").std_dij().to_string(), "0");
    assert_eq!(parse("true").std_dij().to_string(), "1");
}

#[test]
fn test_std_conj() {
    assert_eq!(
        parse("a * b").std_conj().to_string(),
        "(a + b) * (a + ~b) * (~a + b)"
    );
    assert_eq!(parse("a + ~a").std_conj().to_string(), "1");
    assert_eq!(parse("false").std_conj().to_string(), "0");
}

// ===== Cover bridging =====

#[test]
fn test_cover_from_expr() {
    let cover = Cover::from_expr(&parse("a * ~b + ~a * b"));
    assert_eq!(cover.to_string(), "a,b,01,10");
}

#[test]
fn test_cover_to_expr() {
    let cover = Cover::from_strings(["a", "b", "c"], ["11-", "0-1"]).unwrap();
    assert_eq!(cover.to_expr().to_string(), "a * b + ~a * c");
}

#[test]
fn test_cover_to_expr_degenerate() {
    assert_eq!(Cover::new(["a", "b"]).to_expr().to_string(), "0");
    let universe = Cover::from_strings(["a", "b"], ["10", "--"]).unwrap();
    assert_eq!(universe.to_expr().to_string(), "1");
}

#[test]
fn test_cover_round_trip_preserves_semantics() {
    let expr = parse("a * b + ~c");
    let round_tripped = Cover::from_expr(&expr).to_expr();
    assert!(expr.equivalent_to(&round_tripped));
}

// ===== Properties =====

fn arb_expr() -> impl Strategy<Value = BoolExpr> {
    let leaf = prop_oneof![
        any::<bool>().prop_map(BoolExpr::constant),
        (0usize..4).prop_map(|i| BoolExpr::variable(["a", "b", "c", "d"][i])),
    ];
    leaf.prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| l.and(&r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| l.or(&r)),
            inner.prop_map(|e| e.not()),
        ]
    })
}

proptest! {
    #[test]
    fn proptest_minimize_preserves_semantics(expr in arb_expr()) {
        let simplified = qm::minimize(&expr);
        prop_assert!(expr.equivalent_to(&simplified));
    }

    #[test]
    fn proptest_minimize_is_deterministic(expr in arb_expr()) {
        prop_assert_eq!(
            qm::minimize(&expr).to_string(),
            qm::minimize(&expr).to_string()
        );
    }

    #[test]
    fn proptest_std_dij_preserves_semantics(expr in arb_expr()) {
        prop_assert!(expr.equivalent_to(&expr.std_dij()));
    }

    #[test]
    fn proptest_std_conj_preserves_semantics(expr in arb_expr()) {
        prop_assert!(expr.equivalent_to(&expr.std_conj()));
    }

    #[test]
    fn proptest_display_round_trips(expr in arb_expr()) {
        let reparsed = BoolExpr::parse(&expr.to_string()).unwrap();
        prop_assert!(expr.equivalent_to(&reparsed));
    }

    #[test]
    fn proptest_expr_complement_flips_every_assignment(expr in arb_expr()) {
        let complement = Cover::from_expr(&expr).complement().to_expr();
        let united = expr.or(&complement);
        prop_assert!(united.equivalent_to(&BoolExpr::constant(true)));
        let shared = expr.and(&complement);
        prop_assert!(shared.equivalent_to(&BoolExpr::constant(false)));
    }
}
