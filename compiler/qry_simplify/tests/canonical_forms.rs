#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
//! End-to-end tests for the canonical forms the simplifier produces.
//!
//! Each test builds a value graph the way the symbolic-execution front end
//! would, runs [`simplify_with`] on it and checks the rendered result.

use pretty_assertions::assert_eq;
use qry_ir::{
    ComparisonOp, IrError, MathOp, MethodSignature, StringInterner, ValueArena, ValueId,
    ValueKind, ValueType,
};
use qry_simplify::{init_tracing, simplify, simplify_with, SimplifyConfig, SimplifyError};

fn simplified(arena: &mut ValueArena, root: ValueId) -> String {
    init_tracing();
    let out = simplify_with(arena, root, &SimplifyConfig::new()).unwrap();
    arena.display(out, &StringInterner::new()).to_string()
}

#[test]
fn equal_literals_fold_to_one() {
    for (a, b, eq, ne) in [(7, 7, "1", "0"), (7, -7, "0", "1"), (0, 0, "1", "0")] {
        let mut arena = ValueArena::new();
        let l = arena.int(a);
        let r = arena.int(b);
        let eq_root = arena.comparison(ComparisonOp::Eq, l, r);
        let ne_root = arena.comparison(ComparisonOp::Ne, l, r);
        assert_eq!(simplified(&mut arena, eq_root), eq);
        assert_eq!(simplified(&mut arena, ne_root), ne);
    }
}

#[test]
fn zero_on_left_moves_right() {
    let mut arena = ValueArena::new();
    let zero = arena.int(0);
    let x = arena.arg(2, ValueType::Int);
    let root = arena.comparison(ComparisonOp::Lt, zero, x);
    assert_eq!(simplified(&mut arena, root), "gt(arg2, 0)");
}

#[test]
fn three_way_compare_collapses() {
    for op in [MathOp::Cmp, MathOp::Cmpl, MathOp::Cmpg] {
        let mut arena = ValueArena::new();
        let a = arena.arg(0, ValueType::Double);
        let b = arena.arg(1, ValueType::Double);
        let cmp = arena.math_op(op, a, b);
        let zero = arena.int(0);
        let root = arena.comparison(ComparisonOp::Eq, cmp, zero);
        assert_eq!(simplified(&mut arena, root), "eq(arg0, arg1)");
    }
}

#[test]
fn three_way_compare_collapses_for_every_operator() {
    for op in ComparisonOp::ALL {
        let mut arena = ValueArena::new();
        let a = arena.arg(0, ValueType::Long);
        let b = arena.arg(1, ValueType::Long);
        let cmp = arena.math_op(MathOp::Cmp, a, b);
        let zero = arena.int(0);
        let root = arena.comparison(op, cmp, zero);
        assert_eq!(
            simplified(&mut arena, root),
            format!("{}(arg0, arg1)", op.name())
        );
    }
}

#[test]
fn comparison_against_zero_is_inverted() {
    let mut arena = ValueArena::new();
    let a = arena.arg(0, ValueType::Int);
    let b = arena.arg(1, ValueType::Int);
    let lt = arena.comparison(ComparisonOp::Lt, a, b);
    let zero = arena.int(0);
    let root = arena.comparison(ComparisonOp::Eq, lt, zero);
    assert_eq!(simplified(&mut arena, root), "ge(arg0, arg1)");
}

#[test]
fn boolean_call_against_zero() {
    let interner = StringInterner::new();
    let is_empty = MethodSignature::intern(&interner, "java/lang/String", "isEmpty", "()Z");
    let mut arena = ValueArena::new();
    let s = arena.arg(0, ValueType::STRING);
    let call = arena.virtual_call(is_empty, s, &[], ValueType::Boolean);
    let zero = arena.int(0);
    let eq_root = arena.comparison(ComparisonOp::Eq, call, zero);
    let ne_root = arena.comparison(ComparisonOp::Ne, call, zero);

    let eq_out = simplify_with(&mut arena, eq_root, &SimplifyConfig::new()).unwrap();
    assert_eq!(*arena.kind(eq_out), ValueKind::Not(call));
    let ne_out = simplify_with(&mut arena, ne_root, &SimplifyConfig::new()).unwrap();
    assert_eq!(ne_out, call);
}

#[test]
fn recognized_method_becomes_comparison() {
    let mut arena = ValueArena::new();
    let s1 = arena.arg(0, ValueType::STRING);
    let s2 = arena.string(StringInterner::new().intern("alice"));
    let root = arena.virtual_call(
        MethodSignature::STRING_EQUALS,
        s1,
        &[s2],
        ValueType::Boolean,
    );
    let out = simplify_with(&mut arena, root, &SimplifyConfig::new()).unwrap();
    assert_eq!(
        *arena.kind(out),
        ValueKind::Comparison {
            op: ComparisonOp::Eq,
            left: s1,
            right: s2
        }
    );
}

#[test]
fn unrecognized_method_is_unchanged() {
    let interner = StringInterner::new();
    let contains = MethodSignature::intern(
        &interner,
        "java/lang/String",
        "contains",
        "(Ljava/lang/CharSequence;)Z",
    );
    let mut arena = ValueArena::new();
    let s1 = arena.arg(0, ValueType::STRING);
    let s2 = arena.arg(1, ValueType::STRING);
    let root = arena.virtual_call(contains, s1, &[s2], ValueType::Boolean);
    let before = arena.len();

    assert_eq!(
        simplify_with(&mut arena, root, &SimplifyConfig::new()),
        Ok(root)
    );
    assert_eq!(arena.len(), before);
}

#[test]
fn negated_date_comparison_in_filter() {
    // !(d.before(param)) == 0, as a filter lambda over a date column compiles.
    let mut arena = ValueArena::new();
    let d = arena.arg(0, ValueType::DATE);
    let param = arena.arg(1, ValueType::DATE);
    let before = arena.virtual_call(
        MethodSignature::DATE_BEFORE,
        d,
        &[param],
        ValueType::Boolean,
    );
    let zero = arena.int(0);
    let root = arena.comparison(ComparisonOp::Eq, before, zero);
    assert_eq!(simplified(&mut arena, root), "ge(arg0, arg1)");
}

#[test]
fn simplified_form_is_a_fixed_point() {
    let mut arena = ValueArena::new();
    let a = arena.arg(0, ValueType::Int);
    let b = arena.arg(1, ValueType::Int);
    let c = arena.arg(2, ValueType::Int);
    let sum = arena.math_op(MathOp::Add, a, b);
    let lt = arena.comparison(ComparisonOp::Lt, sum, c);
    let root = arena.not(lt);
    let before = arena.len();

    assert_eq!(
        simplify_with(&mut arena, root, &SimplifyConfig::new()),
        Ok(root)
    );
    assert_eq!(arena.len(), before);
}

#[test]
fn second_run_changes_nothing() {
    let mut arena = ValueArena::new();
    let a = arena.arg(0, ValueType::Long);
    let b = arena.arg(1, ValueType::Long);
    let cmp = arena.math_op(MathOp::Cmp, a, b);
    let zero = arena.int(0);
    let ge = arena.comparison(ComparisonOp::Ge, zero, cmp);
    let s1 = arena.arg(2, ValueType::STRING);
    let s2 = arena.arg(3, ValueType::STRING);
    let eq = arena.virtual_call(
        MethodSignature::STRING_EQUALS,
        s1,
        &[s2],
        ValueType::Boolean,
    );
    let root = arena.comparison(ComparisonOp::Ne, ge, eq);

    let once = simplify_with(&mut arena, root, &SimplifyConfig::new()).unwrap();
    let len = arena.len();
    let twice = simplify_with(&mut arena, once, &SimplifyConfig::new()).unwrap();
    assert_eq!(twice, once);
    assert_eq!(arena.len(), len);
    assert_eq!(
        arena.display(once, &StringInterner::new()).to_string(),
        "ne(le(arg0, arg1), eq(arg2, arg3))"
    );
}

fn simplify_code(code: u8) -> Result<String, SimplifyError> {
    let mut arena = ValueArena::new();
    let a = arena.arg(0, ValueType::Long);
    let b = arena.arg(1, ValueType::Long);
    let cmp = arena.math_op(MathOp::Cmpg, a, b);
    let zero = arena.int(0);
    let root = arena.comparison_from_code(code, zero, cmp)?;
    let out = simplify_with(&mut arena, root, &SimplifyConfig::new())?;
    Ok(arena.display(out, &StringInterner::new()).to_string())
}

#[test]
fn every_operator_code_is_total() {
    for code in 0..=u8::MAX {
        match ComparisonOp::from_code(code) {
            Ok(op) => {
                let expected = format!("{}(arg0, arg1)", op.mirror().name());
                assert_eq!(simplify_code(code), Ok(expected));
            }
            Err(_) => assert_eq!(
                simplify_code(code),
                Err(SimplifyError::Ir(IrError::UnknownComparisonOperator {
                    code
                }))
            ),
        }
    }
}

fn simplify_math_code(code: u8) -> Result<String, SimplifyError> {
    let mut arena = ValueArena::new();
    let a = arena.arg(0, ValueType::Long);
    let b = arena.arg(1, ValueType::Long);
    let math = arena.math_op_from_code(code, a, b)?;
    let zero = arena.int(0);
    let root = arena.comparison(ComparisonOp::Lt, math, zero);
    let out = simplify_with(&mut arena, root, &SimplifyConfig::new())?;
    Ok(arena.display(out, &StringInterner::new()).to_string())
}

#[test]
fn every_math_code_is_total() {
    for code in 0..=u8::MAX {
        match MathOp::from_code(code) {
            Ok(op) if op.is_three_way() => {
                assert_eq!(simplify_math_code(code), Ok("lt(arg0, arg1)".to_owned()));
            }
            Ok(op) => assert_eq!(
                simplify_math_code(code),
                Ok(format!("lt({}(arg0, arg1), 0)", op.name()))
            ),
            Err(_) => assert_eq!(
                simplify_math_code(code),
                Err(SimplifyError::Ir(IrError::UnknownMathOperator { code }))
            ),
        }
    }
}

#[test]
fn deep_negation_chain() {
    let mut arena = ValueArena::new();
    let a = arena.arg(0, ValueType::Long);
    let b = arena.arg(1, ValueType::Long);
    let cmp = arena.math_op(MathOp::Cmp, a, b);
    let zero = arena.int(0);
    let mut root = arena.comparison(ComparisonOp::Lt, cmp, zero);
    let depth = 50_000;
    for _ in 0..depth {
        root = arena.not(root);
    }

    let mut node = simplify_with(&mut arena, root, &SimplifyConfig::new()).unwrap();
    for _ in 0..depth {
        let ValueKind::Not(operand) = *arena.kind(node) else {
            panic!("negation chain was preserved");
        };
        node = operand;
    }
    assert_eq!(
        *arena.kind(node),
        ValueKind::Comparison {
            op: ComparisonOp::Lt,
            left: a,
            right: b
        }
    );
}

#[test]
fn distinct_graphs_simplify_in_parallel() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let mut arena = ValueArena::new();
                let d1 = arena.arg(i, ValueType::DATE);
                let d2 = arena.arg(i + 1, ValueType::DATE);
                let root = arena.virtual_call(
                    MethodSignature::SQL_TIMESTAMP_AFTER,
                    d1,
                    &[d2],
                    ValueType::Boolean,
                );
                let out = simplify(&mut arena, root).unwrap();
                arena.display(out, &StringInterner::new()).to_string()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(
            handle.join().unwrap(),
            format!("gt(arg{i}, arg{})", i + 1)
        );
    }
}
