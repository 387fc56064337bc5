// Value tracking across conditional blocks, and condition operand rules
mod common;
use common::{err, ok};

use sjcheck::review::{AssignmentError, CheckError, ConditionalError};
use sjcheck::types::VarType;

fn unassigned(name: &str) -> CheckError {
    CheckError::Assignment(AssignmentError::UnassignedReference { name: name.into() })
}

#[test]
fn unassigned_global_in_condition_fails() {
    let e = err("int x;\nvoid f() {\n if (x) {\n  return;\n }\n return;\n}");
    assert_eq!(e, CheckError::Conditional(ConditionalError::Unassigned { name: "x".into() }));
}

#[test]
fn value_given_inside_if_is_not_visible_after_it() {
    let src = "void f() {\n int a;\n if (true) {\n  a = 5;\n }\n int b = a;\n return;\n}";
    assert_eq!(err(src), unassigned("a"));
}

#[test]
fn value_given_inside_if_is_visible_inside_it() {
    ok("void f() {\n int a;\n if (true) {\n  a = 5;\n  int b = a;\n }\n return;\n}");
}

#[test]
fn value_given_inside_while_does_not_satisfy_later_condition() {
    let src = "void f() {\n boolean a;\n while (true) {\n  a = true;\n }\n if (a) {\n }\n return;\n}";
    assert_eq!(err(src), CheckError::Conditional(ConditionalError::Unassigned { name: "a".into() }));
}

#[test]
fn value_given_before_block_survives_reassignment_inside_it() {
    ok("void f() {\n int a;\n a = 1;\n if (true) {\n  a = 2;\n }\n int b = a;\n return;\n}");
}

#[test]
fn inner_block_rollback_reaches_enclosing_block() {
    let src = "void f() {\n int a;\n if (true) {\n  if (true) {\n   a = 1;\n  }\n  int b = a;\n }\n return;\n}";
    assert_eq!(err(src), unassigned("a"));
}

#[test]
fn global_assigned_in_one_method_is_unassigned_in_the_next() {
    let src = "int g;\nvoid f() {\n g = 1;\n int a = g;\n return;\n}\nvoid h() {\n int b = g;\n return;\n}";
    assert_eq!(err(src), unassigned("g"));
}

#[test]
fn global_assigned_at_top_level_stays_assigned() {
    ok("int g;\ng = 2;\nvoid h() {\n int b = g;\n return;\n}");
}

#[test]
fn condition_operands_must_be_numeric_or_boolean() {
    let e = err("void f(String s) {\n if (s) {\n }\n return;\n}");
    assert_eq!(e, CheckError::Conditional(ConditionalError::InvalidType { name: "s".into(), found: VarType::Str }));

    let e = err("char c = 'a';\nvoid f() {\n if (c) {\n }\n return;\n}");
    assert_eq!(e, CheckError::Conditional(ConditionalError::InvalidType { name: "c".into(), found: VarType::Char }));
}

#[test]
fn condition_operand_must_be_declared() {
    let e = err("void f() {\n while (q || true) {\n }\n return;\n}");
    assert_eq!(e, CheckError::Conditional(ConditionalError::Undeclared { name: "q".into() }));
}

#[test]
fn condition_operators_must_sit_between_operands() {
    let e = err("void f() {\n if (&& true) {\n }\n return;\n}");
    assert_eq!(
        e,
        CheckError::Conditional(ConditionalError::DanglingOperator { condition: "&& true".into() })
    );
    assert!(matches!(
        err("void f() {\n if (true || || false) {\n }\n return;\n}"),
        CheckError::Conditional(ConditionalError::Malformed { .. })
    ));
    assert_eq!(err("void f() {\n if () {\n }\n return;\n}"), CheckError::Conditional(ConditionalError::Empty));
}

#[test]
fn mixed_literal_and_variable_conditions() {
    ok("void f(int n, double d, boolean b) {\n if (true || -3 && 4.5 || n && d || b) {\n  while (false) {\n  }\n }\n return;\n}");
}

#[test]
fn conditions_see_inner_shadowing() {
    ok("String flag = \"no\";\nvoid f() {\n if (true) {\n  boolean flag = false;\n  if (flag) {\n  }\n }\n return;\n}");
}
