use crate::{Expr, Literal, Range, RxForm, Value};

#[test]
fn literal_display_forms() {
    assert_eq!(Literal::Text("hi there".to_string()).to_string(), "\"hi there\"");
    assert_eq!(Literal::Symbol("now".to_string()).to_string(), "now");
    assert_eq!(Literal::Int(-3).to_string(), "-3");
}

#[test]
fn literal_conversions() {
    assert_eq!(Literal::from("x"), Literal::Text("x".to_string()));
    assert_eq!(Literal::from(7i64), Literal::Int(7));
    assert_eq!(Literal::Int(7).as_plain(), "7");
    assert_eq!(Literal::Symbol("seen".to_string()).as_plain(), "seen");
}

#[test]
fn range_display_marks_absent_sides() {
    let sym = |s: &str| Literal::Symbol(s.to_string());
    assert_eq!(Range::between(sym("2w"), sym("now")).to_string(), "(2w .. now)");
    assert_eq!(Range::until(sym("now")).to_string(), "(.. now)");
    assert_eq!(Range::from_start(sym("2w")).to_string(), "(2w ..)");
    assert_eq!(Range::default().to_string(), "(..)");
}

#[test]
fn field_display_is_symbolic() {
    let e = Expr::field("subject", "hello world");
    assert_eq!(e.to_string(), "(subject \"hello world\")");
}

#[test]
fn set_display_names_the_op() {
    let v = Value::one_of(["a", "b"]);
    assert_eq!(v.to_string(), "(one-of \"a\" \"b\")");
    let v = Value::all_of(["a"]);
    assert_eq!(v.to_string(), "(all-of \"a\")");
}

#[test]
fn logical_display_is_a_sibling_list() {
    let e = Expr::not([Expr::field("flag", Expr::symbol("seen")), Expr::text("x")]);
    assert_eq!(e.to_string(), "(not (flag seen) \"x\")");
    assert_eq!(Expr::or_of([]).to_string(), "(or)");
}

#[test]
fn rx_form_display_nests() {
    let form = RxForm::List(vec![
        RxForm::Symbol("seq".to_string()),
        RxForm::Text("ab".to_string()),
        RxForm::List(vec![RxForm::Symbol("digit".to_string()), RxForm::Int(3)]),
    ]);
    assert_eq!(Expr::rx(form).to_string(), "(rx (seq \"ab\" (digit 3)))");
}

#[test]
fn value_conversions_wrap_expressions() {
    assert_eq!(
        Value::from("x"),
        Value::Expr(Box::new(Expr::Literal(Literal::Text("x".to_string()))))
    );
    assert!(matches!(Value::from(Range::default()), Value::Range(_)));
    assert!(matches!(Value::from(Expr::regex("a")), Value::Expr(_)));
}

#[test]
fn serde_round_trips_the_tree() {
    let expr = Expr::field(
        "flag",
        Value::one_of([Expr::symbol("seen"), Expr::symbol("flagged")]),
    );
    let json = serde_json::to_string(&expr).unwrap();
    let back: Expr = serde_json::from_str(&json).unwrap();
    assert_eq!(back, expr);
}
