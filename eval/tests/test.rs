use ast::ast::{Block, Expression, InfixOp, PrefixOp, Program, Statement};
use ast::{Node, NodeKind};
use eval::{eval, eval_program, EvalError, Evaluator, Mode, Value};
use parser::parse;

fn int(v: i64) -> Expression {
    Expression::IntegerLiteral(v)
}

fn stmt(e: Expression) -> Statement {
    Statement::Expression(e)
}

#[test]
fn integer_literals() {
    let _ = env_logger::try_init();
    for v in [5, 0, 10, -1, i64::MAX, i64::MIN] {
        assert_eq!(eval(&int(v)), Some(Value::Integer(v)));
    }
}

#[test]
fn expression_statement_passes_through() {
    let _ = env_logger::try_init();
    let exprs = [
        int(7),
        Expression::Boolean(true),
        Expression::Identifier("x".to_string()),
    ];
    for e in exprs {
        assert_eq!(eval(&stmt(e.clone())), eval(&e));
    }
}

#[test]
fn program_yields_last_statement() {
    let _ = env_logger::try_init();
    let program = Program::new(vec![stmt(int(5)), stmt(int(10))]);
    assert_eq!(eval_program(&program), Some(Value::Integer(10)));
}

#[test]
fn empty_program_is_absent() {
    let _ = env_logger::try_init();
    assert_eq!(eval_program(&Program::default()), None);
    assert_eq!(Evaluator::new(Mode::Strict).eval(Node::Program(&Program::default())), Ok(None));
}

#[test]
fn evaluation_is_repeatable() {
    let _ = env_logger::try_init();
    let program = Program::new(vec![stmt(int(3)), stmt(int(4))]);
    let first = eval_program(&program);
    let second = eval_program(&program);
    assert_eq!(first, Some(Value::Integer(4)));
    assert_eq!(first, second);
    assert_eq!(program, Program::new(vec![stmt(int(3)), stmt(int(4))]));
}

#[test]
fn unsupported_nodes_are_absent() {
    let _ = env_logger::try_init();
    let exprs = [
        Expression::Boolean(false),
        Expression::Identifier("foo".to_string()),
        Expression::Prefix(PrefixOp::Neg, Box::new(int(5))),
        Expression::Infix(Box::new(int(1)), InfixOp::Add, Box::new(int(2))),
        Expression::If(Box::new(int(1)), Block::new(vec![stmt(int(2))]), None),
        Expression::Function(vec!["x".to_string()], Block::default()),
        Expression::Call(Box::new(Expression::Identifier("f".to_string())), vec![int(1)]),
    ];
    for e in &exprs {
        assert_eq!(eval(e), None, "{}", e);
    }
    assert_eq!(eval(&Statement::Let("x".to_string(), int(5))), None);
    assert_eq!(eval(&Statement::Return(int(5))), None);
    assert_eq!(eval(&Block::new(vec![stmt(int(5))])), None);
}

#[test]
fn unsupported_last_statement_hides_earlier_values() {
    let _ = env_logger::try_init();
    let program = Program::new(vec![stmt(int(5)), stmt(Expression::Boolean(true))]);
    assert_eq!(eval_program(&program), None);
}

#[test]
fn strict_mode_reports_unsupported_kind() {
    let _ = env_logger::try_init();
    let strict = Evaluator::new(Mode::Strict);
    assert_eq!(strict.mode(), Mode::Strict);
    assert_eq!(
        strict.eval(Node::Expression(&Expression::Boolean(true))),
        Err(EvalError::UnsupportedNode(NodeKind::Boolean))
    );
    let program = Program::new(vec![
        Statement::Let("x".to_string(), int(1)),
        stmt(int(2)),
    ]);
    assert_eq!(
        strict.eval(Node::Program(&program)),
        Err(EvalError::UnsupportedNode(NodeKind::LetStatement))
    );
    assert_eq!(
        strict.eval(Node::Program(&Program::new(vec![stmt(int(2))]))),
        Ok(Some(Value::Integer(2)))
    );
}

#[test]
fn lenient_mode_is_default() {
    let _ = env_logger::try_init();
    let evaluator = Evaluator::default();
    assert_eq!(evaluator.mode(), Mode::Lenient);
    assert_eq!(evaluator.eval(Node::Block(&Block::default())), Ok(None));
}

#[test]
fn value_rendering() {
    let v = Value::Integer(42);
    assert_eq!(v.to_string(), "42");
    assert_eq!(v.type_name(), "INTEGER");
}

#[test]
fn integers_file() {
    let _ = env_logger::try_init();
    let src = include_str!("./files/integers.monkey");
    let ast = parse(src).unwrap();
    assert_eq!(eval_program(&ast), Some(Value::Integer(10)));
}

#[test]
fn mixed_file() {
    let _ = env_logger::try_init();
    let src = include_str!("./files/mixed.monkey");
    let ast = parse(src).unwrap();
    assert_eq!(eval_program(&ast), Some(Value::Integer(42)));
    assert_eq!(
        Evaluator::new(Mode::Strict).eval(Node::Program(&ast)),
        Err(EvalError::UnsupportedNode(NodeKind::LetStatement))
    );
}

#[test]
fn trailing_binding_file() {
    let _ = env_logger::try_init();
    let src = include_str!("./files/trailing_binding.monkey");
    let ast = parse(src).unwrap();
    assert_eq!(eval_program(&ast), None);
}

#[test]
fn empty_file() {
    let _ = env_logger::try_init();
    let src = include_str!("./files/empty.monkey");
    let ast = parse(src).unwrap();
    assert_eq!(eval_program(&ast), None);
}

#[test]
fn max_integer_source() {
    let _ = env_logger::try_init();
    let ast = parse("9223372036854775807;").unwrap();
    assert_eq!(eval_program(&ast), Some(Value::Integer(i64::MAX)));
}
