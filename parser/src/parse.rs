use crate::error::ParsingError;
use crate::error::ParsingError::GrammarError;
use crate::info_parse;
use ast::ast::{Block, Expression, InfixOp, IntType, PrefixOp, Program, Statement};
use log::info;
use pest::iterators::{Pair, Pairs};
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "grammar.pest"]
struct MonkeyParser;

type ParseResult<T> = Result<T, ParsingError>;

pub fn build_ast(source: &str) -> ParseResult<Program> {
    let mut pairs = MonkeyParser::parse(Rule::program, source)?;
    let program = pairs.next().ok_or(GrammarError)?;
    let statements = parse_statements(program.into_inner())?;
    info!("Found {} statements", statements.len());
    Ok(Program::new(statements))
}

fn parse_statements(pairs: Pairs<Rule>) -> ParseResult<Vec<Statement>> {
    pairs
        .filter(|p| p.as_rule() != Rule::EOI)
        .map(parse_statement)
        .collect()
}

// Keyword tokens only anchor the grammar; the builder never needs them.
fn significant(pair: Pair<'_, Rule>) -> impl Iterator<Item = Pair<'_, Rule>> {
    pair.into_inner().filter(|p| {
        !matches!(
            p.as_rule(),
            Rule::kw_let | Rule::kw_return | Rule::kw_fn | Rule::kw_if | Rule::kw_else
        )
    })
}

fn parse_statement(stmt: Pair<Rule>) -> ParseResult<Statement> {
    info_parse!("Statement", &stmt);
    let res = match stmt.as_rule() {
        Rule::let_statement => {
            let mut inner = significant(stmt);
            let name = parse_identifier(inner.next().ok_or(GrammarError)?)?;
            let value = parse_expr(inner.next().ok_or(GrammarError)?)?;
            Ok(Statement::Let(name, value))
        }
        Rule::return_statement => {
            let mut inner = significant(stmt);
            let value = parse_expr(inner.next().ok_or(GrammarError)?)?;
            Ok(Statement::Return(value))
        }
        Rule::expression_statement => {
            let mut inner = stmt.into_inner();
            let expr = parse_expr(inner.next().ok_or(GrammarError)?)?;
            Ok(Statement::Expression(expr))
        }
        _ => Err(GrammarError),
    };
    info!("Returning {:?}", &res);
    res
}

fn parse_block(block: Pair<Rule>) -> ParseResult<Block> {
    info_parse!("Block", &block);
    match block.as_rule() {
        Rule::block => Ok(Block::new(parse_statements(block.into_inner())?)),
        _ => Err(GrammarError),
    }
}

fn parse_expr(expr: Pair<Rule>) -> ParseResult<Expression> {
    info_parse!("Expression", &expr);
    match expr.as_rule() {
        Rule::expression => parse_expr(expr.into_inner().next().ok_or(GrammarError)?),
        Rule::equality | Rule::comparison | Rule::sum | Rule::product => {
            let mut inner = expr.into_inner();
            let mut lhs = parse_expr(inner.next().ok_or(GrammarError)?)?;
            while let Some(op) = inner.next() {
                let op = parse_infix_op(op)?;
                let rhs = parse_expr(inner.next().ok_or(GrammarError)?)?;
                lhs = Expression::Infix(Box::new(lhs), op, Box::new(rhs));
            }
            Ok(lhs)
        }
        Rule::prefix => {
            let mut ops = vec![];
            let mut operand = None;
            for pair in expr.into_inner() {
                match pair.as_rule() {
                    Rule::prefix_op => ops.push(parse_prefix_op(pair)?),
                    _ => operand = Some(parse_expr(pair)?),
                }
            }
            let operand = operand.ok_or(GrammarError)?;
            // innermost operator is the one written last
            Ok(ops
                .into_iter()
                .rev()
                .fold(operand, |right, op| Expression::Prefix(op, Box::new(right))))
        }
        Rule::call => {
            let mut inner = expr.into_inner();
            let mut function = parse_expr(inner.next().ok_or(GrammarError)?)?;
            for args in inner {
                info_parse!("Arguments", &args);
                let args = args
                    .into_inner()
                    .map(parse_expr)
                    .collect::<ParseResult<Vec<_>>>()?;
                function = Expression::Call(Box::new(function), args);
            }
            Ok(function)
        }
        Rule::if_expression => {
            let mut inner = significant(expr);
            let cond = parse_expr(inner.next().ok_or(GrammarError)?)?;
            let consequence = parse_block(inner.next().ok_or(GrammarError)?)?;
            let alternative = inner.next().map(parse_block).transpose()?;
            Ok(Expression::If(Box::new(cond), consequence, alternative))
        }
        Rule::function_literal => {
            let mut inner = significant(expr);
            let params = inner
                .next()
                .ok_or(GrammarError)?
                .into_inner()
                .map(parse_identifier)
                .collect::<ParseResult<Vec<_>>>()?;
            let body = parse_block(inner.next().ok_or(GrammarError)?)?;
            Ok(Expression::Function(params, body))
        }
        Rule::integer => parse_integer(expr).map(Expression::IntegerLiteral),
        Rule::boolean => parse_boolean(expr).map(Expression::Boolean),
        Rule::identifier => parse_identifier(expr).map(Expression::Identifier),
        _ => Err(GrammarError),
    }
}

fn parse_infix_op(op: Pair<Rule>) -> ParseResult<InfixOp> {
    info_parse!("Infix Operation", &op);
    match op.as_str() {
        "+" => Ok(InfixOp::Add),
        "-" => Ok(InfixOp::Sub),
        "*" => Ok(InfixOp::Mul),
        "/" => Ok(InfixOp::Div),
        "<" => Ok(InfixOp::Lt),
        ">" => Ok(InfixOp::Gt),
        "==" => Ok(InfixOp::Eq),
        "!=" => Ok(InfixOp::Neq),
        _ => Err(GrammarError),
    }
}

fn parse_prefix_op(op: Pair<Rule>) -> ParseResult<PrefixOp> {
    info_parse!("Prefix Operation", &op);
    match op.as_str() {
        "!" => Ok(PrefixOp::Not),
        "-" => Ok(PrefixOp::Neg),
        _ => Err(GrammarError),
    }
}

fn parse_integer(literal: Pair<Rule>) -> ParseResult<IntType> {
    info_parse!("Integer", &literal);
    let num = literal.as_str();
    num.parse()
        .map_err(|_| ParsingError::IntegerOutOfRange(num.to_string()))
}

fn parse_boolean(literal: Pair<Rule>) -> ParseResult<bool> {
    info_parse!("Boolean", &literal);
    literal.as_str().parse().map_err(|_| GrammarError)
}

fn parse_identifier(name: Pair<Rule>) -> ParseResult<String> {
    info_parse!("Identifier", &name);
    match name.as_rule() {
        Rule::identifier => Ok(name.as_str().to_string()),
        _ => Err(GrammarError),
    }
}
