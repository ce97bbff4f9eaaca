use super::{Operation, Var};
use crate::lang::ast::{Condition, Expression, Operand};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Fold the expression left to right. `2 + 3 * 4` is 20.
pub fn evaluate(expr: &Expression, vars: &Var) -> Result<f64> {
    let first = operand(&expr.first, vars)?;
    expr.rest.iter().try_fold(first, |lhs, (col, op, rhs)| {
        let rhs = operand(rhs, vars)?;
        Operation::arithmetic(*op, lhs, rhs).map_err(|e| e.in_column(col))
    })
}

pub fn condition(cond: &Condition, vars: &Var) -> Result<bool> {
    let lhs = evaluate(&cond.lhs, vars)?;
    let rhs = evaluate(&cond.rhs, vars)?;
    Ok(Operation::compare(cond.comparator, lhs, rhs))
}

fn operand(op: &Operand, vars: &Var) -> Result<f64> {
    match op {
        Operand::Number(_, val) => Ok(*val),
        Operand::Var(var) => vars.fetch(&var.name).map_err(|e| e.in_column(&var.column)),
        Operand::Paren(_, expr) => evaluate(expr, vars),
        Operand::Negation(_, inner) => Ok(-operand(inner, vars)?),
    }
}
