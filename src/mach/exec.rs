use super::eval::{condition, evaluate};
use super::{Branch, Var};
use crate::lang::ast::{Printable, Statement};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// The result of running one statement: an optional display line and
/// the branch for the control flow.
#[derive(Debug, PartialEq)]
pub struct Effect {
    pub output: Option<String>,
    pub branch: Branch,
}

impl Effect {
    fn branch(branch: Branch) -> Effect {
        Effect {
            output: None,
            branch,
        }
    }

    fn print(s: String) -> Effect {
        Effect {
            output: Some(s),
            branch: Branch::Advance,
        }
    }
}

pub fn execute(statement: &Statement, vars: &mut Var) -> Result<Effect> {
    use Statement::*;
    match statement {
        Empty(_) | Rem(_) => Ok(Effect::branch(Branch::Advance)),
        End(_) => Ok(Effect::branch(Branch::End)),
        Let(_, var, expr) => {
            let value = evaluate(expr, vars)?;
            vars.store(&var.name, value)?;
            Ok(Effect::branch(Branch::Advance))
        }
        Print(_, Printable::String(_, s)) => Ok(Effect::print(s.clone())),
        Print(_, Printable::Var(var)) => Ok(Effect::print(match vars.get(&var.name) {
            Some(value) => format!("{}", value),
            None => format!("Undefined variable: {}", var.name),
        })),
        If(_, cond, target) => {
            if condition(cond, vars)? {
                Ok(Effect::branch(Branch::Then(*target)))
            } else {
                Ok(Effect::branch(Branch::Advance))
            }
        }
        Goto(_, target) => Ok(Effect::branch(Branch::Goto(*target))),
        While(_, cond) => Ok(Effect::branch(Branch::While(condition(cond, vars)?))),
        Wend(_) => Ok(Effect::branch(Branch::Wend)),
    }
}
