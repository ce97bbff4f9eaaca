use crate::error;
use crate::lang::Error;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Names are case-sensitive. One `Var` belongs to one run.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<String, f64>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn get(&self, var_name: &str) -> Option<f64> {
        self.vars.get(var_name).copied()
    }

    pub fn fetch(&self, var_name: &str) -> Result<f64> {
        match self.vars.get(var_name) {
            Some(val) => Ok(*val),
            None => Err(error!(UndefinedVariable; var_name)),
        }
    }

    pub fn store(&mut self, var_name: &str, value: f64) -> Result<()> {
        if let Some(var) = self.vars.get_mut(var_name) {
            *var = value;
            return Ok(());
        }
        if self.vars.len() >= u16::max_value() as usize {
            return Err(error!(OutOfMemory; "TOO MANY VARIABLES"));
        }
        self.vars.insert(var_name.to_string(), value);
        Ok(())
    }
}
