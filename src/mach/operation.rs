use crate::error;
use crate::lang::ast::{Arithmetic, Comparator};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    pub fn arithmetic(op: Arithmetic, lhs: f64, rhs: f64) -> Result<f64> {
        use Arithmetic::*;
        match op {
            Add => Ok(lhs + rhs),
            Subtract => Ok(lhs - rhs),
            Multiply => Ok(lhs * rhs),
            Divide => Operation::divide(lhs, rhs),
            Modulus => Operation::modulus(lhs, rhs),
        }
    }

    pub fn divide(lhs: f64, rhs: f64) -> Result<f64> {
        if rhs == 0.0 {
            Err(error!(DivisionByZero))
        } else {
            Ok(lhs / rhs)
        }
    }

    pub fn modulus(lhs: f64, rhs: f64) -> Result<f64> {
        if rhs == 0.0 {
            Err(error!(DivisionByZero; "MODULO BY ZERO"))
        } else {
            Ok(lhs % rhs)
        }
    }

    pub fn compare(comparator: Comparator, lhs: f64, rhs: f64) -> bool {
        use Comparator::*;
        match comparator {
            Equal => lhs == rhs,
            NotEqual => lhs != rhs,
            Less => lhs < rhs,
            LessEqual => lhs <= rhs,
            Greater => lhs > rhs,
            GreaterEqual => lhs >= rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_divide() {
        assert_eq!(Operation::divide(7.0, 2.0), Ok(3.5));
        assert_eq!(
            Operation::divide(7.0, 0.0).unwrap_err().code(),
            ErrorCode::DivisionByZero
        );
    }

    #[test]
    fn test_modulus() {
        assert_eq!(Operation::modulus(7.5, 2.0), Ok(1.5));
        assert_eq!(Operation::modulus(-7.0, 3.0), Ok(-1.0));
        assert_eq!(
            Operation::modulus(1.0, -0.0).unwrap_err().to_string(),
            "DIVISION BY ZERO; MODULO BY ZERO"
        );
    }

    #[test]
    fn test_compare() {
        assert!(Operation::compare(Comparator::LessEqual, 2.0, 2.0));
        assert!(Operation::compare(Comparator::NotEqual, 2.0, 3.0));
        assert!(!Operation::compare(Comparator::Greater, 2.0, 3.0));
    }
}
