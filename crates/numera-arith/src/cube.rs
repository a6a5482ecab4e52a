//! Element-wise cube

use numera_core::prelude::*;

use crate::deep_map_entry;

/// Build the `cube` operation: `x * x * x` for every numeric kind.
pub fn factory(_config: Config) -> Operation {
    Operation::new("cube")
        .with_zero_fixpoint()
        .unary(&[Kind::Number], |_, x| match x {
            Value::Number(n) => Ok(Value::number(n.0 * n.0 * n.0)),
            v => Err(MathError::type_mismatch("number", v.kind())),
        })
        .unary(&[Kind::Complex], |_, x| match x {
            Value::Complex(c) => Ok(Value::Complex(c.mul(c).mul(c))),
            v => Err(MathError::type_mismatch("Complex", v.kind())),
        })
        .unary(&[Kind::BigNumber], |_, x| match x {
            Value::BigNumber(d) => Ok(Value::BigNumber(*d * *d * *d)),
            v => Err(MathError::type_mismatch("BigNumber", v.kind())),
        })
        .unary(&[Kind::Fraction], |_, x| match x {
            Value::Fraction(r) => {
                let squared = r * r;
                Ok(Value::Fraction(&squared * r))
            }
            v => Err(MathError::type_mismatch("Fraction", v.kind())),
        })
        .unary(&[Kind::Array, Kind::Matrix], deep_map_entry)
}
