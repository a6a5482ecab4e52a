//! Element-wise square

use numera_core::prelude::*;

use crate::deep_map_entry;

/// Build the `square` operation: `x * x` for every numeric kind.
///
/// Arrays and matrices are mapped element-wise. Zero entries are left
/// untouched during mapping, declared sound via the zero-fixpoint capability
/// since `square(0) == 0`.
pub fn factory(_config: Config) -> Operation {
    Operation::new("square")
        .with_zero_fixpoint()
        .unary(&[Kind::Number], |_, x| match x {
            Value::Number(n) => Ok(Value::number(n.0 * n.0)),
            v => Err(MathError::type_mismatch("number", v.kind())),
        })
        .unary(&[Kind::Complex], |_, x| match x {
            Value::Complex(c) => Ok(Value::Complex(c.mul(c))),
            v => Err(MathError::type_mismatch("Complex", v.kind())),
        })
        .unary(&[Kind::BigNumber], |_, x| match x {
            Value::BigNumber(d) => Ok(Value::BigNumber(*d * *d)),
            v => Err(MathError::type_mismatch("BigNumber", v.kind())),
        })
        .unary(&[Kind::Fraction], |_, x| match x {
            Value::Fraction(r) => Ok(Value::Fraction(r * r)),
            v => Err(MathError::type_mismatch("Fraction", v.kind())),
        })
        .unary(&[Kind::Array, Kind::Matrix], deep_map_entry)
}
