//! Unary minus

use numera_core::prelude::*;

use crate::{coerce, deep_map_entry};

/// Build the `unaryMinus` operation: negate every numeric kind, negate a
/// unit's magnitude, coerce booleans/text/null to a number first.
pub fn factory(config: Config) -> Operation {
    let mode = config.number;
    Operation::new("unaryMinus")
        .with_zero_fixpoint()
        .unary(&[Kind::Number], |_, x| match x {
            Value::Number(n) => Ok(Value::number(-n.0)),
            v => Err(MathError::type_mismatch("number", v.kind())),
        })
        .unary(&[Kind::Complex], |_, x| match x {
            Value::Complex(c) => Ok(Value::Complex(c.neg())),
            v => Err(MathError::type_mismatch("Complex", v.kind())),
        })
        .unary(&[Kind::BigNumber], |_, x| match x {
            Value::BigNumber(d) => Ok(Value::BigNumber(-*d)),
            v => Err(MathError::type_mismatch("BigNumber", v.kind())),
        })
        .unary(&[Kind::Fraction], |_, x| match x {
            Value::Fraction(r) => Ok(Value::Fraction(-r.clone())),
            v => Err(MathError::type_mismatch("Fraction", v.kind())),
        })
        .unary(&[Kind::Unit], |_, x| match x {
            Value::Unit(u) => Ok(Value::Unit(u.neg())),
            v => Err(MathError::type_mismatch("Unit", v.kind())),
        })
        .unary(&[Kind::Array, Kind::Matrix], deep_map_entry)
        .unary(&[Kind::Boolean, Kind::String, Kind::Null], move |op, x| {
            let n = coerce::to_number(x, mode)?;
            op.call(&n)
        })
}
