//! Unary plus

use numera_core::prelude::*;

use crate::{coerce, deep_map_entry};

/// Build the `unaryPlus` operation.
///
/// Numeric values pass through unchanged; decimals and fractions are
/// immutable representations, so the incoming value itself is the result.
/// Complex numbers and units come back as fresh copies. Booleans, text and
/// null coerce to a number in the configured default representation.
pub fn factory(config: Config) -> Operation {
    let mode = config.number;
    Operation::new("unaryPlus")
        .with_zero_fixpoint()
        .unary(&[Kind::Number], |_, x| Ok(x.clone()))
        .unary(&[Kind::Complex], |_, x| match x {
            Value::Complex(c) => Ok(Value::Complex(Complex::new(c.re, c.im))),
            v => Err(MathError::type_mismatch("Complex", v.kind())),
        })
        .unary(&[Kind::BigNumber], |_, x| Ok(x.clone()))
        .unary(&[Kind::Fraction], |_, x| Ok(x.clone()))
        .unary(&[Kind::Unit], |_, x| Ok(x.clone()))
        .unary(&[Kind::Array, Kind::Matrix], deep_map_entry)
        .unary(&[Kind::Boolean, Kind::String, Kind::Null], move |_, x| {
            coerce::to_number(x, mode)
        })
}
