//! Boolean/text/null to number coercion

use numera_core::prelude::*;
use rust_decimal::Decimal;

/// Convert a boolean, text or null value into a number in the given default
/// representation: `true -> 1`, `false -> 0`, `null -> 0`, text is parsed.
pub(crate) fn to_number(x: &Value, mode: NumberMode) -> MathResult<Value> {
    match mode {
        NumberMode::Number => Ok(Value::number(to_f64(x)?)),
        NumberMode::BigNumber => Ok(Value::bignumber(to_decimal(x)?)),
    }
}

fn to_f64(x: &Value) -> MathResult<f64> {
    match x {
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::Null => Ok(0.0),
        Value::Str(s) => s.trim().parse().map_err(|_| MathError::invalid_number(s.as_ref())),
        v => Err(MathError::type_mismatch("boolean, string or null", v.kind())),
    }
}

fn to_decimal(x: &Value) -> MathResult<Decimal> {
    match x {
        Value::Bool(b) => Ok(if *b { Decimal::ONE } else { Decimal::ZERO }),
        Value::Null => Ok(Decimal::ZERO),
        // parsed directly so text like "3.5" stays exact
        Value::Str(s) => s.trim().parse().map_err(|_| MathError::invalid_number(s.as_ref())),
        v => Err(MathError::type_mismatch("boolean, string or null", v.kind())),
    }
}
