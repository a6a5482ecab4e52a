//! Deep structural mapping over containers

use crate::error::MathResult;
use crate::matrix::Matrix;
use crate::value::Value;

/// Apply `leaf` to every scalar inside `x`, rebuilding containers with the
/// same shape. Nested containers are descended recursively; the base case is
/// any non-container value.
///
/// With `skip_zero`, leaves that are algebraically zero for their kind are
/// cloned through without invoking `leaf`. That is purely a computation
/// shortcut and is only sound when `leaf(zero) == zero` for every kind the
/// container may hold. The caller owns that precondition, typically declared
/// via [`Operation::with_zero_fixpoint`](crate::typed::Operation::with_zero_fixpoint).
///
/// Errors from `leaf` propagate unmodified; the input is never mutated.
pub fn deep_map<F>(x: &Value, leaf: &F, skip_zero: bool) -> MathResult<Value>
where
    F: Fn(&Value) -> MathResult<Value> + ?Sized,
{
    match x {
        Value::Array(items) => {
            let mapped = items
                .iter()
                .map(|v| deep_map(v, leaf, skip_zero))
                .collect::<MathResult<Vec<_>>>()?;
            Ok(Value::Array(mapped))
        }
        Value::Matrix(m) => {
            let data = m
                .iter()
                .map(|v| deep_map(v, leaf, skip_zero))
                .collect::<MathResult<Vec<_>>>()?;
            Ok(Value::Matrix(Matrix { shape: m.shape.clone(), data }))
        }
        v if skip_zero && v.is_zero() => Ok(v.clone()),
        v => leaf(v),
    }
}
