//! # Numera Arith - arithmetic operations on the typed dispatcher
//!
//! Every operation is defined once per numeric kind and registered as a
//! signature table; containers are handled by one shared entry that
//! re-enters the operation element-wise through the deep mapper.
//!
//! ## Example
//!
//! ```rust
//! use numera_arith::prelude::*;
//!
//! let math = Registry::new(Config::default());
//!
//! let squared = math.call("square", &Value::numbers(&[1.0, 2.0, 3.0, 4.0])).unwrap();
//! assert_eq!(squared, Value::numbers(&[1.0, 4.0, 9.0, 16.0]));
//!
//! let coerced = math.call("unaryPlus", &Value::string("3.5")).unwrap();
//! assert_eq!(coerced, Value::number(3.5));
//! ```

pub mod cube;
pub mod registry;
pub mod square;
pub mod unary_minus;
pub mod unary_plus;

mod coerce;

use numera_core::prelude::*;

pub mod prelude {
    pub use crate::registry::Registry;
    pub use numera_core::prelude::*;
}

/// Shared `Array | Matrix` signature entry: re-enter the operation on every
/// leaf through the deep mapper, skipping zero leaves when the operation
/// declared the zero fixpoint.
pub(crate) fn deep_map_entry(op: &Operation, x: &Value) -> MathResult<Value> {
    deep_map(x, &|v: &Value| op.call(v), op.fixes_zero())
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use rust_decimal::Decimal;

    fn math() -> Registry { Registry::new(Config::default()) }
    fn big() -> Registry { Registry::new(Config::with_number(NumberMode::BigNumber)) }

    fn dec(s: &str) -> Decimal { s.parse().unwrap() }

    // ============ square ============

    #[test] fn test_square_number() { assert_eq!(math().call("square", &Value::number(3.0)).unwrap(), Value::number(9.0)); }
    #[test] fn test_square_negative() { assert_eq!(math().call("square", &Value::number(-2.5)).unwrap(), Value::number(6.25)); }
    #[test] fn test_square_complex() { assert_eq!(math().call("square", &Value::complex(2.0, 3.0)).unwrap(), Value::complex(-5.0, 12.0)); }
    #[test] fn test_square_bignumber() { assert_eq!(math().call("square", &Value::bignumber(dec("3.5"))).unwrap(), Value::bignumber(dec("12.25"))); }
    #[test] fn test_square_fraction() { assert_eq!(math().call("square", &Value::fraction(3, 4)).unwrap(), Value::fraction(9, 16)); }

    #[test]
    fn test_square_leaves_operand_untouched() {
        let r = Value::fraction(3, 4);
        math().call("square", &r).unwrap();
        assert_eq!(r, Value::fraction(3, 4));
    }

    #[test]
    fn test_square_unit_has_no_signature() {
        let err = math().call("square", &Value::unit(5.0, "cm")).unwrap_err();
        match err {
            MathError::NoMatchingSignature { op, kinds } => { assert_eq!(op, "square"); assert_eq!(kinds.0, vec![Kind::Unit]); }
            e => panic!("expected NoMatchingSignature, got {}", e),
        }
    }

    #[test] fn test_square_rejects_string() { assert!(matches!(math().call("square", &Value::string("2")), Err(MathError::NoMatchingSignature { .. }))); }

    // ============ cube ============

    #[test] fn test_cube_number() { assert_eq!(math().call("cube", &Value::number(2.0)).unwrap(), Value::number(8.0)); }
    #[test] fn test_cube_complex() { assert_eq!(math().call("cube", &Value::complex(1.0, 1.0)).unwrap(), Value::complex(-2.0, 2.0)); }
    #[test] fn test_cube_bignumber() { assert_eq!(math().call("cube", &Value::bignumber(dec("1.5"))).unwrap(), Value::bignumber(dec("3.375"))); }
    #[test] fn test_cube_fraction() { assert_eq!(math().call("cube", &Value::fraction(2, 3)).unwrap(), Value::fraction(8, 27)); }
    #[test] fn test_cube_array() { assert_eq!(math().call("cube", &Value::numbers(&[0.0, 1.0, 2.0])).unwrap(), Value::numbers(&[0.0, 1.0, 8.0])); }

    // ============ unaryPlus ============

    #[test] fn test_unary_plus_number() { assert_eq!(math().call("unaryPlus", &Value::number(3.5)).unwrap(), Value::number(3.5)); }
    #[test] fn test_unary_plus_complex_copies() { assert_eq!(math().call("unaryPlus", &Value::complex(1.0, -2.0)).unwrap(), Value::complex(1.0, -2.0)); }
    #[test] fn test_unary_plus_bignumber_value_equal() { assert_eq!(math().call("unaryPlus", &Value::bignumber(dec("2.50"))).unwrap(), Value::bignumber(dec("2.5"))); }
    #[test] fn test_unary_plus_fraction() { assert_eq!(math().call("unaryPlus", &Value::fraction(-1, 3)).unwrap(), Value::fraction(-1, 3)); }
    #[test] fn test_unary_plus_unit() { assert_eq!(math().call("unaryPlus", &Value::unit(5.0, "cm")).unwrap(), Value::unit(5.0, "cm")); }

    #[test] fn test_unary_plus_coerces_bool() { assert_eq!(math().call("unaryPlus", &Value::bool(true)).unwrap(), Value::number(1.0)); assert_eq!(math().call("unaryPlus", &Value::bool(false)).unwrap(), Value::number(0.0)); }
    #[test] fn test_unary_plus_coerces_string() { assert_eq!(math().call("unaryPlus", &Value::string("3.5")).unwrap(), Value::number(3.5)); }
    #[test] fn test_unary_plus_coerces_null() { assert_eq!(math().call("unaryPlus", &Value::Null).unwrap(), Value::number(0.0)); }
    #[test] fn test_unary_plus_coerces_bool_bignumber() { assert_eq!(big().call("unaryPlus", &Value::bool(true)).unwrap(), Value::bignumber(Decimal::ONE)); }
    #[test] fn test_unary_plus_coerces_string_bignumber() { assert_eq!(big().call("unaryPlus", &Value::string("3.5")).unwrap(), Value::bignumber(dec("3.5"))); }
    #[test] fn test_unary_plus_coerces_null_bignumber() { assert_eq!(big().call("unaryPlus", &Value::Null).unwrap(), Value::bignumber(Decimal::ZERO)); }
    #[test] fn test_unary_plus_rejects_bad_text() { assert_eq!(math().call("unaryPlus", &Value::string("not a number")).unwrap_err(), MathError::invalid_number("not a number")); }

    // ============ unaryMinus ============

    #[test] fn test_unary_minus_number() { assert_eq!(math().call("unaryMinus", &Value::number(3.0)).unwrap(), Value::number(-3.0)); }
    #[test] fn test_unary_minus_complex() { assert_eq!(math().call("unaryMinus", &Value::complex(1.0, -2.0)).unwrap(), Value::complex(-1.0, 2.0)); }
    #[test] fn test_unary_minus_bignumber() { assert_eq!(math().call("unaryMinus", &Value::bignumber(dec("2.5"))).unwrap(), Value::bignumber(dec("-2.5"))); }
    #[test] fn test_unary_minus_fraction() { assert_eq!(math().call("unaryMinus", &Value::fraction(1, 2)).unwrap(), Value::fraction(-1, 2)); }
    #[test] fn test_unary_minus_unit_keeps_symbol() { assert_eq!(math().call("unaryMinus", &Value::unit(5.0, "cm")).unwrap(), Value::unit(-5.0, "cm")); }
    #[test] fn test_unary_minus_coerces_then_negates() { assert_eq!(math().call("unaryMinus", &Value::string("3.5")).unwrap(), Value::number(-3.5)); assert_eq!(math().call("unaryMinus", &Value::bool(true)).unwrap(), Value::number(-1.0)); }
    #[test] fn test_unary_minus_coerces_bignumber() { assert_eq!(big().call("unaryMinus", &Value::string("3.5")).unwrap(), Value::bignumber(dec("-3.5"))); }
    #[test] fn test_unary_minus_array() { assert_eq!(math().call("unaryMinus", &Value::numbers(&[1.0, 0.0, -2.0])).unwrap(), Value::numbers(&[-1.0, 0.0, 2.0])); }

    // ============ registry ============

    #[test] fn test_registry_names() { let names: Vec<_> = math().names().collect(); assert_eq!(names.len(), 4); assert!(names.contains(&"square")); assert!(names.contains(&"unaryMinus")); }
    #[test] fn test_registry_unknown_function() { assert_eq!(math().call("sqrt", &Value::number(4.0)).unwrap_err(), MathError::UnknownFunction("sqrt".to_string())); }
    #[test] fn test_registry_get() { let math = math(); assert!(math.get("cube").is_some()); assert!(math.get("pow").is_none()); }
    #[test] fn test_registry_config() { assert_eq!(big().config().number, NumberMode::BigNumber); }
    #[test] fn test_registry_trace_passthrough() { let math = math().with_trace(true); assert_eq!(math.call("square", &Value::number(3.0)).unwrap(), Value::number(9.0)); }

    // ============ containers ============

    #[test]
    fn test_square_array_end_to_end() {
        let out = math().call("square", &Value::numbers(&[1.0, 2.0, 3.0, 4.0])).unwrap();
        assert_eq!(out, Value::numbers(&[1.0, 4.0, 9.0, 16.0]));
    }

    #[test]
    fn test_square_two_d_with_zeros() {
        let input = Value::Array(vec![Value::numbers(&[0.0, 2.0]), Value::numbers(&[3.0, 0.0])]);
        let out = math().call("square", &input).unwrap();
        assert_eq!(out, Value::Array(vec![Value::numbers(&[0.0, 4.0]), Value::numbers(&[9.0, 0.0])]));
    }

    #[test]
    fn test_square_matrix_keeps_shape() {
        let m = Matrix::from_nested(&[Value::numbers(&[1.0, 2.0]), Value::numbers(&[3.0, 4.0])]).unwrap();
        let out = math().call("square", &Value::Matrix(m.clone())).unwrap();
        match out {
            Value::Matrix(sq) => { assert_eq!(sq.shape, m.shape); assert_eq!(sq.get_flat(3), Some(&Value::number(16.0))); }
            v => panic!("expected matrix, got {}", v),
        }
    }

    #[test]
    fn test_mixed_kind_array() {
        let input = Value::Array(vec![Value::number(2.0), Value::fraction(1, 2), Value::complex(0.0, 1.0)]);
        let out = math().call("square", &input).unwrap();
        assert_eq!(out, Value::Array(vec![Value::number(4.0), Value::fraction(1, 4), Value::complex(-1.0, 0.0)]));
    }

    #[test]
    fn test_skip_zero_equivalence_mixed_zeros() {
        let math = math();
        let square = math.get("square").unwrap();
        let input = Value::Array(vec![
            Value::number(0.0),
            Value::fraction(0, 1),
            Value::bignumber(Decimal::ZERO),
            Value::complex(0.0, 0.0),
            Value::number(3.0),
        ]);
        let skipped = deep_map(&input, &|v: &Value| square.call(v), true).unwrap();
        let mapped = deep_map(&input, &|v: &Value| square.call(v), false).unwrap();
        assert_eq!(skipped, mapped);
    }

    #[test]
    fn test_leaf_error_propagates_through_container() {
        let input = Value::Array(vec![Value::string("3.5"), Value::string("oops")]);
        let err = math().call("unaryPlus", &input).unwrap_err();
        assert_eq!(err, MathError::invalid_number("oops"));
    }
}
