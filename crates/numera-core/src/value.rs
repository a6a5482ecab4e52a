//! Runtime values for numera

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::matrix::Matrix;

/// Runtime value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Plain real number
    Number(OrderedFloat<f64>),
    /// Arbitrary-precision decimal (96-bit scaled, immutable)
    BigNumber(Decimal),
    /// Exact rational, kept reduced (immutable)
    Fraction(BigRational),
    /// Complex number
    Complex(Complex),
    /// Physical quantity: magnitude plus unit symbol
    Unit(Unit),
    Bool(bool),
    Str(Box<str>),
    Null,
    /// Nested container, shape implied by nesting
    Array(Vec<Value>),
    /// Shape-carrying container with flat element storage
    Matrix(Matrix),
}

/// The tag identifying which representation a [`Value`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Number,
    BigNumber,
    Fraction,
    Complex,
    Unit,
    Boolean,
    String,
    Null,
    Array,
    Matrix,
}

impl Kind {
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Number => "number",
            Kind::BigNumber => "BigNumber",
            Kind::Fraction => "Fraction",
            Kind::Complex => "Complex",
            Kind::Unit => "Unit",
            Kind::Boolean => "boolean",
            Kind::String => "string",
            Kind::Null => "null",
            Kind::Array => "Array",
            Kind::Matrix => "Matrix",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An argument-kind tuple, formatted comma-separated in error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindList(pub Vec<Kind>);

impl fmt::Display for KindList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, kind) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", kind)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub value: f64,
    pub unit: Box<str>,
}

impl Value {
    pub fn number(x: f64) -> Self {
        Value::Number(OrderedFloat(x))
    }

    pub fn bignumber(d: Decimal) -> Self {
        Value::BigNumber(d)
    }

    /// Exact rational from integer numerator and denominator.
    ///
    /// Panics if `denom` is zero.
    pub fn fraction(numer: i64, denom: i64) -> Self {
        Value::Fraction(BigRational::new(BigInt::from(numer), BigInt::from(denom)))
    }

    pub fn complex(re: f64, im: f64) -> Self {
        Value::Complex(Complex::new(re, im))
    }

    pub fn unit(value: f64, unit: impl Into<Box<str>>) -> Self {
        Value::Unit(Unit::new(value, unit))
    }

    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    pub fn string(s: impl Into<Box<str>>) -> Self {
        Value::Str(s.into())
    }

    /// One-dimensional array of plain numbers.
    pub fn numbers(xs: &[f64]) -> Self {
        Value::Array(xs.iter().map(|x| Value::number(*x)).collect())
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Number(_) => Kind::Number,
            Value::BigNumber(_) => Kind::BigNumber,
            Value::Fraction(_) => Kind::Fraction,
            Value::Complex(_) => Kind::Complex,
            Value::Unit(_) => Kind::Unit,
            Value::Bool(_) => Kind::Boolean,
            Value::Str(_) => Kind::String,
            Value::Null => Kind::Null,
            Value::Array(_) => Kind::Array,
            Value::Matrix(_) => Kind::Matrix,
        }
    }

    /// Algebraic zero for this value's kind. Non-numeric kinds are never zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Number(n) => n.0 == 0.0,
            Value::BigNumber(d) => d.is_zero(),
            Value::Fraction(r) => r.is_zero(),
            Value::Complex(c) => c.is_zero(),
            _ => false,
        }
    }

    pub fn is_collection(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Matrix(_))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.0),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            Value::Matrix(m) => Some(m),
            _ => None,
        }
    }
}

impl Complex {
    pub fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    pub fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    pub fn mul(&self, other: &Complex) -> Complex {
        Complex::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }

    pub fn neg(&self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl Unit {
    pub fn new(value: f64, unit: impl Into<Box<str>>) -> Self {
        Unit { value, unit: unit.into() }
    }

    pub fn neg(&self) -> Unit {
        Unit { value: -self.value, unit: self.unit.clone() }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < 0.0 {
            write!(f, "{} - {}i", self.re, -self.im)
        } else {
            write!(f, "{} + {}i", self.re, self.im)
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n.0),
            Value::BigNumber(d) => write!(f, "{}", d),
            Value::Fraction(r) => write!(f, "{}", r),
            Value::Complex(c) => write!(f, "{}", c),
            Value::Unit(u) => write!(f, "{}", u),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::Null => write!(f, "null"),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, v) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            Value::Matrix(m) => write!(f, "{}", m),
        }
    }
}
