//! # Numera Core - typed dispatch and deep mapping for numeric values
//!
//! The runtime substrate under numera's arithmetic operators:
//!
//! - A closed tagged union over the supported kinds ([`value::Value`]):
//!   plain numbers, arbitrary-precision decimals, exact rationals, complex
//!   numbers, physical units, and nested containers
//! - A typed dispatcher ([`typed::Operation`]): a named, ordered table of
//!   (type pattern, implementation) entries resolved per call against the
//!   runtime kinds of the arguments
//! - A shape-preserving deep mapper ([`collection::deep_map`]) with an
//!   opt-in zero-skip fast path
//!
//! ## Example
//!
//! ```rust
//! use numera_core::prelude::*;
//!
//! let double = Operation::new("double")
//!     .with_zero_fixpoint()
//!     .unary(&[Kind::Number], |_, x| match x {
//!         Value::Number(n) => Ok(Value::number(2.0 * n.0)),
//!         v => Err(MathError::type_mismatch("number", v.kind())),
//!     })
//!     .unary(&[Kind::Array, Kind::Matrix], |op, x| {
//!         deep_map(x, &|v: &Value| op.call(v), op.fixes_zero())
//!     });
//!
//! let out = double.call(&Value::numbers(&[1.0, 2.0, 3.0])).unwrap();
//! assert_eq!(out, Value::numbers(&[2.0, 4.0, 6.0]));
//! ```

pub mod collection;
pub mod config;
pub mod error;
pub mod matrix;
pub mod ser;
pub mod typed;
pub mod value;

pub mod prelude {
    pub use crate::collection::deep_map;
    pub use crate::config::{Config, NumberMode};
    pub use crate::error::{MathError, MathResult};
    pub use crate::matrix::Matrix;
    pub use crate::ser;
    pub use crate::typed::{Handler, Operation, Signature};
    pub use crate::value::{Complex, Kind, KindList, Unit, Value};
}
