//! Shape-carrying container over runtime values

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};
use crate::value::Value;

/// Dense container: a shape vector plus flat row-major element storage.
/// Invariant: `data.len()` equals the product of `shape`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub shape: Vec<usize>,
    pub data: Vec<Value>,
}

impl Matrix {
    /// Build from nested arrays, validating that every level is rectangular.
    /// The shape is taken from the first element chain; rows of a different
    /// length or nesting depth are rejected.
    pub fn from_nested(items: &[Value]) -> MathResult<Matrix> {
        let mut shape = Vec::new();
        let mut level: &[Value] = items;
        loop {
            shape.push(level.len());
            match level.first() {
                Some(Value::Array(inner)) => level = inner,
                _ => break,
            }
        }
        let mut data = Vec::with_capacity(shape.iter().product());
        collect_level(items, &shape, 0, &mut data)?;
        Ok(Matrix { shape, data })
    }

    /// Build from a shape and flat storage, validating the length invariant.
    pub fn from_flat(shape: Vec<usize>, data: Vec<Value>) -> MathResult<Matrix> {
        let size: usize = shape.iter().product();
        if data.len() != size {
            return Err(MathError::DimensionMismatch { expected: size, found: data.len() });
        }
        Ok(Matrix { shape, data })
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    pub fn size(&self) -> usize {
        self.shape.iter().product()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn get_flat(&self, idx: usize) -> Option<&Value> {
        self.data.get(idx)
    }

    pub fn get(&self, indices: &[usize]) -> Option<&Value> {
        self.get_flat(self.flatten_index(indices)?)
    }

    fn flatten_index(&self, indices: &[usize]) -> Option<usize> {
        if indices.len() != self.shape.len() {
            return None;
        }
        let mut flat = 0;
        let mut stride = 1;
        for (idx, &dim) in indices.iter().zip(&self.shape).rev() {
            if *idx >= dim {
                return None;
            }
            flat += idx * stride;
            stride *= dim;
        }
        Some(flat)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.data.iter()
    }

    /// Rebuild the equivalent nested-array value.
    pub fn to_nested(&self) -> Value {
        let mut pos = 0;
        build_nested(&self.shape, &self.data, &mut pos)
    }
}

fn collect_level(
    items: &[Value],
    shape: &[usize],
    depth: usize,
    out: &mut Vec<Value>,
) -> MathResult<()> {
    if items.len() != shape[depth] {
        return Err(MathError::DimensionMismatch { expected: shape[depth], found: items.len() });
    }
    let leaf_level = depth + 1 == shape.len();
    for item in items {
        match item {
            Value::Array(inner) if !leaf_level => collect_level(inner, shape, depth + 1, out)?,
            Value::Array(_) => {
                return Err(MathError::RankMismatch {
                    expected: shape.len(),
                    found: shape.len() + 1,
                })
            }
            v if leaf_level => out.push(v.clone()),
            _ => return Err(MathError::RankMismatch { expected: shape.len(), found: depth + 1 }),
        }
    }
    Ok(())
}

fn build_nested(shape: &[usize], data: &[Value], pos: &mut usize) -> Value {
    match shape {
        [] => {
            let v = data[*pos].clone();
            *pos += 1;
            v
        }
        [n, rest @ ..] => Value::Array((0..*n).map(|_| build_nested(rest, data, pos)).collect()),
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rank() <= 1 {
            write!(f, "[")?;
            for (i, v) in self.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", v)?;
            }
            write!(f, "]")
        } else {
            write!(f, "<matrix {:?}>", self.shape)
        }
    }
}
