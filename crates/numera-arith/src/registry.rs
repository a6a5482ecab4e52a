//! By-name operation registry

use std::collections::HashMap;

use numera_core::prelude::*;

use crate::{cube, square, unary_minus, unary_plus};

/// Holds every arithmetic operation, built once against a configuration
/// snapshot, and resolves them by name at the calling boundary.
pub struct Registry {
    config: Config,
    trace: bool,
    ops: HashMap<&'static str, Operation>,
}

impl Registry {
    pub fn new(config: Config) -> Self {
        let factories: &[fn(Config) -> Operation] = &[
            square::factory,
            cube::factory,
            unary_plus::factory,
            unary_minus::factory,
        ];
        let mut ops = HashMap::new();
        for build in factories {
            let op = build(config);
            ops.insert(op.name(), op);
        }
        Registry { config, trace: false, ops }
    }

    /// Print dispatch decisions to stderr.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn get(&self, name: &str) -> Option<&Operation> {
        self.ops.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.ops.keys().copied()
    }

    pub fn call(&self, name: &str, x: &Value) -> MathResult<Value> {
        let op = self
            .get(name)
            .ok_or_else(|| MathError::UnknownFunction(name.to_string()))?;
        if self.trace {
            eprintln!("dispatch: {}({})", name, x.kind());
        }
        op.call(x)
    }
}
