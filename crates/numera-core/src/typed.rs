//! Typed dispatch: named operations resolved by runtime kind

use crate::error::{MathError, MathResult};
use crate::value::{Kind, Value};

/// Implementation attached to a signature.
pub enum Handler {
    Unary(Box<dyn Fn(&Operation, &Value) -> MathResult<Value>>),
    Binary(Box<dyn Fn(&Operation, &Value, &Value) -> MathResult<Value>>),
}

/// One (type pattern, implementation) entry. Each parameter position lists
/// the kinds it accepts: a single kind is an exact pattern, several kinds a
/// union tried in declared order.
pub struct Signature {
    params: Vec<Vec<Kind>>,
    handler: Handler,
}

impl Signature {
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    fn is_exact(&self, kinds: &[Kind]) -> bool {
        self.params.len() == kinds.len()
            && self.params.iter().zip(kinds).all(|(p, k)| p.len() == 1 && p[0] == *k)
    }

    fn covers(&self, kinds: &[Kind]) -> bool {
        self.params.len() == kinds.len()
            && self.params.iter().zip(kinds).all(|(p, k)| p.contains(k))
    }
}

/// A named operation holding an ordered signature table. Built once at
/// registration time, immutable afterwards.
///
/// Handlers receive the enclosing operation as their first argument: the
/// stable self-handle that lets a container signature re-enter the very
/// operation being defined, one leaf at a time.
pub struct Operation {
    name: &'static str,
    zero_fixpoint: bool,
    signatures: Vec<Signature>,
}

impl Operation {
    pub fn new(name: &'static str) -> Self {
        Operation { name, zero_fixpoint: false, signatures: Vec::new() }
    }

    /// Declare that this operation maps zero to zero for every kind it
    /// accepts. Container signatures read this back through
    /// [`fixes_zero`](Operation::fixes_zero) to enable the deep mapper's
    /// zero-skip path. An operation without the property must not declare it.
    pub fn with_zero_fixpoint(mut self) -> Self {
        self.zero_fixpoint = true;
        self
    }

    /// Register a one-argument signature.
    pub fn unary<F>(mut self, pattern: &[Kind], f: F) -> Self
    where
        F: Fn(&Operation, &Value) -> MathResult<Value> + 'static,
    {
        self.signatures.push(Signature {
            params: vec![pattern.to_vec()],
            handler: Handler::Unary(Box::new(f)),
        });
        self
    }

    /// Register a two-argument signature.
    pub fn binary<F>(mut self, left: &[Kind], right: &[Kind], f: F) -> Self
    where
        F: Fn(&Operation, &Value, &Value) -> MathResult<Value> + 'static,
    {
        self.signatures.push(Signature {
            params: vec![left.to_vec(), right.to_vec()],
            handler: Handler::Binary(Box::new(f)),
        });
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fixes_zero(&self) -> bool {
        self.zero_fixpoint
    }

    /// Select the implementation for a tuple of runtime kinds: exact
    /// single-kind matches first, then union coverage in declared order.
    /// Matching is performed per call; nothing is cached.
    pub fn resolve(&self, kinds: &[Kind]) -> MathResult<&Signature> {
        if let Some(sig) = self.signatures.iter().find(|s| s.is_exact(kinds)) {
            return Ok(sig);
        }
        if let Some(sig) = self.signatures.iter().find(|s| s.covers(kinds)) {
            return Ok(sig);
        }
        Err(MathError::no_signature(self.name, kinds))
    }

    /// Resolve against the runtime kinds of `args` and apply the selected
    /// implementation.
    pub fn invoke(&self, args: &[&Value]) -> MathResult<Value> {
        let kinds: Vec<Kind> = args.iter().map(|a| a.kind()).collect();
        let sig = self.resolve(&kinds)?;
        match (&sig.handler, args) {
            (Handler::Unary(f), [x]) => f(self, x),
            (Handler::Binary(f), [x, y]) => f(self, x, y),
            _ => Err(MathError::ArityMismatch {
                op: self.name.to_string(),
                expected: sig.arity(),
                got: args.len(),
            }),
        }
    }

    /// Unary convenience: [`invoke`](Operation::invoke) with one argument.
    pub fn call(&self, x: &Value) -> MathResult<Value> {
        self.invoke(&[x])
    }
}
