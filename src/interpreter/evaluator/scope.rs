use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, operation::Operation},
};

/// Names bound directly in one scope.
#[derive(Debug, Default)]
pub struct Bindings {
    values:     HashMap<String, f64>,
    operations: HashMap<String, Operation>,
}

impl Bindings {
    #[must_use]
    pub fn value(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    #[must_use]
    pub fn operation(&self, name: &str) -> Option<&Operation> {
        self.operations.get(name)
    }

    pub fn insert_value(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    pub fn insert_operation(&mut self, name: impl Into<String>, operation: Operation) {
        self.operations.insert(name.into(), operation);
    }
}

/// A binding environment with an optional parent.
///
/// Every lookup checks the local [`Bindings`] first and then walks the parent
/// chain. A name missing at the root is an unknown name.
pub trait Scope {
    /// Names bound in this scope only.
    fn bindings(&self) -> &Bindings;

    /// The enclosing scope, if any. Scopes never own their parent.
    fn parent(&self) -> Option<&dyn Scope>;

    fn has_value(&self, name: &str) -> bool {
        self.bindings().value(name).is_some() || self.parent().is_some_and(|parent| parent.has_value(name))
    }

    /// Resolves a value through the scope chain.
    ///
    /// # Errors
    /// `UnknownValue` when no scope in the chain binds `name`.
    fn get_value(&self, name: &str) -> EvalResult<f64> {
        if let Some(value) = self.bindings().value(name) {
            return Ok(value);
        }
        self.parent().map_or_else(|| Err(RuntimeError::UnknownValue { name: name.to_string() }),
                                  |parent| parent.get_value(name))
    }

    fn has_function(&self, name: &str) -> bool {
        self.bindings().operation(name).is_some()
        || self.parent().is_some_and(|parent| parent.has_function(name))
    }

    /// Resolves an operation through the scope chain.
    ///
    /// # Errors
    /// `UnknownFunction` when no scope in the chain binds `name`.
    fn get_function(&self, name: &str) -> EvalResult<&Operation> {
        if let Some(operation) = self.bindings().operation(name) {
            return Ok(operation);
        }
        self.parent().map_or_else(|| Err(RuntimeError::UnknownFunction { name: name.to_string() }),
                                  |parent| parent.get_function(name))
    }
}

/// Resolves an operation and also returns the scope that binds it.
///
/// Sub-expressions are evaluated with their defining scope as parent, so the
/// caller needs to know where the binding was found.
pub(crate) fn resolve_function<'s>(scope: &'s dyn Scope,
                                   name: &str)
                                   -> EvalResult<(&'s Operation, &'s dyn Scope)> {
    let mut current = Some(scope);
    while let Some(candidate) = current {
        if let Some(operation) = candidate.bindings().operation(name) {
            return Ok((operation, candidate));
        }
        current = candidate.parent();
    }
    Err(RuntimeError::UnknownFunction { name: name.to_string() })
}

/// A transient scope linking a sub-expression's own bindings to the scope it
/// was defined in, for the duration of one call.
pub(crate) struct Frame<'a> {
    bindings: &'a Bindings,
    parent:   &'a dyn Scope,
}

impl<'a> Frame<'a> {
    pub(crate) const fn new(bindings: &'a Bindings, parent: &'a dyn Scope) -> Self {
        Self { bindings, parent }
    }
}

impl Scope for Frame<'_> {
    fn bindings(&self) -> &Bindings {
        self.bindings
    }

    fn parent(&self) -> Option<&dyn Scope> {
        Some(self.parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Root(Bindings);

    impl Scope for Root {
        fn bindings(&self) -> &Bindings {
            &self.0
        }

        fn parent(&self) -> Option<&dyn Scope> {
            None
        }
    }

    #[test]
    fn lookups_walk_the_chain() {
        let mut outer = Bindings::default();
        outer.insert_value("a", 1.0);
        let root = Root(outer);

        let mut inner = Bindings::default();
        inner.insert_value("b", 2.0);
        let frame = Frame::new(&inner, &root);

        assert!(frame.has_value("a"));
        assert_eq!(frame.get_value("b"), Ok(2.0));
        assert!(!root.has_value("b"));
        assert_eq!(root.get_value("b"),
                   Err(RuntimeError::UnknownValue { name: "b".to_string() }));
    }

    #[test]
    fn local_bindings_shadow_parents() {
        let mut outer = Bindings::default();
        outer.insert_value("x", 1.0);
        let root = Root(outer);

        let mut inner = Bindings::default();
        inner.insert_value("x", 5.0);
        let frame = Frame::new(&inner, &root);

        assert_eq!(frame.get_value("x"), Ok(5.0));
    }

    #[test]
    fn resolve_reports_the_owning_scope() {
        let mut outer = Bindings::default();
        outer.insert_operation("twice", Operation::unary(|x| 2.0 * x));
        let root = Root(outer);
        let inner = Bindings::default();
        let frame = Frame::new(&inner, &root);

        let (_, owner) = resolve_function(&frame, "twice").unwrap();
        assert!(owner.parent().is_none());
        assert!(frame.has_function("twice"));
        assert!(resolve_function(&frame, "thrice").is_err());
    }
}
