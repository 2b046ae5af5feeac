use crate::value::Value;

/// Navigation history of contexts. The base context is fixed at creation;
/// pushes stack on top of it, so the stack is never empty and the last
/// element is always the current context.
#[derive(Debug)]
pub struct ContextStack {
    base: Value,
    pushed: Vec<Value>,
}

impl ContextStack {
    pub fn new(base: Value) -> Self {
        Self {
            base,
            pushed: Vec::new(),
        }
    }

    pub fn current(&self) -> &Value {
        self.pushed.last().unwrap_or(&self.base)
    }

    pub fn base(&self) -> &Value {
        &self.base
    }

    pub fn push(&mut self, context: Value) {
        self.pushed.push(context);
    }

    /// Drop the current context. Refused (returns false, stack untouched)
    /// when only the base context remains.
    pub fn pop(&mut self) -> bool {
        self.pushed.pop().is_some()
    }

    pub fn depth(&self) -> usize {
        self.pushed.len() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pop_never_empties_the_stack() {
        let mut stack = ContextStack::new(Value::I8(1));
        stack.push(Value::I8(2));
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.base(), &Value::I8(1));
        assert!(stack.pop());
        assert_eq!(stack.current(), &Value::I8(1));
        assert!(!stack.pop());
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current(), &Value::I8(1));
    }
}
