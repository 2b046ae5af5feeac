use std::cell::RefCell;
use std::rc::Rc;

use crate::errors::{EvalError, Result};
use crate::value::{ParamType, Value};

/// Shared handle into the live object graph. Navigation pushes clone the
/// handle, so a write through a pushed context is visible from the parent.
pub type ObjectHandle = Rc<RefCell<dyn Object>>;

/// Wrap a concrete object into a graph value.
pub fn into_value<T: Object + 'static>(object: T) -> Value {
    Value::Object(Rc::new(RefCell::new(object)))
}

/// Describes one property of a target type. The display name defaults to the
/// declared name and may be overridden; `shown` only affects the member
/// listing, never resolution.
#[derive(Debug, Clone)]
pub struct PropertyInfo {
    pub name: &'static str,
    pub display: Option<&'static str>,
    pub ty: ParamType,
    pub readable: bool,
    pub writable: bool,
    pub shown: bool,
}

impl PropertyInfo {
    pub fn display_name(&self) -> &str {
        self.display.unwrap_or(self.name)
    }
}

/// Describes one method of a target type. `methods()` returns these in
/// declaration order, which is also overload-resolution order.
#[derive(Debug, Clone)]
pub struct MethodInfo {
    pub name: &'static str,
    pub display: Option<&'static str>,
    pub params: Vec<ParamType>,
    pub shown: bool,
}

impl MethodInfo {
    pub fn display_name(&self) -> &str {
        self.display.unwrap_or(self.name)
    }
}

/// The introspection capability every explorable object implements: a
/// hand-written descriptor table standing in for runtime reflection.
///
/// `get`/`set` address properties by *declared* name (the resolver maps
/// display names back to declared names); `call` addresses a method by its
/// index into the `methods()` vector, after the resolver has already matched
/// name, arity and argument types.
pub trait Object {
    fn type_name(&self) -> &str;

    fn properties(&self) -> Vec<PropertyInfo>;

    fn methods(&self) -> Vec<MethodInfo>;

    fn get(&self, name: &str) -> Option<Value>;

    fn set(&mut self, name: &str, value: Value) -> Result<()>;

    fn call(&mut self, index: usize, args: Vec<Value>) -> Result<Value>;
}

/// Uniform "no such member" error for `set`/`call` fallback arms in
/// descriptor-table implementations.
pub fn unknown_member(name: &str) -> EvalError {
    EvalError::UnknownMember(name.to_string())
}

impl std::fmt::Debug for dyn Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Object({})", self.type_name())
    }
}
