//! A small hand-written object graph used by the integration tests: the
//! descriptor-table equivalent of the reflection-discovered view models the
//! console was built for.

use object_console::errors::{EvalError, Result};
use object_console::into_value;
use object_console::object::{unknown_member, MethodInfo, Object, PropertyInfo};
use object_console::value::{ParamType, Ty, Value};

pub struct Pet {
    pub name: String,
}

impl Object for Pet {
    fn type_name(&self) -> &str {
        "Pet"
    }

    fn properties(&self) -> Vec<PropertyInfo> {
        vec![PropertyInfo {
            name: "Name",
            display: None,
            ty: ParamType::of(Ty::Str),
            readable: true,
            writable: true,
            shown: true,
        }]
    }

    fn methods(&self) -> Vec<MethodInfo> {
        Vec::new()
    }

    fn get(&self, name: &str) -> Option<Value> {
        match name {
            "Name" => Some(Value::Str(self.name.clone())),
            _ => None,
        }
    }

    fn set(&mut self, name: &str, value: Value) -> Result<()> {
        match (name, value) {
            ("Name", Value::Str(s)) => {
                self.name = s;
                Ok(())
            }
            _ => Err(unknown_member(name)),
        }
    }

    fn call(&mut self, _index: usize, _args: Vec<Value>) -> Result<Value> {
        Err(unknown_member("<method>"))
    }
}

pub struct Person {
    pub name: String,
    pub length: f64,
    pub weight: f64,
    pub pet: Value,
    pub scores: Vec<Value>,
}

impl Object for Person {
    fn type_name(&self) -> &str {
        "Person"
    }

    fn properties(&self) -> Vec<PropertyInfo> {
        vec![
            PropertyInfo {
                name: "Name",
                display: None,
                ty: ParamType::of(Ty::Str),
                readable: true,
                writable: true,
                shown: true,
            },
            PropertyInfo {
                name: "Length",
                display: None,
                ty: ParamType::of(Ty::F64),
                readable: true,
                writable: true,
                shown: true,
            },
            PropertyInfo {
                name: "Weight",
                display: None,
                ty: ParamType::of(Ty::F64),
                readable: true,
                writable: true,
                shown: false,
            },
            PropertyInfo {
                name: "Pet",
                display: None,
                ty: ParamType::of(Ty::Object),
                readable: true,
                writable: false,
                shown: true,
            },
            PropertyInfo {
                name: "Scores",
                display: None,
                ty: ParamType::of(Ty::Seq),
                readable: true,
                writable: false,
                shown: true,
            },
            PropertyInfo {
                name: "Friends",
                display: None,
                ty: ParamType::of(Ty::Seq),
                readable: true,
                writable: false,
                shown: false,
            },
            // Display-name override: resolvable as `Id`, not `InternalId`.
            PropertyInfo {
                name: "InternalId",
                display: Some("Id"),
                ty: ParamType::of(Ty::Str),
                readable: true,
                writable: false,
                shown: false,
            },
            PropertyInfo {
                name: "Secret",
                display: None,
                ty: ParamType::of(Ty::Str),
                readable: false,
                writable: false,
                shown: false,
            },
        ]
    }

    fn methods(&self) -> Vec<MethodInfo> {
        vec![
            MethodInfo {
                name: "Say",
                display: None,
                params: vec![ParamType::of(Ty::Str)],
                shown: true,
            },
            MethodInfo {
                name: "SayTwoThings",
                display: None,
                params: vec![ParamType::of(Ty::Str), ParamType::of(Ty::Str)],
                shown: true,
            },
            MethodInfo {
                name: "Jump",
                display: None,
                params: Vec::new(),
                shown: true,
            },
            MethodInfo {
                name: "Pick",
                display: None,
                params: vec![ParamType::of(Ty::I16)],
                shown: false,
            },
            MethodInfo {
                name: "Pick",
                display: None,
                params: vec![ParamType::of(Ty::I64)],
                shown: false,
            },
            MethodInfo {
                name: "Greet",
                display: None,
                params: vec![ParamType::nullable(Ty::Str)],
                shown: false,
            },
            MethodInfo {
                name: "Explode",
                display: None,
                params: Vec::new(),
                shown: false,
            },
            MethodInfo {
                name: "GetPet",
                display: None,
                params: Vec::new(),
                shown: false,
            },
        ]
    }

    fn get(&self, name: &str) -> Option<Value> {
        match name {
            "Name" => Some(Value::Str(self.name.clone())),
            "Length" => Some(Value::F64(self.length)),
            "Weight" => Some(Value::F64(self.weight)),
            "Pet" => Some(self.pet.clone()),
            "Scores" => Some(Value::Seq(self.scores.clone())),
            "Friends" => Some(Value::Seq(vec![self.pet.clone()])),
            "InternalId" => Some(Value::Str("p-1".into())),
            _ => None,
        }
    }

    fn set(&mut self, name: &str, value: Value) -> Result<()> {
        match (name, value) {
            ("Name", Value::Str(s)) => self.name = s,
            ("Length", Value::F64(f)) => self.length = f,
            ("Weight", Value::F64(f)) => self.weight = f,
            (other, _) => return Err(unknown_member(other)),
        }
        Ok(())
    }

    fn call(&mut self, index: usize, args: Vec<Value>) -> Result<Value> {
        let mut args = args.into_iter();
        match index {
            // Say(string)
            0 => Ok(args.next().unwrap_or(Value::Null)),
            // SayTwoThings(string, string)
            1 => {
                let first = args.next().unwrap_or(Value::Null);
                let second = args.next().unwrap_or(Value::Null);
                Ok(Value::Str(format!("{first} and {second}")))
            }
            // Jump()
            2 => Ok(Value::Str(format!("{} jumped", self.name))),
            // Pick(i16) / Pick(i64): report which overload won.
            3 => Ok(Value::Str(format!(
                "i16:{}",
                args.next().unwrap_or(Value::Null)
            ))),
            4 => Ok(Value::Str(format!(
                "i64:{}",
                args.next().unwrap_or(Value::Null)
            ))),
            // Greet(string?)
            5 => Ok(match args.next() {
                Some(Value::Str(s)) => Value::Str(format!("hello, {s}")),
                _ => Value::Str("hello, stranger".into()),
            }),
            // Explode(): always fails at invocation time.
            6 => Err(EvalError::Invocation {
                name: "Explode".into(),
                message: "boom".into(),
            }),
            // GetPet()
            7 => Ok(self.pet.clone()),
            _ => Err(unknown_member("<method>")),
        }
    }
}

pub fn person() -> Value {
    into_value(Person {
        name: "Bart".into(),
        length: 1.80,
        weight: 83.2,
        pet: into_value(Pet { name: "Rex".into() }),
        scores: vec![Value::I8(10), Value::I8(20), Value::I8(30)],
    })
}
