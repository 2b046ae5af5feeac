use clap::Parser;

use object_console::errors::{EvalError, Result};
use object_console::object::{unknown_member, MethodInfo, Object, PropertyInfo};
use object_console::shell::{Shell, ShellOptions, StdIo};
use object_console::value::{ParamType, Ty, Value};
use object_console::{into_value, Session};

/// Interactive console over a demo object graph.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// List every member, not only those marked for display.
    #[arg(long)]
    show_all: bool,
}

struct Pet {
    name: String,
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

struct Person {
    name: String,
    length: f64,
    weight: f64,
    pet: Value,
    scores: Vec<Value>,
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
            // Readable but deliberately left out of the listing.
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
        ]
    }

    fn get(&self, name: &str) -> Option<Value> {
        match name {
            "Name" => Some(Value::Str(self.name.clone())),
            "Length" => Some(Value::F64(self.length)),
            "Weight" => Some(Value::F64(self.weight)),
            "Pet" => Some(self.pet.clone()),
            "Scores" => Some(Value::Seq(self.scores.clone())),
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
            _ => Err(EvalError::UnknownMember(format!("method #{index}"))),
        }
    }
}

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let person = Person {
        name: "Bart".into(),
        length: 1.80,
        weight: 83.2,
        pet: into_value(Pet {
            name: "Rex".into(),
        }),
        scores: vec![Value::I8(10), Value::I8(20), Value::I8(30)],
    };

    let session = Session::new(into_value(person));
    let options = ShellOptions {
        show_all: args.show_all,
    };
    Shell::new(session, StdIo, options).run()
}
