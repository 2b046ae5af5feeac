use std::io::{self, BufRead, Write};

use itertools::Itertools;
use tracing::debug;

use crate::value::{ParamType, Ty, Value};
use crate::{Outcome, Session};

/// Blocking line producer/consumer boundary between the shell and whatever
/// terminal or test harness drives it.
pub trait LineIo {
    /// Next input line, without the trailing newline; `None` on end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// stdin/stdout implementation used by the binary.
#[derive(Default)]
pub struct StdIo;

impl LineIo for StdIo {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if io::stdin().lock().read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(Some(buf))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ShellOptions {
    /// List every member, ignoring the per-member `shown` flags.
    pub show_all: bool,
}

const HELP: &str = "\
Type an expression against the current context:
  Name               read a property
  Pet.Name           follow nested properties
  Say(\"hi\")          invoke a method
  Scores[0]          index into a sequence
  Name=\"Carl\"        assign to a property
  ->Pet              navigate into a value
  return             navigate back out
System commands: help (?), clear (cls), exit (quit)";

/// The read/print loop. System commands are intercepted here; everything
/// else goes through [`Session::eval_line`].
pub struct Shell<I> {
    session: Session,
    io: I,
    options: ShellOptions,
}

impl<I: LineIo> Shell<I> {
    pub fn new(session: Session, io: I, options: ShellOptions) -> Self {
        Self {
            session,
            io,
            options,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let prompt = self.prompt();
            self.io.write_line(&prompt)?;
            let Some(input) = self.io.read_line()? else {
                break;
            };
            match input.trim() {
                "exit" | "quit" => break,
                "clear" | "cls" => self.io.write_line("\x1b[2J\x1b[H")?,
                "help" | "?" => self.io.write_line(HELP)?,
                line => self.dispatch(line)?,
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, line: &str) -> io::Result<()> {
        match self.session.eval_line(line) {
            Ok(Outcome::Empty) | Ok(Outcome::Popped) => Ok(()),
            Ok(Outcome::Value(v)) => self.io.write_line(&v.to_string()),
            Ok(Outcome::Pushed(v)) => self.io.write_line(&format!("entered {v}")),
            Ok(Outcome::AtBase) => self.io.write_line("already at the base context"),
            Err(e) if e.is_invocation() => self.io.write_line(&format!("error: {e}")),
            Err(e) => {
                // Exact cause goes to the log; the user sees one uniform line.
                debug!(error = %e, "line rejected");
                self.io.write_line("command unknown")
            }
        }
    }

    /// Context name, its listed members, and the question.
    fn prompt(&self) -> String {
        match self.session.current() {
            Value::Object(handle) => {
                let object = handle.borrow();
                let properties = object.properties();
                let methods = object.methods();
                // List members marked for display; if the type marks none,
                // or the shell is configured to show all, list everything.
                let any_marked =
                    properties.iter().any(|p| p.shown) || methods.iter().any(|m| m.shown);
                let all = self.options.show_all || !any_marked;
                let members = properties
                    .iter()
                    .filter(|p| all || p.shown)
                    .map(|p| p.display_name().to_string())
                    .chain(methods.iter().filter(|m| all || m.shown).map(|m| {
                        format!(
                            "{}({})",
                            m.display_name(),
                            m.params.iter().map(type_label).join(", ")
                        )
                    }))
                    .join(", ");
                format!(
                    "[{}] {}\nWhat do you want to know?",
                    object.type_name(),
                    members
                )
            }
            other => format!("[{other}]\nWhat do you want to know?"),
        }
    }
}

fn type_label(param: &ParamType) -> String {
    let base = match param.ty {
        Ty::Bool => "bool",
        Ty::I8 => "i8",
        Ty::I16 => "i16",
        Ty::I32 => "i32",
        Ty::I64 => "i64",
        Ty::F64 => "f64",
        Ty::Str => "string",
        Ty::Seq => "sequence",
        Ty::Object => "object",
        Ty::Any => "any",
    };
    if param.nullable {
        format!("{base}?")
    } else {
        base.to_string()
    }
}
