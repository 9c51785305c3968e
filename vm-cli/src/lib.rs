//! Thin composition layer over the parser and the virtual machine: the
//! surface an embedding application (or the demonstration binary in this
//! crate) actually talks to.

use std::error::Error as StdError;
use std::fmt;

use vm_asm::ParseError;
use vm_core::{RuntimeError, VMConfig, VmHooks, VmSnapshot, Vm};

/// Either stage of `run`/`execute_single` can fail; this unifies them so
/// callers have one error type to match on.
#[derive(Debug)]
pub enum Error {
    Parse(ParseError),
    Runtime(RuntimeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "{}", e),
            Error::Runtime(e) => write!(f, "{}", e),
        }
    }
}

impl StdError for Error {}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Error::Runtime(e)
    }
}

/// Composes the parser and the VM. Owns the hook implementation passed to
/// the VM; callers supply their own (a real LLM client, a test double) via
/// `with_hooks`, or accept the bundled null default via `new`.
pub struct Interpreter {
    vm: Vm,
}

impl Interpreter {
    pub fn new(config: VMConfig) -> Self {
        Interpreter { vm: Vm::new(config) }
    }

    pub fn with_hooks(config: VMConfig, hooks: Box<dyn VmHooks>) -> Self {
        Interpreter {
            vm: Vm::with_hooks(config, hooks),
        }
    }

    /// Parses `source` and runs it to completion (halt or error).
    pub fn run(&mut self, source: &str) -> Result<(), Error> {
        let program = vm_asm::parse(source)?;
        log::info!("parsed program with {} instructions", program.instructions.len());
        self.vm.execute(program)?;
        log::info!("program completed");
        Ok(())
    }

    /// Parses and executes exactly one instruction against the current
    /// state, without requiring a loaded program.
    pub fn execute_single(&mut self, line: &str) -> Result<(), Error> {
        let instruction = vm_asm::parse_instruction(line)?;
        self.vm.execute_instruction(instruction)?;
        Ok(())
    }

    pub fn dump_state(&self) -> VmSnapshot {
        self.vm.dump_state()
    }

    pub fn reset(&mut self) {
        log::info!("resetting interpreter state");
        self.vm.reset();
    }
}
