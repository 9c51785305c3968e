use std::error::Error;
use std::fmt;

/// The runtime error taxonomy. Variants carry just enough structure for
/// callers to match on category; `Display` renders the exact wording tests
/// and logs depend on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuntimeError {
    UnknownOpcode(String),
    DataStackUnderflow,
    DataStackEmpty,
    ControlStackUnderflow,
    NotEnoughValues { op: String, needed: usize },
    DataStackOverflow,
    ControlStackOverflow,
    CallDepthExceeded(usize),
    DivisionByZero,
    TypeMismatch { op: String },
    MemoryExceeded(u64),
    StepsExceeded(u64),
    UndefinedLabel(String),
    InvalidArguments(String),
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RuntimeError::UnknownOpcode(name) => write!(f, "Unknown opcode: {}", name),
            RuntimeError::DataStackUnderflow => write!(f, "Data stack underflow"),
            RuntimeError::DataStackEmpty => write!(f, "Data stack empty"),
            RuntimeError::ControlStackUnderflow => write!(f, "Control stack underflow"),
            RuntimeError::NotEnoughValues { op, .. } => {
                write!(f, "Not enough values on stack to {}", op)
            }
            RuntimeError::DataStackOverflow => {
                write!(f, "Data stack push would exceed maximum")
            }
            RuntimeError::ControlStackOverflow => {
                write!(f, "Control stack push would exceed maximum")
            }
            RuntimeError::CallDepthExceeded(max) => {
                write!(f, "Call depth would exceed maximum of {}", max)
            }
            RuntimeError::DivisionByZero => write!(f, "Division by zero"),
            RuntimeError::TypeMismatch { op } => {
                write!(f, "Expected integer operand for {}", op)
            }
            RuntimeError::MemoryExceeded(max) => {
                write!(f, "Memory usage exceeded maximum of {}", max)
            }
            RuntimeError::StepsExceeded(max) => {
                write!(f, "Execution exceeded maximum steps of {}", max)
            }
            RuntimeError::UndefinedLabel(name) => write!(f, "Undefined label: {}", name),
            RuntimeError::InvalidArguments(op) => write!(f, "Invalid arguments for {}", op),
        }
    }
}

impl Error for RuntimeError {}
