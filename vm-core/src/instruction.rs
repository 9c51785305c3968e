use std::fmt;

use crate::operand::Operand;

/// One parsed instruction: an opcode name (already canonicalized to
/// uppercase by the parser) plus its ordered operands. The opcode is kept
/// as a plain string here rather than a closed enum so the parser does not
/// need to know the opcode table — an unknown opcode is a `load_program`
/// error, not a parse error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: String,
    pub operands: Vec<Operand>,
}

impl Instruction {
    pub fn new(opcode: impl Into<String>, operands: Vec<Operand>) -> Self {
        Instruction {
            opcode: opcode.into().to_uppercase(),
            operands,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.opcode)?;
        for op in &self.operands {
            write!(f, " {}", op)?;
        }
        Ok(())
    }
}
