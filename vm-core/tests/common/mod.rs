use std::collections::HashMap;

use vm_core::{Instruction, Operand, Program};

pub fn instr(opcode: &str, operands: Vec<Operand>) -> Instruction {
    Instruction::new(opcode, operands)
}

pub fn imm(i: i64) -> Operand {
    Operand::Immediate(i)
}

pub fn reg(n: u32) -> Operand {
    Operand::Register(n)
}

pub fn addr(s: &str) -> Operand {
    Operand::Address(s.to_string())
}

pub fn string(s: &str) -> Operand {
    Operand::StringLiteral(s.to_string())
}

pub fn label_ref(name: &str) -> Operand {
    Operand::LabelRef(name.to_string())
}

pub fn program(instructions: Vec<Instruction>, labels: &[(&str, usize)]) -> Program {
    let mut map = HashMap::new();
    for (name, idx) in labels {
        map.insert(name.to_string(), *idx);
    }
    Program::new(instructions, map)
}

pub fn no_ops() -> Vec<Operand> {
    Vec::new()
}
