use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;
use std::collections::HashMap;

use vm_core::{Instruction, Operand, Program};

use crate::error::ParseError;
use crate::strings::unescape;

#[derive(Parser)]
#[grammar = "grammar.pest"]
pub struct VmAsmParser;

fn process_operand(pair: Pair<Rule>) -> Result<Operand, ParseError> {
    match pair.as_rule() {
        Rule::register => {
            let digits = &pair.as_str()[1..];
            let n: u32 = digits
                .parse()
                .map_err(|_| ParseError::InvalidOperand(pair.as_str().to_string()))?;
            Ok(Operand::Register(n))
        }
        Rule::immediate => {
            let digits = &pair.as_str()[1..];
            let i: i64 = digits
                .parse()
                .map_err(|_| ParseError::InvalidOperand(pair.as_str().to_string()))?;
            Ok(Operand::Immediate(i))
        }
        Rule::address => {
            let hex = &pair.as_str()[1..];
            Ok(Operand::Address(hex.to_string()))
        }
        Rule::string_literal => {
            let inner = pair
                .into_inner()
                .next()
                .expect("string_literal always contains inner_string");
            Ok(Operand::StringLiteral(unescape(inner.as_str())?))
        }
        Rule::label_ref => Ok(Operand::LabelRef(pair.as_str().to_string())),
        other => unreachable!("unexpected operand rule: {:?}", other),
    }
}

fn process_instruction(pair: Pair<Rule>) -> Result<Instruction, ParseError> {
    let mut inner = pair.into_inner();
    let opcode = inner.next().expect("instruction always has an opcode identifier").as_str();
    let mut operands = Vec::new();
    for operand_pair in inner {
        operands.push(process_operand(operand_pair)?);
    }
    Ok(Instruction::new(opcode, operands))
}

/// Parses a complete program, building the instruction stream and the
/// label-to-index map in one streaming pass: a label's recorded index is
/// simply the instruction count seen so far, which is also how a label
/// defined at end of file naturally ends up pointing at `instructions.len()`.
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let mut pairs = VmAsmParser::parse(Rule::program, source)?;
    let program_pair = pairs.next().expect("program rule always produces a pair");

    let mut instructions = Vec::new();
    let mut labels: HashMap<String, usize> = HashMap::new();

    for pair in program_pair.into_inner() {
        match pair.as_rule() {
            Rule::label_def => {
                let name = pair
                    .into_inner()
                    .next()
                    .expect("label_def always contains an identifier")
                    .as_str()
                    .to_string();
                if labels.insert(name.clone(), instructions.len()).is_some() {
                    return Err(ParseError::DuplicateLabel(name));
                }
            }
            Rule::instruction => {
                instructions.push(process_instruction(pair)?);
            }
            Rule::EOI => {}
            other => unreachable!("unexpected top-level rule: {:?}", other),
        }
    }

    Ok(Program::new(instructions, labels))
}

/// Parses exactly one instruction, independent of any surrounding program
/// or label context — used for one-shot single-instruction execution.
pub fn parse_instruction(source: &str) -> Result<Instruction, ParseError> {
    let mut pairs = VmAsmParser::parse(Rule::single_instruction, source)?;
    let single = pairs.next().expect("single_instruction rule always produces a pair");
    let instruction_pair = single
        .into_inner()
        .next()
        .expect("single_instruction always wraps one instruction");
    process_instruction(instruction_pair)
}

/// Parses for validity only, discarding the resulting AST.
pub fn validate_syntax(source: &str) -> bool {
    parse(source).is_ok()
}
